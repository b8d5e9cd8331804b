use std::sync::Arc;

use serde_json::Value;

use crate::composition::ContentComposer;
use crate::config::EngineConfig;
use crate::roles::{resolve_hint, PageRole, RoleClassifier, SchemaRole};
use crate::schema::{CleanOutcome, SchemaComplianceEngine, SchemaGraph};
use crate::snippets::{audit_page_with, PageAudit};
use crate::tokens::{SharedRepository, TokenLoadError, TokenRepository};
use crate::types::content_bundle::{ContentBundle, ValidationReport};

/// Process-wide context: token data, composer settings, role rules and
/// schema policy. Built once at startup and passed to callers explicitly.
///
/// Every operation is `&self` and allocation-local, so one `Engine` can be
/// shared across threads. Token data may be replaced with [`Engine::reload`].
#[derive(Debug)]
pub struct Engine {
    tokens: SharedRepository,
    composer: ContentComposer,
    classifier: RoleClassifier,
    schema: SchemaComplianceEngine,
}

impl Engine {
    pub fn new(config: EngineConfig, repo: TokenRepository) -> Self {
        Self {
            tokens: SharedRepository::new(repo),
            composer: ContentComposer::new(config.composer),
            classifier: RoleClassifier::standard(),
            schema: SchemaComplianceEngine::new(config.schema),
        }
    }

    /// Default configuration over the phrase library shipped with the crate.
    pub fn embedded() -> Result<Self, TokenLoadError> {
        Ok(Self::new(EngineConfig::default(), TokenRepository::embedded()?))
    }

    pub fn with_classifier(mut self, classifier: RoleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn tokens(&self) -> Arc<TokenRepository> {
        self.tokens.snapshot()
    }

    /// Publish new token data. Calls already running keep their snapshot.
    pub fn reload(&self, repo: TokenRepository) -> Arc<TokenRepository> {
        self.tokens.swap(repo)
    }

    pub fn compose(&self, service: &str, city: &str, canonical_url: &str) -> ContentBundle {
        let repo = self.tokens.snapshot();
        self.composer.compose(&repo, service, city, canonical_url)
    }

    pub fn classify(&self, path: &str, hint: Option<&str>) -> PageRole {
        self.classifier.classify(path, hint.and_then(resolve_hint))
    }

    /// Schema role for a page: classification narrowed by homepage,
    /// contact and service paths.
    pub fn schema_role(&self, path: &str, hint: Option<&str>) -> SchemaRole {
        SchemaRole::for_page(path, self.classify(path, hint))
    }

    pub fn validate_schema(&self, graph: &[Value], role: SchemaRole) -> ValidationReport {
        self.schema.validate(graph, role)
    }

    pub fn clean_schema(&self, graph: &[Value], role: SchemaRole) -> SchemaGraph {
        self.schema.clean(graph, role)
    }

    pub fn clean_schema_with_report(&self, graph: &[Value], role: SchemaRole) -> CleanOutcome {
        self.schema.clean_with_report(graph, role)
    }

    pub fn audit_page(
        &self,
        path: &str,
        title: &str,
        description: &str,
        explicit_role: Option<&str>,
    ) -> PageAudit {
        audit_page_with(&self.classifier, path, title, description, explicit_role)
    }
}

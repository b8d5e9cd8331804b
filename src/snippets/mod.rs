pub mod generate;
pub mod lexicon;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::roles::{resolve_hint, PageRole, RoleClassifier};
use crate::types::content_bundle::ValidationReport;

pub use generate::{generate_description, generate_title};
pub use validate::{validate_description, validate_title, DESCRIPTION_IDEAL, TITLE_IDEAL};

/// Snippet inputs. Absent or blank fields are left out of composed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetData {
    pub service: Option<String>,
    pub location: Option<String>,
    pub outcome: Option<String>,
    pub who: Option<String>,
    pub proof: Option<String>,
    pub topic: Option<String>,
    pub domain: Option<String>,
    pub takeaway: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl SnippetData {
    pub fn service(&self) -> Option<&str> {
        present(&self.service)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn outcome(&self) -> Option<&str> {
        present(&self.outcome)
    }

    pub fn who(&self) -> Option<&str> {
        present(&self.who)
    }

    pub fn proof(&self) -> Option<&str> {
        present(&self.proof)
    }

    pub fn topic(&self) -> Option<&str> {
        present(&self.topic)
    }

    pub fn domain(&self) -> Option<&str> {
        present(&self.domain)
    }

    pub fn takeaway(&self) -> Option<&str> {
        present(&self.takeaway)
    }
}

/// Title and description checks for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAudit {
    pub path: String,
    pub role: PageRole,
    pub title: ValidationReport,
    pub description: ValidationReport,
    pub valid: bool,
}

impl PageAudit {
    /// Both reports merged, title messages first.
    pub fn combined(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.absorb(self.title.clone());
        report.absorb(self.description.clone());
        report
    }
}

/// Classify `path` with the standard rules and validate both snippets.
pub fn audit_page(
    path: &str,
    title: &str,
    description: &str,
    explicit_role: Option<&str>,
) -> PageAudit {
    audit_page_with(&RoleClassifier::standard(), path, title, description, explicit_role)
}

pub fn audit_page_with(
    classifier: &RoleClassifier,
    path: &str,
    title: &str,
    description: &str,
    explicit_role: Option<&str>,
) -> PageAudit {
    let hint = explicit_role.and_then(resolve_hint);
    let role = classifier.classify(path, hint);
    let title = validate_title(title, role);
    let description = validate_description(description, role);
    let valid = title.valid && description.valid;

    PageAudit {
        path: path.to_string(),
        role,
        title,
        description,
        valid,
    }
}

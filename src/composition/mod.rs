pub mod templates;

use crate::config::ComposerConfig;
use crate::rng::{new_stream, pick, shuffle_take, DeterministicStream};
use crate::tokens::{CityTokens, TokenRepository, TokenSet};
use crate::types::content_bundle::ContentBundle;
use crate::types::identifiers::SeedKey;

use templates::{
    city_display_from_slug, escape_html, join_present, natural_join, render_list,
    title_case_slug, with_footer,
};

/// Token selections for one page, before any text is rendered.
///
/// Draw order is fixed: angles, process, benefits, proof, sentences, local,
/// then cta. `nearby` is a plain prefix and consumes no draws. Reordering
/// these steps changes every page for every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub angles: Vec<String>,
    pub process: Vec<String>,
    pub benefits: Vec<String>,
    pub proof: Vec<String>,
    pub sentences: Vec<String>,
    pub local: Vec<String>,
    pub nearby: Vec<String>,
    pub cta: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContentComposer {
    config: ComposerConfig,
}

impl Default for ContentComposer {
    fn default() -> Self {
        Self {
            config: ComposerConfig::v0(),
        }
    }
}

impl ContentComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose the bundle for `(service, city)`, seeded by `canonical_url`.
    pub fn compose(
        &self,
        repo: &TokenRepository,
        service: &str,
        city: &str,
        canonical_url: &str,
    ) -> ContentBundle {
        let key = SeedKey::new(canonical_url);
        let seed = key.seed();
        tracing::debug!(
            service = service,
            city = city,
            key = key.as_str(),
            seed = seed.value(),
            "Composing page content"
        );

        let mut stream = new_stream(seed);
        self.compose_with(repo, service, city, &mut stream)
    }

    /// Compose with a caller-supplied stream.
    pub fn compose_with<S: DeterministicStream + ?Sized>(
        &self,
        repo: &TokenRepository,
        service: &str,
        city: &str,
        stream: &mut S,
    ) -> ContentBundle {
        let merged = match repo.service(service) {
            Some(overlay) => repo.base.merge(overlay),
            None => {
                tracing::debug!(service = service, "No service tokens, using base library");
                repo.base.clone()
            }
        };

        let city_tokens = match repo.city(city) {
            Some(tokens) => tokens.clone(),
            None => {
                tracing::debug!(city = city, "No city tokens, using fallback");
                CityTokens::fallback(self.config.fallback_local.clone())
            }
        };

        let selection = self.select(&repo.base, &merged, &city_tokens, stream);

        let service_name = merged
            .text("name")
            .map(str::to_string)
            .unwrap_or_else(|| title_case_slug(service));
        let city_name = city_tokens
            .name
            .clone()
            .unwrap_or_else(|| city_display_from_slug(city));

        self.render(&selection, &service_name, &city_name)
    }

    /// Draw every section from `stream` in the fixed order.
    pub fn select<S: DeterministicStream + ?Sized>(
        &self,
        base: &TokenSet,
        merged: &TokenSet,
        city: &CityTokens,
        stream: &mut S,
    ) -> Selection {
        let caps = &self.config.caps;

        let angles = shuffle_take(merged.list("angles"), caps.angles, stream);
        let process = shuffle_take(merged.list("process"), caps.process, stream);
        let benefits = shuffle_take(merged.list("benefits"), caps.benefits, stream);
        let proof = shuffle_take(base.list("proof_points"), caps.proof, stream);
        let sentences = shuffle_take(base.list("sentences"), caps.sentences, stream);
        let local = shuffle_take(&city.local, caps.local, stream);
        let nearby: Vec<String> = city.nearbys.iter().take(caps.nearby).cloned().collect();
        let cta = pick(base.list("ctas"), stream).cloned();

        Selection {
            angles,
            process,
            benefits,
            proof,
            sentences,
            local,
            nearby,
            cta,
        }
    }

    fn render(&self, sel: &Selection, service: &str, city: &str) -> ContentBundle {
        let service_html = escape_html(service);
        let city_html = escape_html(city);
        let sentence = |i: usize| sel.sentences.get(i);
        let escaped = |s: Option<&String>| s.map(|s| escape_html(s)).unwrap_or_default();

        let intro = join_present(&[
            format!("{service_html} in {city_html}."),
            escaped(sentence(0)),
            escaped(sentence(1)),
        ]);

        let angles = render_list("ul", "angles", &sel.angles);

        let outcomes = if sel.benefits.is_empty() {
            escaped(sentence(2))
        } else {
            let benefits: Vec<String> = sel.benefits.iter().map(|b| escape_html(b)).collect();
            join_present(&[
                format!(
                    "What {service_html} delivers in {city_html}: {}.",
                    natural_join(&benefits)
                ),
                escaped(sentence(2)),
            ])
        };

        let locals = join_present(&sel.local.iter().map(|l| escape_html(l)).collect::<Vec<_>>());

        let process = with_footer(render_list("ol", "process", &sel.process), sentence(3));
        let proof = with_footer(render_list("ul", "proof", &sel.proof), sentence(4));

        let nearby = if sel.nearby.is_empty() {
            String::new()
        } else {
            let names: Vec<String> = sel.nearby.iter().map(|n| escape_html(n)).collect();
            format!("Also serving {}.", natural_join(&names))
        };

        let cta = escape_html(sel.cta.as_deref().unwrap_or(&self.config.fallback_cta));

        let local_answer = sel
            .local
            .first()
            .map(String::as_str)
            .unwrap_or(&self.config.fallback_local);
        let faq_local = format!(
            "How does {service_html} work for businesses in {city_html}? {}",
            escape_html(local_answer)
        );

        ContentBundle {
            intro,
            angles,
            outcomes,
            locals,
            process,
            proof,
            nearby,
            cta,
            faq_local,
        }
    }
}

/// `compose` over every service x city pair in sorted slug order.
///
/// Canonical URLs take the form `{base_url}/services/{service}/{city}/`.
pub fn compose_matrix(
    composer: &ContentComposer,
    repo: &TokenRepository,
    base_url: &str,
) -> Vec<(String, String, ContentBundle)> {
    let base_url = base_url.trim_end_matches('/');
    let mut out = Vec::new();
    for service in repo.service_slugs() {
        for city in repo.city_slugs() {
            let canonical = format!("{base_url}/services/{service}/{city}/");
            let bundle = composer.compose(repo, service, city, &canonical);
            out.push((service.to_string(), city.to_string(), bundle));
        }
    }
    out
}

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token_set::TokenSet;

const EMBEDDED_LIBRARY: &str = include_str!("../../data/tokens.json");

#[derive(Debug, Error)]
pub enum TokenLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid slug in {section}: {slug:?}")]
    InvalidKey { section: &'static str, slug: String },
}

/// Phrases tied to one city page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub local: Vec<String>,
    #[serde(default)]
    pub nearbys: Vec<String>,
}

impl CityTokens {
    /// Stand-in for a city with no token data: one local sentence, no neighbours.
    pub fn fallback(local: impl Into<String>) -> Self {
        Self {
            name: None,
            local: vec![local.into()],
            nearbys: Vec::new(),
        }
    }
}

// This is intentionally read-only:
// no mutation after load
// replacement goes through SharedRepository
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenRepository {
    #[serde(default)]
    pub base: TokenSet,
    #[serde(default)]
    pub services: BTreeMap<String, TokenSet>,
    #[serde(default)]
    pub cities: BTreeMap<String, CityTokens>,
}

impl TokenRepository {
    pub fn new(
        base: TokenSet,
        services: BTreeMap<String, TokenSet>,
        cities: BTreeMap<String, CityTokens>,
    ) -> Result<Self, TokenLoadError> {
        let repo = Self {
            base,
            services,
            cities,
        };
        repo.check_slugs()?;
        Ok(repo)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TokenLoadError> {
        let repo: TokenRepository = serde_json::from_str(raw)?;
        repo.check_slugs()?;

        tracing::info!(
            services = repo.services.len(),
            cities = repo.cities.len(),
            base_categories = repo.base.len(),
            "Loaded token repository"
        );
        Ok(repo)
    }

    pub fn from_path(path: &Path) -> Result<Self, TokenLoadError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The phrase library shipped with the crate.
    pub fn embedded() -> Result<Self, TokenLoadError> {
        Self::from_json_str(EMBEDDED_LIBRARY)
    }

    pub fn service(&self, slug: &str) -> Option<&TokenSet> {
        self.services.get(slug)
    }

    pub fn city(&self, slug: &str) -> Option<&CityTokens> {
        self.cities.get(slug)
    }

    pub fn service_slugs(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn city_slugs(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    fn check_slugs(&self) -> Result<(), TokenLoadError> {
        for slug in self.services.keys() {
            if !is_valid_slug(slug) {
                return Err(TokenLoadError::InvalidKey {
                    section: "services",
                    slug: slug.clone(),
                });
            }
        }
        for slug in self.cities.keys() {
            if !is_valid_slug(slug) {
                return Err(TokenLoadError::InvalidKey {
                    section: "cities",
                    slug: slug.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Lowercase ASCII letters, digits and `-`, non-empty.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

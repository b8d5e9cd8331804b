use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::SchemaPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Section cap must be non-zero: {0}")]
    InvalidCap(&'static str),
}

/// Maximum items kept per composed section.
///
/// Caps are part of the reproducibility contract: changing one changes the
/// content of every page that uses the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionCaps {
    pub angles: usize,
    pub process: usize,
    pub benefits: usize,
    pub proof: usize,
    pub sentences: usize,
    pub local: usize,
    pub nearby: usize,
}

impl Default for SectionCaps {
    fn default() -> Self {
        Self {
            angles: 3,
            process: 4,
            benefits: 4,
            proof: 5,
            sentences: 5,
            local: 2,
            nearby: 4,
        }
    }
}

impl SectionCaps {
    fn check(&self) -> Result<(), ConfigError> {
        let named = [
            ("angles", self.angles),
            ("process", self.process),
            ("benefits", self.benefits),
            ("proof", self.proof),
            ("sentences", self.sentences),
            ("local", self.local),
            ("nearby", self.nearby),
        ];
        match named.iter().find(|(_, cap)| *cap == 0) {
            Some((name, _)) => Err(ConfigError::InvalidCap(*name)),
            None => Ok(()),
        }
    }
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub version: String,
    pub caps: SectionCaps,
    /// Local sentence used when a city has no token data.
    pub fallback_local: String,
    /// CTA used when the base library has no `ctas`.
    pub fallback_cta: String,
}

impl ComposerConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            caps: SectionCaps::default(),
            fallback_local: "We work with businesses across the area.".into(),
            fallback_cta: "Contact us to get started".into(),
        }
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Everything an [`Engine`](crate::engine::Engine) needs besides token data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub composer: ComposerConfig,
    pub schema: SchemaPolicy,
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.composer.caps.check()
    }
}

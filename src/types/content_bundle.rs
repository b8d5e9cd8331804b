use serde::{Deserialize, Serialize};

use crate::types::identifiers::ContentFingerprint;

/// The generated sections for one (service, city) page.
///
/// Every field is ready to embed: interpolated token text is already
/// HTML-escaped, `process` is `<ol>` markup and `proof` is `<ul>` markup.
/// Field order is part of the serialized contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub intro: String,
    pub angles: String,
    pub outcomes: String,
    pub locals: String,
    pub process: String,
    pub proof: String,
    pub nearby: String,
    pub cta: String,
    pub faq_local: String,
}

impl ContentBundle {
    /// Hash of the serialized bundle. Identical inputs give identical fingerprints.
    pub fn fingerprint(&self) -> Result<ContentFingerprint, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(ContentFingerprint::from_content(&bytes))
    }
}

/// Outcome of an advisory check. Never thrown; always returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Fold another report into this one, keeping message order.
    pub fn absorb(&mut self, other: ValidationReport) {
        if !other.errors.is_empty() {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

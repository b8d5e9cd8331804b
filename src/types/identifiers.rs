use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Mask applied to every derived seed. Seeds stay non-negative 31-bit values.
pub const SEED_MASK: u32 = 0x7FFF_FFFF;

/// Stable string a page's content is derived from, usually its canonical URL.
///
/// The key is used verbatim. Two URLs differing only by a trailing slash
/// are different keys and produce different pages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedKey(String);

impl SeedKey {
    pub fn new(key: impl Into<String>) -> Self {
        SeedKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn seed(&self) -> Seed {
        Seed::derive(&self.0)
    }
}

impl From<&str> for SeedKey {
    fn from(value: &str) -> Self {
        SeedKey::new(value)
    }
}

/// Seed for a deterministic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    /// First four bytes of SHA-256(key), big-endian, masked into `0..=SEED_MASK`.
    pub fn derive(key: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let hash = hasher.finalize();

        let word = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
        Seed(word & SEED_MASK)
    }

    pub fn from_raw(value: u32) -> Self {
        Seed(value & SEED_MASK)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Content hash of a rendered artifact, used to detect drift between
/// regenerations of the same page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ContentFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

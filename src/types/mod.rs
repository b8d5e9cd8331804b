pub mod content_bundle;
pub mod identifiers;

pub use content_bundle::{ContentBundle, ValidationReport};
pub use identifiers::{ContentFingerprint, Seed, SeedKey, SEED_MASK};

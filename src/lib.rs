//! Deterministic service x city page composition with schema role compliance.
//!
//! `pagecraft-core` assembles near-duplicate marketing pages from static
//! phrase libraries and keeps each page's JSON-LD consistent with its
//! communicative intent. Composition is seeded from the page's canonical
//! URL: identical inputs always produce identical content, byte-for-byte.
//!
//! The stream algorithm, the draw order and the section caps are part of
//! that guarantee. Changing any of them regenerates every published page
//! with different content.

pub mod canonical;
pub mod composition;
pub mod config;
pub mod engine;
pub mod rng;
pub mod roles;
pub mod schema;
pub mod snippets;
pub mod tokens;
pub mod types;

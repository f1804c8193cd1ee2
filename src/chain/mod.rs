//! Chain statistics module for kusari.
//!
//! Everything downstream of tokenization lives here: the triplet value
//! types and frequency map, per-sentence extraction, corpus-wide
//! aggregation, the corpus orchestrator, and the SQLite-backed store.

pub mod aggregate;
pub mod builder;
pub mod extractor;
pub mod store;
pub mod triplet;

// Re-export commonly used types
pub use aggregate::*;
pub use builder::*;
pub use extractor::*;
pub use store::*;
pub use triplet::*;

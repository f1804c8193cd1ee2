//! Text analysis module for kusari.
//!
//! This module provides everything between raw corpus text and token
//! sequences: sentence segmentation, the morphological analyzer capability,
//! a bundled Unicode word-boundary analyzer, and the tokenizer adapter that
//! filters analyzer output into surface forms.

pub mod analyzer;
pub mod morpheme;
pub mod segmenter;
pub mod tokenizer;
pub mod unicode_word;

// Re-export commonly used types
pub use analyzer::*;
pub use morpheme::*;
pub use segmenter::*;
pub use tokenizer::*;
pub use unicode_word::*;

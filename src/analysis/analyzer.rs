//! The morphological analyzer capability.
//!
//! The chain pipeline never tokenizes text itself; it consumes the
//! [`MorphologicalAnalyzer`] capability, so a dictionary-based analyzer
//! (MeCab, ChaSen, a remote analysis service) and the bundled
//! [`UnicodeWordAnalyzer`](crate::analysis::unicode_word::UnicodeWordAnalyzer)
//! are interchangeable behind the same contract, and tests can substitute a
//! stub returning canned morphemes.

use crate::analysis::morpheme::Morpheme;
use crate::error::Result;

/// Trait for morphological analyzers that parse a sentence into morphemes.
pub trait MorphologicalAnalyzer: Send + Sync {
    /// Parse one sentence into an ordered sequence of morpheme nodes.
    ///
    /// Implementations may include their own synthetic begin/end-of-sentence
    /// nodes (part-of-speech id 0); the tokenizer adapter filters those out.
    fn parse(&self, sentence: &str) -> Result<Vec<Morpheme>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

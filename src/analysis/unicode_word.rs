//! Unicode word-boundary analyzer implementation.
//!
//! This module provides a dictionary-free [`MorphologicalAnalyzer`] built on
//! the Unicode Text Segmentation algorithm (UAX #29). It splits a sentence
//! on word boundaries, keeps word and punctuation segments (punctuation is a
//! morpheme in its own right for chain statistics), drops whitespace, and
//! brackets its output with synthetic boundary nodes the way dictionary
//! analyzers do.
//!
//! It is a pragmatic default for alphabetic text; for Japanese a
//! dictionary-based analyzer behind the same trait will segment far better.
//!
//! # Examples
//!
//! ```
//! use kusari::analysis::analyzer::MorphologicalAnalyzer;
//! use kusari::analysis::unicode_word::UnicodeWordAnalyzer;
//!
//! let analyzer = UnicodeWordAnalyzer::new();
//! let morphemes = analyzer.parse("hello world.").unwrap();
//!
//! // Boundary nodes bracket the real morphemes; whitespace is dropped.
//! assert!(morphemes.first().unwrap().is_boundary());
//! assert!(morphemes.last().unwrap().is_boundary());
//! assert_eq!(morphemes[1].surface, "hello");
//! assert_eq!(morphemes[2].surface, "world");
//! assert_eq!(morphemes[3].surface, ".");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::analyzer::MorphologicalAnalyzer;
use crate::analysis::morpheme::Morpheme;
use crate::error::Result;

/// Part-of-speech id this analyzer assigns to word segments.
pub const POS_WORD: u16 = 1;

/// Part-of-speech id this analyzer assigns to punctuation segments.
pub const POS_PUNCTUATION: u16 = 2;

/// A morphological analyzer that splits sentences on Unicode word boundaries.
///
/// Uses `split_word_bounds` rather than `unicode_words` so that punctuation
/// segments survive; a sentence-final full stop is part of the statistics a
/// chain walker relies on.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordAnalyzer;

impl UnicodeWordAnalyzer {
    /// Create a new Unicode word analyzer.
    pub fn new() -> Self {
        UnicodeWordAnalyzer
    }

    fn pos_id_for(segment: &str) -> u16 {
        if segment.chars().all(|c| !c.is_alphanumeric()) {
            POS_PUNCTUATION
        } else {
            POS_WORD
        }
    }
}

impl MorphologicalAnalyzer for UnicodeWordAnalyzer {
    fn parse(&self, sentence: &str) -> Result<Vec<Morpheme>> {
        let mut morphemes = vec![Morpheme::boundary()];

        for segment in sentence.split_word_bounds() {
            if segment.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            morphemes.push(Morpheme::new(segment, Self::pos_id_for(segment)));
        }

        morphemes.push(Morpheme::boundary());
        Ok(morphemes)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

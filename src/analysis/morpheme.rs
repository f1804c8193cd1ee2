//! Morpheme types produced by morphological analysis.
//!
//! A [`Morpheme`] is one node of an analyzer's output: its surface form as
//! it appeared in the sentence, plus the part-of-speech id the analyzer
//! assigned to it. Part-of-speech id 0 is reserved for the analyzer's own
//! synthetic begin/end-of-sentence nodes, which carry no surface text and
//! are dropped by the tokenizer adapter before extraction.
//!
//! # Examples
//!
//! ```
//! use kusari::analysis::morpheme::Morpheme;
//!
//! let morpheme = Morpheme::new("hello", 1);
//! assert_eq!(morpheme.surface, "hello");
//! assert!(!morpheme.is_boundary());
//!
//! let boundary = Morpheme::boundary();
//! assert!(boundary.is_boundary());
//! ```

use serde::{Deserialize, Serialize};

/// Part-of-speech id that marks an analyzer's structural boundary nodes.
pub const BOUNDARY_POS_ID: u16 = 0;

/// A single morpheme emitted by a morphological analyzer.
///
/// The surface form is the exact text span as it appeared in the sentence;
/// no normalization, case-folding, or stemming is applied anywhere in the
/// pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    /// The surface form of the morpheme.
    pub surface: String,

    /// The part-of-speech id assigned by the analyzer.
    ///
    /// 0 ([`BOUNDARY_POS_ID`]) marks a synthetic begin/end-of-sentence node.
    pub pos_id: u16,
}

impl Morpheme {
    /// Create a new morpheme with the given surface form and part-of-speech id.
    pub fn new<S: Into<String>>(surface: S, pos_id: u16) -> Self {
        Morpheme {
            surface: surface.into(),
            pos_id,
        }
    }

    /// Create a synthetic boundary node (empty surface, pos id 0).
    pub fn boundary() -> Self {
        Morpheme {
            surface: String::new(),
            pos_id: BOUNDARY_POS_ID,
        }
    }

    /// Whether this node is a structural boundary artifact rather than a
    /// genuine morpheme.
    pub fn is_boundary(&self) -> bool {
        self.pos_id == BOUNDARY_POS_ID
    }
}

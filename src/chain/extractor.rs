//! Per-sentence triplet extraction.
//!
//! Converts one sentence's token sequence into its local frequency map: a
//! sliding window of three counts every interior transition, then one
//! opening `(BEGIN, t0, t1)` and one closing `(t[n-2], t[n-1], END)` entry
//! are set to exactly 1. Sentinel entries mark boundary positions for a
//! downstream chain walk, so their per-sentence count is fixed at one
//! occurrence rather than being a transition frequency.
//!
//! # Examples
//!
//! ```
//! use kusari::chain::extractor::TripletExtractor;
//! use kusari::chain::triplet::Triplet;
//!
//! let extractor = TripletExtractor::new();
//! let tokens: Vec<String> = ["hello", "world", "."].iter().map(|s| s.to_string()).collect();
//! let freqs = extractor.extract(&tokens);
//!
//! assert_eq!(freqs.len(), 3);
//! assert_eq!(freqs[&Triplet::begin("hello", "world")], 1);
//! assert_eq!(freqs[&Triplet::interior("hello", "world", ".")], 1);
//! assert_eq!(freqs[&Triplet::end("world", ".")], 1);
//! ```

use crate::chain::triplet::{FrequencyMap, Triplet};

/// Extractor turning a token sequence into a per-sentence frequency map.
#[derive(Clone, Debug, Default)]
pub struct TripletExtractor;

impl TripletExtractor {
    /// Create a new triplet extractor.
    pub fn new() -> Self {
        TripletExtractor
    }

    /// Extract the local frequency map for one sentence.
    ///
    /// A sentence of fewer than three tokens contributes nothing, sentinel
    /// entries included.
    pub fn extract(&self, tokens: &[String]) -> FrequencyMap {
        let mut freqs = FrequencyMap::default();
        if tokens.len() < 3 {
            return freqs;
        }

        for window in tokens.windows(3) {
            let triplet = Triplet::interior(&*window[0], &*window[1], &*window[2]);
            *freqs.entry(triplet).or_insert(0) += 1;
        }

        // Typed sentinels make these inserts disjoint from the window counts
        // even if a token's text equals a sentinel literal.
        freqs.insert(Triplet::begin(&*tokens[0], &*tokens[1]), 1);
        freqs.insert(
            Triplet::end(&*tokens[tokens.len() - 2], &*tokens[tokens.len() - 1]),
            1,
        );

        freqs
    }
}

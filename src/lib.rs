//! # Kusari
//!
//! Markov-chain preparation for Rust: converts raw natural-language text
//! into a frequency table of overlapping three-token sequences, the
//! statistical substrate for a Markov-chain text generator.
//!
//! ## Pipeline
//!
//! ```text
//! text → sentences → (per sentence) tokens → triplet counts → aggregate → SQLite
//! ```
//!
//! ## Features
//!
//! - Sentence segmentation that keeps terminating delimiters attached
//! - Pluggable morphological analyzers behind one capability trait
//! - Typed BEGIN/END sentinels that cannot alias real tokens
//! - Transactional SQLite persistence with reinitialize and append modes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use kusari::prelude::*;
//!
//! let builder = ChainBuilder::new(Arc::new(UnicodeWordAnalyzer::new())).unwrap();
//! let freqs = builder.frequencies("the lazy dog sleeps.");
//! assert_eq!(freqs[&Triplet::begin("the", "lazy")], 1);
//! ```

pub mod analysis;
pub mod chain;
pub mod cli;
pub mod error;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::analyzer::MorphologicalAnalyzer;
    pub use crate::analysis::morpheme::Morpheme;
    pub use crate::analysis::segmenter::SentenceSegmenter;
    pub use crate::analysis::tokenizer::TokenizerAdapter;
    pub use crate::analysis::unicode_word::UnicodeWordAnalyzer;
    pub use crate::chain::aggregate::ChainAggregator;
    pub use crate::chain::builder::ChainBuilder;
    pub use crate::chain::extractor::TripletExtractor;
    pub use crate::chain::store::{ChainRow, ChainStore, PersistMode};
    pub use crate::chain::triplet::{BEGIN, END, FrequencyMap, Gram, Triplet};
    pub use crate::error::{KusariError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

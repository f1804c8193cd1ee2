//! Tokenizer adapter over the morphological analyzer capability.
//!
//! The adapter is the only place the pipeline touches an analyzer: it
//! forwards one sentence, drops the analyzer's structural boundary nodes
//! (part-of-speech id 0), and hands back the surviving surface forms in
//! emission order. Analyzer failure degrades to an empty token sequence,
//! which the extractor treats as a too-short sentence.

use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::MorphologicalAnalyzer;

/// Adapter that turns one sentence into surface-form tokens.
#[derive(Clone)]
pub struct TokenizerAdapter {
    analyzer: Arc<dyn MorphologicalAnalyzer>,
}

impl TokenizerAdapter {
    /// Create a new adapter around the given analyzer.
    pub fn new(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        TokenizerAdapter { analyzer }
    }

    /// Tokenize one sentence into ordered surface forms.
    ///
    /// Boundary nodes are discarded; emission order is preserved. If the
    /// analyzer fails, the failure is logged and an empty sequence is
    /// returned so the sentence contributes no triplets.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        match self.analyzer.parse(sentence) {
            Ok(morphemes) => morphemes
                .into_iter()
                .filter(|m| !m.is_boundary())
                .map(|m| m.surface)
                .collect(),
            Err(e) => {
                warn!(
                    "analyzer '{}' failed on sentence ({} bytes): {}",
                    self.analyzer.name(),
                    sentence.len(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Get the name of the underlying analyzer.
    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }
}

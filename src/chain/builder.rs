//! Corpus-to-frequency-map orchestration.
//!
//! [`ChainBuilder`] wires the pipeline together: segment the corpus into
//! sentences, tokenize each sentence through the analyzer adapter, extract
//! each sentence's local triplet counts, and sum them into one corpus-wide
//! map. Data flows strictly forward; the corpus itself is never retained
//! past the call.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kusari::chain::builder::ChainBuilder;
//! use kusari::chain::triplet::Triplet;
//! use kusari::analysis::unicode_word::UnicodeWordAnalyzer;
//!
//! let builder = ChainBuilder::new(Arc::new(UnicodeWordAnalyzer::new())).unwrap();
//! let freqs = builder.frequencies("hello world.");
//!
//! assert_eq!(freqs[&Triplet::begin("hello", "world")], 1);
//! assert_eq!(freqs[&Triplet::end("world", ".")], 1);
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::MorphologicalAnalyzer;
use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::tokenizer::TokenizerAdapter;
use crate::chain::aggregate::ChainAggregator;
use crate::chain::extractor::TripletExtractor;
use crate::chain::triplet::FrequencyMap;
use crate::error::Result;

/// Builder that turns one corpus into its aggregated frequency map.
pub struct ChainBuilder {
    segmenter: SentenceSegmenter,
    tokenizer: TokenizerAdapter,
    extractor: TripletExtractor,
    aggregator: ChainAggregator,
}

impl ChainBuilder {
    /// Create a builder around the given morphological analyzer.
    pub fn new(analyzer: Arc<dyn MorphologicalAnalyzer>) -> Result<Self> {
        Ok(ChainBuilder {
            segmenter: SentenceSegmenter::new()?,
            tokenizer: TokenizerAdapter::new(analyzer),
            extractor: TripletExtractor::new(),
            aggregator: ChainAggregator::new(),
        })
    }

    /// Build the corpus-wide frequency map for one text.
    ///
    /// Sentences are processed strictly in sequence. Total over any input;
    /// an analyzer failure on a sentence degrades that sentence to zero
    /// triplets rather than failing the corpus.
    pub fn frequencies(&self, text: &str) -> FrequencyMap {
        let sentences = self.segmenter.divide(text);
        debug!(
            "divided corpus into {} sentences (analyzer: {})",
            sentences.len(),
            self.tokenizer.analyzer_name()
        );

        let maps = sentences
            .iter()
            .map(|sentence| self.extractor.extract(&self.tokenizer.tokenize(sentence)));
        let total = self.aggregator.aggregate(maps);

        debug!("aggregated {} distinct triplets", total.len());
        total
    }

    /// Parallel variant of [`frequencies`](Self::frequencies).
    ///
    /// Extraction is pure per sentence and aggregation is a commutative
    /// sum, so the result is identical to the sequential path regardless of
    /// completion order.
    pub fn par_frequencies(&self, text: &str) -> FrequencyMap {
        let sentences = self.segmenter.divide(text);
        debug!(
            "divided corpus into {} sentences for parallel extraction",
            sentences.len()
        );

        sentences
            .par_iter()
            .map(|sentence| self.extractor.extract(&self.tokenizer.tokenize(sentence)))
            .reduce(FrequencyMap::default, |mut total, contribution| {
                ChainAggregator::merge_into(&mut total, contribution);
                total
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morpheme::Morpheme;
    use crate::analysis::unicode_word::UnicodeWordAnalyzer;
    use crate::chain::triplet::Triplet;

    /// Stub standing in for a dictionary analyzer: canned morphemes per
    /// sentence, boundary nodes included.
    struct CannedAnalyzer;

    impl MorphologicalAnalyzer for CannedAnalyzer {
        fn parse(&self, sentence: &str) -> crate::error::Result<Vec<Morpheme>> {
            let surfaces: &[&str] = match sentence {
                "我輩は猫である" => &["我輩", "は", "猫", "で", "ある"],
                "我輩は犬である" => &["我輩", "は", "犬", "で", "ある"],
                _ => &[],
            };
            let mut morphemes = vec![Morpheme::boundary()];
            morphemes.extend(surfaces.iter().map(|s| Morpheme::new(*s, 1)));
            morphemes.push(Morpheme::boundary());
            Ok(morphemes)
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    #[test]
    fn test_frequencies_sums_across_sentences() {
        let builder = ChainBuilder::new(Arc::new(CannedAnalyzer)).unwrap();
        let freqs = builder.frequencies("我輩は猫である\n我輩は犬である");

        assert_eq!(freqs[&Triplet::begin("我輩", "は")], 2);
        assert_eq!(freqs[&Triplet::end("で", "ある")], 2);
        assert_eq!(freqs[&Triplet::interior("は", "猫", "で")], 1);
        assert_eq!(freqs[&Triplet::interior("は", "犬", "で")], 1);
    }

    #[test]
    fn test_frequencies_empty_corpus() {
        let builder = ChainBuilder::new(Arc::new(UnicodeWordAnalyzer::new())).unwrap();
        assert!(builder.frequencies("").is_empty());
    }

    #[test]
    fn test_par_frequencies_matches_sequential() {
        let builder = ChainBuilder::new(Arc::new(UnicodeWordAnalyzer::new())).unwrap();
        let text = "the quick fox. the slow fox. the quick fox jumps.";

        assert_eq!(builder.frequencies(text), builder.par_frequencies(text));
    }
}

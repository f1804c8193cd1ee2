//! Sentence segmentation for raw corpus text.
//!
//! Splits a long document into individual sentences while keeping each
//! terminating delimiter attached to its sentence. Three delimiter classes
//! terminate a sentence: the ideographic full stop `。`, its full-width
//! variant `．`, and the ASCII period `.`. Line breaks also separate
//! sentences, so a trailing fragment with no delimiter is still emitted.
//!
//! # Examples
//!
//! ```
//! use kusari::analysis::segmenter::SentenceSegmenter;
//!
//! let segmenter = SentenceSegmenter::new().unwrap();
//! let sentences = segmenter.divide("今日は晴れ。明日は雨");
//!
//! assert_eq!(sentences, vec!["今日は晴れ。", "明日は雨"]);
//! ```

use regex::Regex;

use crate::error::{KusariError, Result};

/// A segmenter that divides raw text into trimmed sentence strings.
///
/// The algorithm mirrors split-lines semantics: every delimiter occurrence
/// gets a line break inserted after it, then the text is split on line
/// breaks (`\n`, `\r\n`, or bare `\r`) and each piece is trimmed. Empty
/// pieces from consecutive delimiters are kept (they yield zero triplets
/// downstream); only the trailing empty piece after a final delimiter is
/// dropped.
pub struct SentenceSegmenter {
    delimiter: Regex,
    line_break: Regex,
}

impl SentenceSegmenter {
    /// Create a new sentence segmenter.
    pub fn new() -> Result<Self> {
        Ok(SentenceSegmenter {
            delimiter: Regex::new(r"[。．.]")
                .map_err(|e| KusariError::Anyhow(anyhow::Error::from(e)))?,
            line_break: Regex::new(r"\r\n|\r|\n")
                .map_err(|e| KusariError::Anyhow(anyhow::Error::from(e)))?,
        })
    }

    /// Divide text into an ordered sequence of trimmed sentences.
    ///
    /// Total over any input; an empty string yields an empty sequence.
    pub fn divide(&self, text: &str) -> Vec<String> {
        // Keep the delimiter as part of the preceding sentence by inserting a
        // line break after it instead of splitting on it.
        let marked = self.delimiter.replace_all(text, "${0}\n");

        let mut sentences: Vec<String> = self
            .line_break
            .split(&marked)
            .map(|piece| piece.trim().to_string())
            .collect();

        // Split-lines semantics: a terminator ends a sentence, it does not
        // open a new empty one.
        if sentences.last().is_some_and(|s| s.is_empty()) {
            sentences.pop();
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::new().unwrap()
    }

    #[test]
    fn test_divide_retains_delimiters() {
        let sentences = segmenter().divide("一文目。二文目．three.");
        assert_eq!(sentences, vec!["一文目。", "二文目．", "three."]);
    }

    #[test]
    fn test_divide_mixed_breaks_and_delimiters() {
        let text = "こんにちは。　今日は、楽しい運動会です。hello world.我輩は猫である\n  名前はまだない。我輩は犬である\r\n名前は決まってるよ";
        let sentences = segmenter().divide(text);
        assert_eq!(
            sentences,
            vec![
                "こんにちは。",
                "今日は、楽しい運動会です。",
                "hello world.",
                "我輩は猫である",
                "名前はまだない。",
                "我輩は犬である",
                "名前は決まってるよ",
            ]
        );
    }

    #[test]
    fn test_divide_trailing_fragment_without_delimiter() {
        let sentences = segmenter().divide("終わった。まだ続く");
        assert_eq!(sentences, vec!["終わった。", "まだ続く"]);
    }

    #[test]
    fn test_divide_consecutive_delimiters_keep_empty_sentences() {
        let sentences = segmenter().divide("あ。。い。");
        assert_eq!(sentences, vec!["あ。", "。", "い。"]);
    }

    #[test]
    fn test_divide_empty_input() {
        assert!(segmenter().divide("").is_empty());
        assert!(segmenter().divide("   ").is_empty());
    }

    #[test]
    fn test_divide_bare_carriage_return() {
        let sentences = segmenter().divide("一行目\r二行目");
        assert_eq!(sentences, vec!["一行目", "二行目"]);
    }

    #[test]
    fn test_divide_trims_surrounding_whitespace() {
        let sentences = segmenter().divide("  padded.  \n\tindented\n");
        assert_eq!(sentences, vec!["padded.", "", "indented"]);
    }
}

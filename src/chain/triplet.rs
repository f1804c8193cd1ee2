//! Triplet types and the frequency map.
//!
//! A [`Triplet`] is the unit statistic of the chain: an ordered 3-tuple
//! whose elements are either real tokens or one of the two sentinels
//! marking sentence boundaries. Sentinels are typed ([`Gram::Begin`] /
//! [`Gram::End`]) rather than magic strings, so a real token whose text
//! happens to equal a sentinel literal can never alias a sentinel-bearing
//! key; the literals only reappear at the storage boundary, where they are
//! written verbatim as part of the table contract.
//!
//! # Examples
//!
//! ```
//! use kusari::chain::triplet::{Gram, Triplet, BEGIN};
//!
//! let opening = Triplet::begin("hello", "world");
//! assert_eq!(opening.first, Gram::Begin);
//! assert_eq!(opening.first.as_str(), BEGIN);
//! assert_eq!(opening.to_string(), "__BEGIN_SENTENCE__|hello|world");
//!
//! // Structural equality, not identity.
//! assert_eq!(opening, Triplet::begin("hello", "world"));
//! ```

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Sentinel literal marking the start of a sentence in stored rows.
pub const BEGIN: &str = "__BEGIN_SENTENCE__";

/// Sentinel literal marking the end of a sentence in stored rows.
pub const END: &str = "__END_SENTENCE__";

/// One element of a triplet: a real token or a boundary sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gram {
    /// Sentence-start sentinel; only valid in the first position.
    Begin,
    /// Sentence-end sentinel; only valid in the third position.
    End,
    /// A surface-form token.
    Token(String),
}

impl Gram {
    /// The text stored for this element: the token's surface form, or the
    /// sentinel literal.
    pub fn as_str(&self) -> &str {
        match self {
            Gram::Begin => BEGIN,
            Gram::End => END,
            Gram::Token(s) => s,
        }
    }
}

impl fmt::Display for Gram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered 3-tuple of grams, the unit statistic of the chain.
///
/// The constructors enforce sentinel placement: [`Triplet::begin`] puts
/// `Begin` first, [`Triplet::end`] puts `End` third, and
/// [`Triplet::interior`] holds tokens only. Sentinels never appear in the
/// middle position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    /// First element; a token or `Begin`.
    pub first: Gram,
    /// Second element; always a token.
    pub second: Gram,
    /// Third element; a token or `End`.
    pub third: Gram,
}

impl Triplet {
    /// Create an interior triplet of three real tokens.
    pub fn interior<A, B, C>(first: A, second: B, third: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Triplet {
            first: Gram::Token(first.into()),
            second: Gram::Token(second.into()),
            third: Gram::Token(third.into()),
        }
    }

    /// Create the sentence-opening triplet `(BEGIN, first, second)`.
    pub fn begin<A, B>(first: A, second: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Triplet {
            first: Gram::Begin,
            second: Gram::Token(first.into()),
            third: Gram::Token(second.into()),
        }
    }

    /// Create the sentence-closing triplet `(penultimate, last, END)`.
    pub fn end<A, B>(penultimate: A, last: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Triplet {
            first: Gram::Token(penultimate.into()),
            second: Gram::Token(last.into()),
            third: Gram::End,
        }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.first, self.second, self.third)
    }
}

/// Mapping from triplet to a strictly positive occurrence count.
///
/// A triplet is either absent or has count ≥ 1; nothing in the pipeline
/// ever stores a zero.
pub type FrequencyMap = AHashMap<Triplet, u64>;

/// Render a frequency map as `first|second|third<TAB>count` lines.
///
/// Line order follows map iteration order and is unspecified.
pub fn dump(freqs: &FrequencyMap) -> String {
    let mut out = String::new();
    for (triplet, freq) in freqs {
        out.push_str(&format!("{}\t{}\n", triplet, freq));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_literals() {
        assert_eq!(Gram::Begin.as_str(), "__BEGIN_SENTENCE__");
        assert_eq!(Gram::End.as_str(), "__END_SENTENCE__");
        assert_eq!(Gram::Token("猫".to_string()).as_str(), "猫");
    }

    #[test]
    fn test_structural_equality() {
        let a = Triplet::interior("a", "b", "c");
        let b = Triplet::interior("a", "b", "c");
        assert_eq!(a, b);

        let mut freqs = FrequencyMap::default();
        freqs.insert(a, 1);
        *freqs.entry(b).or_insert(0) += 1;
        assert_eq!(freqs.len(), 1);
    }

    #[test]
    fn test_sentinel_token_does_not_alias_sentinel() {
        // A token whose text equals the sentinel literal stays a distinct key.
        let token_triplet = Triplet::interior(BEGIN, "a", "b");
        let sentinel_triplet = Triplet::begin("a", "b");
        assert_ne!(token_triplet, sentinel_triplet);
    }

    #[test]
    fn test_display() {
        let triplet = Triplet::end("world", ".");
        assert_eq!(triplet.to_string(), "world|.|__END_SENTENCE__");
    }

    #[test]
    fn test_dump_format() {
        let mut freqs = FrequencyMap::default();
        freqs.insert(Triplet::interior("a", "b", "c"), 3);
        assert_eq!(dump(&freqs), "a|b|c\t3\n");
    }
}

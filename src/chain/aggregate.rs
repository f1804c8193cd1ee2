//! Corpus-wide aggregation of per-sentence frequency maps.
//!
//! Aggregation is an entry-wise sum: interior statistics add up across
//! sentences and within-sentence repeats, and sentinel entries add up
//! across sentences too. A `(BEGIN, x, y)` key recurring in five sentences
//! ends with count 5, measuring how many sentences open with that pair.
//! Summation is commutative, so sentence completion order never affects
//! the result.

use crate::chain::triplet::FrequencyMap;

/// Aggregator that folds per-sentence maps into one corpus-wide map.
#[derive(Clone, Debug, Default)]
pub struct ChainAggregator;

impl ChainAggregator {
    /// Create a new chain aggregator.
    pub fn new() -> Self {
        ChainAggregator
    }

    /// Sum a sequence of per-sentence maps into one corpus-wide map.
    pub fn aggregate<I>(&self, maps: I) -> FrequencyMap
    where
        I: IntoIterator<Item = FrequencyMap>,
    {
        let mut total = FrequencyMap::default();
        for map in maps {
            Self::merge_into(&mut total, map);
        }
        total
    }

    /// Add every entry of `contribution` into `total`.
    pub fn merge_into(total: &mut FrequencyMap, contribution: FrequencyMap) {
        for (triplet, count) in contribution {
            *total.entry(triplet).or_insert(0) += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::triplet::Triplet;

    #[test]
    fn test_aggregate_sums_sentinel_entries_across_sentences() {
        let mut first = FrequencyMap::default();
        first.insert(Triplet::begin("我輩", "は"), 1);
        first.insert(Triplet::interior("我輩", "は", "猫"), 1);

        let mut second = FrequencyMap::default();
        second.insert(Triplet::begin("我輩", "は"), 1);
        second.insert(Triplet::interior("我輩", "は", "犬"), 1);

        let total = ChainAggregator::new().aggregate(vec![first, second]);

        // Sum, not overwrite: two sentences open with the same pair.
        assert_eq!(total[&Triplet::begin("我輩", "は")], 2);
        assert_eq!(total[&Triplet::interior("我輩", "は", "猫")], 1);
        assert_eq!(total[&Triplet::interior("我輩", "は", "犬")], 1);
        assert_eq!(total.len(), 3);
    }

    #[test]
    fn test_aggregate_preserves_within_sentence_counts() {
        let mut only = FrequencyMap::default();
        only.insert(Triplet::interior("A", "A", "A"), 2);

        let total = ChainAggregator::new().aggregate(vec![only]);
        assert_eq!(total[&Triplet::interior("A", "A", "A")], 2);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut a = FrequencyMap::default();
        a.insert(Triplet::interior("x", "y", "z"), 3);
        let mut b = FrequencyMap::default();
        b.insert(Triplet::interior("x", "y", "z"), 4);
        b.insert(Triplet::end("y", "z"), 1);

        let aggregator = ChainAggregator::new();
        let forward = aggregator.aggregate(vec![a.clone(), b.clone()]);
        let backward = aggregator.aggregate(vec![b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let total = ChainAggregator::new().aggregate(Vec::new());
        assert!(total.is_empty());
    }
}

//! # Pair Statistics

use wordfuse::pretokenize::FrequencyTable;
use wordfuse::types::{CountType, SymbolPair, WFHashMap};

/// A map from [`SymbolPair`] to its aggregate occurrence count.
pub type PairCountMap<C> = WFHashMap<SymbolPair, C>;

/// Count every adjacent pair across a frequency table.
///
/// ``count[(a, b)] = sum(occurrences of (a, b) in span * table[span])``
///
/// Overlapping occurrences are all counted: ``(a, a, a)`` contributes
/// two ``(a, a)`` pairs.
///
/// # Arguments
/// * `table` - the current word decompositions and their frequencies.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(table)))]
pub fn count_pairs<C: CountType>(table: &FrequencyTable<C>) -> PairCountMap<C> {
    let mut pair_counts = PairCountMap::with_capacity(table.len());

    let zero = C::zero();
    for (span, &count) in table {
        if count == zero || span.len() < 2 {
            continue;
        }
        for (a, b) in span.pairs() {
            *pair_counts.entry((a.clone(), b.clone())).or_default() += count;
        }
    }

    pair_counts
}

/// The total number of adjacent pairs in a frequency table.
///
/// ``sum((len(span) - 1) * table[span])``; equal to the sum of [`count_pairs`].
pub fn total_pair_count<C: CountType>(table: &FrequencyTable<C>) -> C {
    let mut total = C::zero();
    for (span, &count) in table {
        if span.len() >= 2 {
            let windows = C::from_usize(span.len() - 1).unwrap_or_else(C::max_value);
            total += windows * count;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use wordfuse::pretokenize::{SymbolSpanBuf, pretokenize};

    use super::*;

    fn pair(
        a: &str,
        b: &str,
    ) -> SymbolPair {
        (a.into(), b.into())
    }

    #[test]
    fn test_count_pairs_u64() {
        check_count_pairs::<u64>();
    }

    #[test]
    fn test_count_pairs_u32() {
        check_count_pairs::<u32>();
    }

    fn check_count_pairs<C: CountType>() {
        let table: FrequencyTable<C> = pretokenize(["The cat is fast", "The car is red"]);
        let pair_counts = count_pairs(&table);

        let c = |n: u32| C::from_u32(n).unwrap();

        assert_eq!(pair_counts[&pair("T", "h")], c(2));
        assert_eq!(pair_counts[&pair("h", "e")], c(2));
        assert_eq!(pair_counts[&pair("e", "</w>")], c(2));
        assert_eq!(pair_counts[&pair("c", "a")], c(2));
        assert_eq!(pair_counts[&pair("i", "s")], c(2));
        assert_eq!(pair_counts[&pair("s", "</w>")], c(2));
        assert_eq!(pair_counts[&pair("a", "t")], c(1));
        assert_eq!(pair_counts[&pair("a", "r")], c(1));
        assert_eq!(pair_counts[&pair("a", "s")], c(1));
        assert!(!pair_counts.contains_key(&pair("h", "T")));

        let sum = pair_counts.values().fold(C::zero(), |acc, &v| acc + v);
        assert_eq!(sum, total_pair_count(&table));
        // The(3) cat(3) is(2) fast(4) The(3) car(3) is(2) red(3)
        assert_eq!(sum, c(23));
    }

    #[test]
    fn test_count_pairs_overlapping() {
        let mut table: FrequencyTable<u64> = FrequencyTable::default();
        table.insert(SymbolSpanBuf::from_symbols(["a", "a", "a"]), 2);

        let pair_counts = count_pairs(&table);
        assert_eq!(pair_counts.len(), 1);
        assert_eq!(pair_counts[&pair("a", "a")], 4);
    }

    #[test]
    fn test_count_pairs_empty() {
        let table: FrequencyTable<u64> = FrequencyTable::default();
        assert!(count_pairs(&table).is_empty());
        assert_eq!(total_pair_count(&table), 0);

        let mut table: FrequencyTable<u64> = FrequencyTable::default();
        table.insert(SymbolSpanBuf::from_symbols(["abc</w>"]), 5);
        table.insert(SymbolSpanBuf::from_symbols(["x", "y"]), 0);
        assert!(count_pairs(&table).is_empty());
    }
}

//! # Merge Applier

use wordfuse::pretokenize::FrequencyTable;
use wordfuse::types::{CountType, SymbolPair, fuse_pair};

/// Rewrite a frequency table, fusing every non-overlapping
/// left-to-right occurrence of `pair`.
///
/// Spans that collapse to the same rewritten span have their
/// frequencies summed. The input table is unchanged.
///
/// # Arguments
/// * `pair` - the pair to merge.
/// * `table` - the current word decompositions and their frequencies.
pub fn apply_merge<C: CountType>(
    pair: &SymbolPair,
    table: &FrequencyTable<C>,
) -> FrequencyTable<C> {
    let replacement = fuse_pair(pair);

    let mut merged: FrequencyTable<C> = FrequencyTable::with_capacity(table.len());
    for (span, &count) in table {
        let mut span = span.clone();
        span.merge_pair(pair, &replacement);
        *merged.entry(span).or_default() += count;
    }
    merged
}

/// As [`apply_merge`], but consumes the table to reuse its spans.
///
/// # Returns
/// The rewritten table, and the number of span occurrences rewritten
/// (each weighted by frequency).
#[cfg_attr(feature = "tracing", tracing::instrument(skip(table)))]
pub fn merge_table<C: CountType>(
    pair: &SymbolPair,
    table: FrequencyTable<C>,
) -> (FrequencyTable<C>, C) {
    let replacement = fuse_pair(pair);

    let mut rewritten = C::zero();
    let mut merged: FrequencyTable<C> = FrequencyTable::with_capacity(table.len());
    for (mut span, count) in table {
        let hits = span.merge_pair(pair, &replacement);
        if hits > 0 {
            rewritten += C::from_usize(hits).unwrap_or_else(C::max_value) * count;
        }
        *merged.entry(span).or_default() += count;
    }
    (merged, rewritten)
}

//! # Word Merger
//!
//! Applies a [`MergeRuleSet`] to one word's [`SymbolSpanBuf`]
//! until no rule applies.

use crate::encoders::MergeMode;
use crate::pretokenize::SymbolSpanBuf;
use crate::vocab::MergeRuleSet;

/// Merge a word to its fixed point.
///
/// ## Arguments
/// * `merges` - the learned rules.
/// * `mode` - how the rules are applied.
/// * `span` - the word, rewritten in place.
///
/// ## Returns
/// The total number of merges performed.
pub fn merge_word(
    merges: &MergeRuleSet,
    mode: MergeMode,
    span: &mut SymbolSpanBuf,
) -> usize {
    match mode {
        MergeMode::LeftToRight => merge_left_to_right(merges, span),
        MergeMode::RankOrdered => merge_rank_ordered(merges, span),
    }
}

/// Repeat full left-to-right passes until a pass performs zero merges.
pub fn merge_left_to_right(
    merges: &MergeRuleSet,
    span: &mut SymbolSpanBuf,
) -> usize {
    let mut total = 0;
    loop {
        let merged = span.merge_pass(|a, b| merges.lookup_merged(a, b).cloned());
        if merged == 0 {
            return total;
        }
        total += merged;
    }
}

/// Repeatedly merge the lowest-ranked adjacent pair; leftmost on rank ties.
pub fn merge_rank_ordered(
    merges: &MergeRuleSet,
    span: &mut SymbolSpanBuf,
) -> usize {
    let mut total = 0;
    while span.len() >= 2 {
        // Find the lowest ranked merge available.
        let Some((rank, idx)) = span
            .pairs()
            .enumerate()
            .filter_map(|(idx, (a, b))| merges.rank(a, b).map(|rank| (rank, idx)))
            .min()
        else {
            // No more merges possible
            break;
        };

        let merged = merges.rules()[rank].merged.clone();
        span.merge_at(idx, merged);
        total += 1;
    }
    total
}

//! # Merge Rule Trainer

use core::cmp::{Ordering, Reverse};

use wordfuse::pretokenize::{WordCounter, WordCounterOptions};
use wordfuse::types::{CountType, Symbol, SymbolPair, TokenType, WFHashSet};
use wordfuse::vocab::{MergeRuleSet, TrainedModel, Vocabulary};
use wordfuse::WFResult;

use crate::merge_applier::merge_table;
use crate::pair_stats::{PairCountMap, count_pairs};

/// The merge budget used when the caller does not pick one.
pub const DEFAULT_NUM_MERGES: usize = 20;

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The maximum number of merge rounds.
    pub num_merges: usize,

    /// Options for the corpus word counter.
    pub counter_options: WordCounterOptions,
}

impl Default for BpeTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_MERGES)
    }
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_merges` - The maximum number of merge rounds.
    pub fn new(num_merges: usize) -> Self {
        Self {
            num_merges,
            counter_options: WordCounterOptions::default(),
        }
    }

    /// Sets the merge budget.
    pub fn with_num_merges(
        self,
        num_merges: usize,
    ) -> Self {
        Self { num_merges, ..self }
    }

    /// Sets the corpus word counter options.
    pub fn with_counter_options(
        self,
        counter_options: WordCounterOptions,
    ) -> Self {
        Self {
            counter_options,
            ..self
        }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    pub fn init<C: CountType>(self) -> BpeTrainer<C> {
        BpeTrainer::new(self)
    }
}

/// A [`SymbolPair`] that could be merged, and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate<C: CountType> {
    /// The number of instances of this pair in the corpus.
    pub count: C,

    /// The pair to merge.
    pub pair: SymbolPair,
}

impl<C: CountType> MergeCandidate<C> {
    /// The selection key.
    ///
    /// Max by count; ties go to the lexicographically smallest pair.
    pub fn selection_key(&self) -> (C, Reverse<&SymbolPair>) {
        (self.count, Reverse(&self.pair))
    }
}

impl<C: CountType> PartialOrd for MergeCandidate<C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CountType> Ord for MergeCandidate<C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.selection_key().cmp(&other.selection_key())
    }
}

/// Select the pair to merge next: the maximum [`MergeCandidate`].
///
/// ## Returns
/// `None` when there are no pairs with a non-zero count.
pub fn select_best_pair<C: CountType>(pair_counts: &PairCountMap<C>) -> Option<MergeCandidate<C>> {
    let zero = C::zero();
    pair_counts
        .iter()
        .filter(|&(_, &count)| count > zero)
        .max_by(|&(pa, &ca), &(pb, &cb)| (ca, Reverse(pa)).cmp(&(cb, Reverse(pb))))
        .map(|(pair, &count)| MergeCandidate {
            count,
            pair: pair.clone(),
        })
}

/// Basic training results.
#[derive(Debug, Clone)]
pub struct TrainResults<T: TokenType> {
    /// The trained model.
    pub model: TrainedModel<T>,

    /// The number of merge rules learned.
    pub merges_done: usize,

    /// Did training stop before the budget because no pairs remained?
    pub exhausted: bool,
}

/// Trainer for learning merge rules.
///
/// # Parameters
/// * `C` - the type used to store word and pair counts.
#[derive(Debug, Clone)]
pub struct BpeTrainer<C: CountType = u64> {
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The corpus word counter.
    pub word_counter: WordCounter<C>,
}

impl<C: CountType> BpeTrainer<C> {
    /// Initializes a [`BpeTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    pub fn new(options: BpeTrainerOptions) -> Self {
        let word_counter = WordCounter::new(options.counter_options.clone());
        Self {
            options,
            word_counter,
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Run the merge loop over the counted corpus.
    ///
    /// ## Returns
    /// A `Result` containing the [`TrainResults<T>`], or an error if the
    /// vocabulary does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train_with_results<T: TokenType>(self) -> WFResult<TrainResults<T>> {
        let num_merges = self.options.num_merges;
        let mut table = self.word_counter.to_frequency_table();

        // Base symbols, sorted.
        let mut symbols: Vec<Symbol> = table
            .keys()
            .flat_map(|span| span.symbols().iter().cloned())
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        let mut known: WFHashSet<Symbol> = symbols.iter().cloned().collect();

        log::info!(
            "Starting merge training: {} words, {} base symbols, {} merges to compute",
            table.len(),
            symbols.len(),
            num_merges
        );

        let mut merges = MergeRuleSet::new();
        let mut exhausted = false;
        let mut last_log_percent = 0;

        while merges.len() < num_merges {
            let pair_counts = count_pairs(&table);

            let Some(best) = select_best_pair(&pair_counts) else {
                // No more pairs to merge
                exhausted = true;
                log::info!(
                    "No mergeable pairs remain after {} of {} merges",
                    merges.len(),
                    num_merges
                );
                break;
            };

            let (rewritten, fused) = merge_table(&best.pair, table);
            table = rewritten;

            if merges.rank(&best.pair.0, &best.pair.1).is_some() {
                // A later merge rebuilt an already-learned pair; fuse it again,
                // without a second rule.
                log::debug!("Re-applied merge {:?} (frequency: {})", best.pair, best.count);
                continue;
            }

            let merged = merges.try_push(best.pair)?.merged.clone();
            log::debug!(
                "Merge {}: {:?} (frequency: {}, fused: {})",
                merges.len(),
                merged,
                best.count,
                fused
            );

            // Fused text may coincide with an existing symbol; ids stay unique.
            if known.insert(merged.clone()) {
                symbols.push(merged.clone());
            }

            // Log progress every 10%
            let current_percent = (merges.len() * 100) / num_merges;
            if current_percent >= last_log_percent + 10 {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} (frequency: {})",
                    current_percent,
                    merges.len(),
                    num_merges,
                    merged,
                    best.count
                );
                last_log_percent = current_percent;
            }
        }

        let merges_done = merges.len();
        let vocab = Vocabulary::from_symbols(symbols)?;
        let model = TrainedModel::init(vocab, merges)?;

        log::info!(
            "Finished training: {} merges completed, vocabulary size {}",
            merges_done,
            model.len()
        );

        Ok(TrainResults {
            model,
            merges_done,
            exhausted,
        })
    }

    /// Trains a [`TrainedModel<T>`].
    ///
    /// ## Returns
    /// A `Result` containing the model, or an error if the vocabulary
    /// does not fit in `T`.
    pub fn train<T: TokenType>(self) -> WFResult<TrainedModel<T>> {
        Ok(self.train_with_results()?.model)
    }
}

/// Train a model from a corpus in one call.
///
/// ## Arguments
/// * `corpus` - The training texts.
/// * `num_merges` - The merge budget; see [`DEFAULT_NUM_MERGES`].
pub fn train_corpus<T, I>(
    corpus: I,
    num_merges: usize,
) -> WFResult<TrainedModel<T>>
where
    T: TokenType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trainer: BpeTrainer = BpeTrainerOptions::new(num_merges).init();
    trainer.update_from_samples(corpus);
    trainer.train()
}

//! # Merge Rule Training
//!
//! Learns a [`wordfuse::TrainedModel`] from a corpus.
//!
//! Each round:
//! 1. counts every adjacent symbol pair ([`pair_stats::count_pairs`]);
//! 2. picks the most frequent pair, ties going to the lexicographically
//!    smallest ``(left, right)`` ([`select_best_pair`]);
//! 3. fuses it everywhere in the corpus ([`merge_applier::apply_merge`]);
//! 4. records the rule and appends the fused symbol to the vocabulary.
//!
//! Training stops after `num_merges` rules, or earlier when no pairs remain.
//! The trainer has no parallelism.
//!
//! ## Training Example
//!
//! ```rust
//! use wordfuse::{SymbolEncoder, TextEncoder, TrainedModel};
//! use wordfuse_training::{BpeTrainer, BpeTrainerOptions};
//!
//! let mut trainer: BpeTrainer = BpeTrainerOptions::new(1).init();
//! trainer.update_from_samples(["ab ab ab"]);
//!
//! let model: TrainedModel<u32> = trainer.train().unwrap();
//! assert_eq!(model.vocab().symbols(), &["</w>", "a", "b", "ab"]);
//!
//! let encoder = SymbolEncoder::init(model);
//! assert_eq!(encoder.try_encode_ids("ab").unwrap(), vec![3, 0]);
//! ```
#![warn(missing_docs, unused)]

pub mod merge_applier;
pub mod pair_stats;

mod bpe_trainer;

#[doc(inline)]
pub use bpe_trainer::{
    BpeTrainer, BpeTrainerOptions, DEFAULT_NUM_MERGES, MergeCandidate, TrainResults,
    select_best_pair, train_corpus,
};

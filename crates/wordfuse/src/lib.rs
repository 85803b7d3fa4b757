//! # `wordfuse` Subword Merge Vocabularies
//!
//! Learns character-level BPE merge rules from a corpus, and encodes
//! new text into token ids with them.
//!
//! See:
//! * [`pretokenize`] to split text into words and initial symbol spans.
//! * [`vocab`] for the [`TrainedModel`] and its vocabulary and merge rules.
//! * [`encoders`] to encode text into token ids.
//!
//! Training lives in the `wordfuse-training` crate.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Encoding Example
//!
//! ```rust
//! use wordfuse::TrainedModel;
//! use wordfuse::vocab::{MergeRuleSet, Vocabulary};
//!
//! let vocab = Vocabulary::<u32>::from_symbols(["</w>", "a", "b", "ab"]).unwrap();
//! let merges = MergeRuleSet::from_pairs([("a".into(), "b".into())]).unwrap();
//! let model = TrainedModel::init(vocab, merges).unwrap();
//!
//! let encoded = model.encode("ab").unwrap();
//! assert_eq!(encoded.ids, vec![3, 0]);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod encoders;
pub mod errors;
pub mod pretokenize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{EncodedText, EncoderOptions, SymbolEncoder, TextEncoder};
#[doc(inline)]
pub use errors::{WFResult, WordfuseError};
#[doc(inline)]
pub use types::{Symbol, SymbolPair, TokenType};
#[doc(inline)]
pub use vocab::TrainedModel;

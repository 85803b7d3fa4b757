//! # Encoders
//!
//! Encoders turn text into token ids using a [`crate::vocab::TrainedModel`].
//!
//! The default encoder behavior is:
//! * each distinct word is encoded once, in order of first appearance;
//! * rules are applied by repeated left-to-right passes ([`MergeMode::LeftToRight`]);
//! * symbols with no id are dropped, logged, and reported in [`EncodedText::dropped`].
//!
//! Each of these is configurable through [`EncoderOptions`].
//!
//! ```rust
//! use wordfuse::encoders::{EncoderOptions, SymbolEncoder, TextEncoder, UnknownSymbolPolicy};
//! use wordfuse::vocab::{MergeRuleSet, TrainedModel, Vocabulary};
//!
//! let vocab = Vocabulary::<u32>::from_symbols(["</w>", "a", "b", "ab"]).unwrap();
//! let merges = MergeRuleSet::from_pairs([("a".into(), "b".into())]).unwrap();
//! let model = TrainedModel::init(vocab, merges).unwrap();
//!
//! let encoder = SymbolEncoder::new(
//!     model,
//!     EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Substitute(0)),
//! );
//! assert_eq!(encoder.try_encode_ids("ab").unwrap(), vec![3, 0]);
//! ```

mod encoded_text;
mod encoder_options;
mod symbol_encoder;
mod text_encoder;

pub mod word_merger;

#[doc(inline)]
pub use encoded_text::{DroppedSymbol, EncodedText};
#[doc(inline)]
pub use encoder_options::{EncoderOptions, MergeMode, UnknownSymbolPolicy, WordMode};
#[doc(inline)]
pub use symbol_encoder::{SymbolEncoder, encode_text};
#[doc(inline)]
pub use text_encoder::TextEncoder;

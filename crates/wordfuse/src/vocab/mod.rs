//! # Vocabulary
//!
//! This module provides the trained model and its parts.
//!
//! The primary user-oriented type is [`TrainedModel`], which contains:
//! * `vocab` - a [`Vocabulary`]; ordered symbols and their ``{ Symbol -> T }`` id index,
//! * `merges` - a [`MergeRuleSet`]; ``{ (Symbol, Symbol) -> Symbol }`` rules in learned order.
#[cfg(feature = "io")]
pub mod io;

pub mod merge_rules;
pub mod trained_model;
pub mod vocabulary;

#[doc(inline)]
pub use merge_rules::{MergeRule, MergeRuleSet};
#[doc(inline)]
pub use trained_model::{TrainedModel, try_validate_merge_rules};
#[doc(inline)]
pub use vocabulary::Vocabulary;

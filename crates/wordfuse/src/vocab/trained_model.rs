//! # Trained Model

use crate::encoders::{EncodedText, EncoderOptions, encode_text};
use crate::errors::{WFResult, WordfuseError};
use crate::types::TokenType;
use crate::vocab::merge_rules::MergeRuleSet;
use crate::vocab::vocabulary::Vocabulary;

/// Validate that a [`Vocabulary`] and [`MergeRuleSet`] are compatible.
///
/// - for every ``(a, b) -> ab`` rule:
///   - the parents ``a`` and ``b`` are in the vocabulary,
///   - the target ``ab`` is in the vocabulary.
///
/// ## Arguments
/// * `vocab` - The vocabulary to validate against.
/// * `merges` - The merge rules to validate.
///
/// ## Returns
/// A `Result` indicating whether the two are compatible.
pub fn try_validate_merge_rules<T: TokenType>(
    vocab: &Vocabulary<T>,
    merges: &MergeRuleSet,
) -> WFResult<()> {
    for rule in merges {
        let (a, b) = &rule.pair;
        for parent in [a, b] {
            if !vocab.contains(parent) {
                return Err(WordfuseError::VocabConflict(format!(
                    "merge {:?} -> {:?} parent {parent:?} is not in the vocabulary",
                    rule.pair, rule.merged
                )));
            }
        }
        if !vocab.contains(&rule.merged) {
            return Err(WordfuseError::VocabConflict(format!(
                "merge {:?} -> {:?} target is not in the vocabulary",
                rule.pair, rule.merged
            )));
        }
    }
    Ok(())
}

/// A trained vocabulary and its merge rules.
///
/// Immutable once built; share it between encoders with an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainedModel<T: TokenType = u32> {
    /// The ordered vocabulary, and its id index.
    vocab: Vocabulary<T>,

    /// The merge rules, in learned order.
    merges: MergeRuleSet,
}

impl<T: TokenType> TrainedModel<T> {
    /// Initialize a [`TrainedModel`].
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `merges` - The merge rules.
    ///
    /// ## Returns
    /// A `Result` containing the new `TrainedModel` or an error.
    pub fn init(
        vocab: Vocabulary<T>,
        merges: MergeRuleSet,
    ) -> WFResult<Self> {
        try_validate_merge_rules(&vocab, &merges)?;
        Ok(Self { vocab, merges })
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Vocabulary<T> {
        &self.vocab
    }

    /// The merge rules.
    pub fn merges(&self) -> &MergeRuleSet {
        &self.merges
    }

    /// The number of symbols in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    /// Looks up the id of a symbol.
    pub fn lookup_token(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.vocab.lookup_token(symbol)
    }

    /// Encode text with the default [`EncoderOptions`].
    ///
    /// See [`crate::encoders::SymbolEncoder`] for the configurable encoder.
    pub fn encode(
        &self,
        text: &str,
    ) -> WFResult<EncodedText<T>> {
        encode_text(self, &EncoderOptions::default(), text)
    }
}

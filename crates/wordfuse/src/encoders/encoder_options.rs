//! # Encoder Options

use crate::types::TokenType;

/// How learned merge rules are applied to a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Repeated full left-to-right passes until a pass merges nothing.
    ///
    /// Within a pass, the first mergeable pair found is merged;
    /// the order in which rules were learned is not consulted.
    #[default]
    LeftToRight,

    /// Repeatedly merge the adjacent pair with the lowest learned rank.
    ///
    /// This is the canonical BPE encode; on the same model it may produce
    /// different symbols than [`MergeMode::LeftToRight`].
    RankOrdered,
}

/// What to do with a final symbol that has no id in the vocabulary.
///
/// This happens for characters never seen in training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy<T: TokenType> {
    /// Omit the symbol from the ids; log a warning and record the drop.
    ///
    /// The id sequence is then shorter than the symbol sequence.
    #[default]
    Skip,

    /// Fail the encode with [`crate::errors::WordfuseError::UnknownSymbol`].
    Fail,

    /// Emit the given id in place of the symbol, and record the substitution.
    Substitute(T),
}

/// Which words of the input text are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordMode {
    /// Each distinct word once, in order of first appearance.
    #[default]
    Distinct,

    /// Every word occurrence, in input order.
    EveryOccurrence,
}

/// Options for [`crate::encoders::SymbolEncoder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderOptions<T: TokenType> {
    /// How merge rules are applied.
    pub merge_mode: MergeMode,

    /// How unknown symbols are handled.
    pub unknown_policy: UnknownSymbolPolicy<T>,

    /// Which words are encoded.
    pub word_mode: WordMode,
}

impl<T: TokenType> EncoderOptions<T> {
    /// Sets the merge mode.
    pub fn with_merge_mode(
        self,
        merge_mode: MergeMode,
    ) -> Self {
        Self { merge_mode, ..self }
    }

    /// Sets the unknown symbol policy.
    pub fn with_unknown_policy(
        self,
        unknown_policy: UnknownSymbolPolicy<T>,
    ) -> Self {
        Self {
            unknown_policy,
            ..self
        }
    }

    /// Sets the word mode.
    pub fn with_word_mode(
        self,
        word_mode: WordMode,
    ) -> Self {
        Self { word_mode, ..self }
    }
}

//! # Encode Results

use crate::types::{Symbol, TokenType};

/// A final symbol that had no id in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedSymbol<T: TokenType> {
    /// Index of the encoded word the symbol belongs to.
    pub word_index: usize,

    /// Position of the symbol within the merged word.
    pub position: usize,

    /// The symbol.
    pub symbol: Symbol,

    /// The id emitted in its place, if one was substituted.
    pub substitute: Option<T>,
}

/// The result of encoding a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText<T: TokenType> {
    /// Token ids; word order, then in-word order.
    pub ids: Vec<T>,

    /// Symbols with no vocabulary id, in encounter order.
    ///
    /// Non-empty means `ids` is not aligned one-to-one with the merged symbols.
    pub dropped: Vec<DroppedSymbol<T>>,
}

impl<T: TokenType> Default for EncodedText<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            dropped: Vec::new(),
        }
    }
}

impl<T: TokenType> EncodedText<T> {
    /// Create an empty result with room for `capacity` ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            dropped: Vec::new(),
        }
    }

    /// Did every merged symbol map to its own id?
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }

    /// The number of symbols omitted from `ids`.
    pub fn omitted_count(&self) -> usize {
        self.dropped
            .iter()
            .filter(|d| d.substitute.is_none())
            .count()
    }

    /// Consume the result, returning the ids.
    pub fn into_ids(self) -> Vec<T> {
        self.ids
    }
}

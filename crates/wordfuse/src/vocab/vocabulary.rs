//! # Ordered Symbol Vocabulary

use crate::errors::{WFResult, WordfuseError};
use crate::types::{Symbol, TokenType, WFHashMap};

/// An ordered vocabulary of unique symbols, with its `{ Symbol -> T }` index.
///
/// The id of a symbol is its position in the vocabulary:
/// base symbols first, then merged symbols in the order they were learned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<T: TokenType> {
    /// Symbols in id order.
    symbols: Vec<Symbol>,

    /// Map of ``{ Symbol -> T }``.
    index: WFHashMap<Symbol, T>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            index: WFHashMap::default(),
        }
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a [`Vocabulary`] and its index by enumerating `symbols` in order.
    ///
    /// ## Arguments
    /// * `symbols` - the symbols, in id order.
    ///
    /// ## Returns
    /// A `Result` containing the vocabulary, or an error if a symbol repeats
    /// or the vocabulary does not fit in `T`.
    pub fn from_symbols<I, S>(symbols: I) -> WFResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();

        let mut index: WFHashMap<Symbol, T> = WFHashMap::with_capacity(symbols.len());
        for (idx, symbol) in symbols.iter().enumerate() {
            let token = T::from_usize(idx).ok_or(WordfuseError::VocabSizeOverflow {
                size: symbols.len(),
            })?;
            if index.insert(symbol.clone(), token).is_some() {
                return Err(WordfuseError::VocabConflict(format!(
                    "symbol {symbol:?} appears more than once in the vocabulary"
                )));
            }
        }

        Ok(Self { symbols, index })
    }

    /// The number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in id order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The ``{ Symbol -> T }`` index.
    pub fn index(&self) -> &WFHashMap<Symbol, T> {
        &self.index
    }

    /// Looks up the id of a symbol.
    pub fn lookup_token(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.index.get(symbol).copied()
    }

    /// Does the vocabulary contain `symbol`?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.index.contains_key(symbol)
    }

    /// Looks up the symbol for an id.
    pub fn lookup_symbol(
        &self,
        token: T,
    ) -> Option<&Symbol> {
        self.symbols.get(token.to_usize()?)
    }
}

//! # Error Types

/// Errors from wordfuse operations.
#[derive(Debug, thiserror::Error)]
pub enum WordfuseError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// A symbol produced while encoding has no id in the vocabulary.
    #[error("unknown symbol {symbol:?} in word {word:?}")]
    UnknownSymbol {
        /// The symbol with no id.
        symbol: String,

        /// The word the symbol came from.
        word: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (json, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordfuse operations.
pub type WFResult<T> = core::result::Result<T, WordfuseError>;

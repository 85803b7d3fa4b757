//! # Text Encoder Trait

use crate::encoders::EncodedText;
use crate::errors::WFResult;
use crate::types::TokenType;

/// A trait for text encoders.
pub trait TextEncoder<T: TokenType>: Send + Sync {
    /// Encode text into tokens, returning an error if the encoding fails.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the ids and any dropped symbols.
    fn try_encode(
        &self,
        text: &str,
    ) -> WFResult<EncodedText<T>>;

    /// Encode text into token ids only.
    ///
    /// Dropped symbols are still reported through the log.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `Result` containing the vector of ids or an error.
    fn try_encode_ids(
        &self,
        text: &str,
    ) -> WFResult<Vec<T>> {
        Ok(self.try_encode(text)?.into_ids())
    }

    /// Encode a batch of text, returning an error if any encoding fails.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `Result` containing one result per input.
    fn try_encode_batch(
        &self,
        batch: &[String],
    ) -> WFResult<Vec<EncodedText<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}

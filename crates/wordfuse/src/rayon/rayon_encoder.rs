//! # Parallel Encoder

use crate::encoders::{EncodedText, TextEncoder};
use crate::errors::WFResult;
use crate::types::TokenType;

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; single texts use the inner encoder.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TextEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: std::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TextEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The text encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, E> TextEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TextEncoder<T>,
{
    fn try_encode(
        &self,
        text: &str,
    ) -> WFResult<EncodedText<T>> {
        self.inner.try_encode(text)
    }

    fn try_encode_batch(
        &self,
        batch: &[String],
    ) -> WFResult<Vec<EncodedText<T>>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.try_encode(text)).collect()
    }
}

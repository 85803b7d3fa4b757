//! # Pre-Tokenization
//!
//! Splits raw text into space-delimited words, and each word into
//! its initial [`SymbolSpanBuf`]: one symbol per `char`, then [`END_OF_WORD`].
//!
//! ```rust
//! use wordfuse::pretokenize::{SymbolSpanBuf, pretokenize};
//!
//! let table = pretokenize::<_, u32>(["cat cat", "dog"]);
//! assert_eq!(table[&SymbolSpanBuf::from_word("cat")], 2);
//! assert_eq!(table[&SymbolSpanBuf::from_word("dog")], 1);
//! ```

mod symbol_span;
mod word_counter;
mod word_splitter;

#[doc(inline)]
pub use symbol_span::SymbolSpanBuf;
#[doc(inline)]
pub use word_counter::{WordCounter, WordCounterOptions};
#[doc(inline)]
pub use word_splitter::{END_OF_WORD, WORD_DELIMITER, split_words};

use crate::types::{CountType, WFHashMap};

/// `{ SymbolSpanBuf -> C }` word decomposition frequency table.
///
/// ## Style Hints
/// Instance names should prefer `table`, or `word_table`.
pub type FrequencyTable<C> = WFHashMap<SymbolSpanBuf, C>;

/// Pre-tokenize a corpus into a [`FrequencyTable`].
///
/// An empty corpus yields an empty table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(corpus)))]
pub fn pretokenize<I, C>(corpus: I) -> FrequencyTable<C>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    C: CountType,
{
    let mut counter: WordCounter<C> = WordCounter::default();
    counter.update_from_samples(corpus);
    counter.to_frequency_table()
}

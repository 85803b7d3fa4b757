//! # Word Counter

use crate::pretokenize::symbol_span::SymbolSpanBuf;
use crate::pretokenize::word_splitter::split_words;
use crate::pretokenize::FrequencyTable;
use crate::types::{CountType, Symbol, WFHashMap};

/// Options for [`WordCounter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounterOptions {
    /// Initial capacity of the word table.
    pub capacity: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

impl WordCounterOptions {
    /// Set the initial capacity of the word table.
    pub fn with_capacity(
        self,
        capacity: usize,
    ) -> Self {
        Self { capacity }
    }
}

/// Accumulates word occurrence counts over a corpus.
///
/// Feed it text with [`WordCounter::update_from_samples`],
/// then convert it with [`WordCounter::to_frequency_table`].
#[derive(Debug, Clone)]
pub struct WordCounter<C: CountType> {
    /// The config options.
    pub options: WordCounterOptions,

    /// The word counts.
    pub word_counts: WFHashMap<Symbol, C>,
}

impl<C: CountType> Default for WordCounter<C> {
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let word_counts = WFHashMap::with_capacity(options.capacity);
        Self {
            options,
            word_counts,
        }
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WFHashMap<Symbol, C> {
        self.word_counts
    }

    /// The number of distinct words seen.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Has no word been seen?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        for word in split_words(text.as_ref()) {
            *word_counts.entry(Symbol::from(word)).or_default() += C::one();
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Convert the word counts to a [`FrequencyTable`].
    ///
    /// Each word becomes its initial character + end-of-word decomposition.
    pub fn to_frequency_table(&self) -> FrequencyTable<C> {
        self.word_counts
            .iter()
            .map(|(word, &count)| (SymbolSpanBuf::from_word(word), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc: WordCounter<u64> = WordCounter::default();
        assert!(wc.is_empty());

        wc.update_from_samples(["Hello world", "Foo  world bar world "]);
        assert_eq!(wc.len(), 4);

        let mut counts: Vec<(Symbol, u64)> = wc.release().into_iter().collect();
        counts.sort();
        assert_eq!(
            counts,
            vec![
                ("Foo".into(), 1),
                ("Hello".into(), 1),
                ("bar".into(), 1),
                ("world".into(), 3),
            ]
        );
    }

    #[test]
    fn test_to_frequency_table() {
        let mut wc: WordCounter<u32> =
            WordCounter::new(WordCounterOptions::default().with_capacity(8));
        wc.update_from_text("cat cat dog cat");

        let table = wc.to_frequency_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&SymbolSpanBuf::from_word("cat")], 3);
        assert_eq!(table[&SymbolSpanBuf::from_word("dog")], 1);
    }
}

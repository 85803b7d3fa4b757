//! # Symbol Span Buffer

use crate::pretokenize::word_splitter::END_OF_WORD;
use crate::types::{Symbol, SymbolPair};

/// A mutable span of symbols (the current decomposition of one word).
///
/// Iteratively rewritten during training, and during encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolSpanBuf {
    symbols: Vec<Symbol>,
}

impl<S: Into<Symbol>> FromIterator<S> for SymbolSpanBuf {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

impl SymbolSpanBuf {
    /// Create a new span buffer from symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Create the initial decomposition of a word.
    ///
    /// One symbol per `char`, followed by [`END_OF_WORD`].
    ///
    /// # Arguments
    /// * `word` - a single word; assumed to contain no spaces.
    pub fn from_word<S: AsRef<str>>(word: S) -> Self {
        let word = word.as_ref();
        let mut symbols: Vec<Symbol> = Vec::with_capacity(word.len() + 1);
        let mut buf = [0u8; 4];
        for c in word.chars() {
            symbols.push(Symbol::new(c.encode_utf8(&mut buf)));
        }
        symbols.push(Symbol::const_new(END_OF_WORD));
        Self { symbols }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consume the span, returning the symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over adjacent ``(left, right)`` windows of this span.
    pub fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a Symbol, &'a Symbol)> + 'a {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Run one left-to-right merge pass.
    ///
    /// At each position, `lookup(current, next)` is consulted;
    /// a `Some(target)` replaces both symbols with `target` and the scan
    /// skips past them, otherwise the current symbol is kept.
    ///
    /// # Arguments
    /// * `lookup` - maps an adjacent pair to its merged symbol, if any.
    ///
    /// # Returns
    /// The number of merges performed.
    pub fn merge_pass<F>(
        &mut self,
        mut lookup: F,
    ) -> usize
    where
        F: FnMut(&Symbol, &Symbol) -> Option<Symbol>,
    {
        let n = self.symbols.len();
        if n < 2 {
            return 0;
        }

        let mut merges = 0;
        let mut new_symbols: Vec<Symbol> = Vec::with_capacity(n);
        let mut iter = core::mem::take(&mut self.symbols).into_iter().peekable();

        while let Some(current) = iter.next() {
            let target = match iter.peek() {
                Some(next) => lookup(&current, next),
                None => None,
            };

            match target {
                Some(target) => {
                    // Skip 'next'.
                    iter.next();
                    new_symbols.push(target);
                    merges += 1;
                }
                None => new_symbols.push(current),
            }
        }

        self.symbols = new_symbols;
        merges
    }

    /// Merge all non-overlapping left-to-right occurrences of `pair -> replacement`.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the symbol to replace `pair` with.
    ///
    /// # Returns
    /// The number of occurrences replaced.
    pub fn merge_pair(
        &mut self,
        pair: &SymbolPair,
        replacement: &Symbol,
    ) -> usize {
        let (a, b) = pair;
        self.merge_pass(|x, y| (x == a && y == b).then(|| replacement.clone()))
    }

    /// Replace the symbols at `idx` and `idx + 1` with `replacement`.
    ///
    /// # Panics
    /// Panics if `idx + 1` is out of bounds.
    pub fn merge_at(
        &mut self,
        idx: usize,
        replacement: Symbol,
    ) {
        self.symbols[idx] = replacement;
        self.symbols.remove(idx + 1);
    }
}

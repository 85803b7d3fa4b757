//! # Word Splitter

/// The end-of-word marker appended to every word.
pub const END_OF_WORD: &str = "</w>";

/// The word delimiter.
pub const WORD_DELIMITER: char = ' ';

/// Split text into words on [`WORD_DELIMITER`].
///
/// Empty words (from leading, trailing, or repeated delimiters) are dropped.
/// Other whitespace (tabs, newlines) is part of the word.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(WORD_DELIMITER).filter(|w| !w.is_empty())
}

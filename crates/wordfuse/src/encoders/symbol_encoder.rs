//! # Symbol Encoder for [`TrainedModel`].

use std::sync::Arc;

use crate::encoders::word_merger::merge_word;
use crate::encoders::{
    DroppedSymbol, EncodedText, EncoderOptions, TextEncoder, UnknownSymbolPolicy, WordMode,
};
use crate::errors::{WFResult, WordfuseError};
use crate::pretokenize::{SymbolSpanBuf, split_words};
use crate::types::{TokenType, WFHashSet};
use crate::vocab::TrainedModel;

/// Collect the words of `text` that will be encoded.
fn select_words(
    text: &str,
    word_mode: WordMode,
) -> Vec<&str> {
    match word_mode {
        WordMode::EveryOccurrence => split_words(text).collect(),
        WordMode::Distinct => {
            let mut seen: WFHashSet<&str> = WFHashSet::default();
            split_words(text).filter(|w| seen.insert(*w)).collect()
        }
    }
}

/// Encode `text` against a trained model.
///
/// 1. pre-tokenize the text into words (see [`WordMode`]);
/// 2. merge each word to its fixed point (see [`crate::encoders::MergeMode`]);
/// 3. map each final symbol to its id (see [`UnknownSymbolPolicy`]).
///
/// ## Arguments
/// * `model` - The trained model.
/// * `options` - The encoder options.
/// * `text` - The text to encode.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(model, options, text)))]
pub fn encode_text<T: TokenType>(
    model: &TrainedModel<T>,
    options: &EncoderOptions<T>,
    text: &str,
) -> WFResult<EncodedText<T>> {
    let mut encoded = EncodedText::with_capacity(text.len());

    for (word_index, word) in select_words(text, options.word_mode)
        .into_iter()
        .enumerate()
    {
        let mut span = SymbolSpanBuf::from_word(word);
        merge_word(model.merges(), options.merge_mode, &mut span);

        for (position, symbol) in span.into_symbols().into_iter().enumerate() {
            if let Some(token) = model.lookup_token(&symbol) {
                encoded.ids.push(token);
                continue;
            }

            let substitute = match options.unknown_policy {
                UnknownSymbolPolicy::Fail => {
                    return Err(WordfuseError::UnknownSymbol {
                        symbol: symbol.to_string(),
                        word: word.to_string(),
                    });
                }
                UnknownSymbolPolicy::Skip => {
                    log::warn!("unknown symbol {symbol:?} in word {word:?}: dropped");
                    None
                }
                UnknownSymbolPolicy::Substitute(token) => {
                    log::warn!("unknown symbol {symbol:?} in word {word:?}: substituted {token}");
                    encoded.ids.push(token);
                    Some(token)
                }
            };

            encoded.dropped.push(DroppedSymbol {
                word_index,
                position,
                symbol,
                substitute,
            });
        }
    }

    Ok(encoded)
}

/// A [`TextEncoder`] over a shared [`TrainedModel`].
#[derive(Debug, Clone)]
pub struct SymbolEncoder<T: TokenType = u32> {
    /// The trained model.
    model: Arc<TrainedModel<T>>,

    /// The encoder options.
    options: EncoderOptions<T>,
}

impl<T: TokenType> SymbolEncoder<T> {
    /// Construct an encoder with default options.
    ///
    /// ## Arguments
    /// * `model` - The trained model.
    pub fn init<M>(model: M) -> Self
    where
        M: Into<Arc<TrainedModel<T>>>,
    {
        Self::new(model, EncoderOptions::default())
    }

    /// Construct an encoder.
    ///
    /// ## Arguments
    /// * `model` - The trained model.
    /// * `options` - The encoder options.
    pub fn new<M>(
        model: M,
        options: EncoderOptions<T>,
    ) -> Self
    where
        M: Into<Arc<TrainedModel<T>>>,
    {
        Self {
            model: model.into(),
            options,
        }
    }

    /// The trained model.
    pub fn model(&self) -> &Arc<TrainedModel<T>> {
        &self.model
    }

    /// The encoder options.
    pub fn options(&self) -> &EncoderOptions<T> {
        &self.options
    }

    /// Merge one word to its fixed point, using this encoder's merge mode.
    ///
    /// ## Returns
    /// The number of merges performed; zero if `span` was already fully merged.
    pub fn merge_word(
        &self,
        span: &mut SymbolSpanBuf,
    ) -> usize {
        merge_word(self.model.merges(), self.options.merge_mode, span)
    }
}

impl<T: TokenType> TextEncoder<T> for SymbolEncoder<T> {
    fn try_encode(
        &self,
        text: &str,
    ) -> WFResult<EncodedText<T>> {
        encode_text(&self.model, &self.options, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::MergeMode;
    use crate::types::{check_is_send, check_is_sync};
    use crate::vocab::{MergeRuleSet, Vocabulary};

    /// The model from training `["ab ab ab"]` with one merge.
    fn ab_model() -> Arc<TrainedModel<u32>> {
        let vocab = Vocabulary::from_symbols(["</w>", "a", "b", "ab"]).unwrap();
        let merges = MergeRuleSet::from_pairs([("a".into(), "b".into())]).unwrap();
        Arc::new(TrainedModel::init(vocab, merges).unwrap())
    }

    #[test]
    fn test_encode_known_word() {
        let encoder = SymbolEncoder::init(ab_model());
        check_is_send(&encoder);
        check_is_sync(&encoder);

        let encoded = encoder.try_encode("ab").unwrap();
        assert_eq!(encoded.ids, vec![3, 0]);
        assert!(encoded.is_lossless());

        assert_eq!(encoder.try_encode_ids("ba").unwrap(), vec![2, 1, 0]);
        assert_eq!(encoder.try_encode_ids("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_word_modes() {
        let model = ab_model();

        let encoder = SymbolEncoder::init(model.clone());
        assert_eq!(
            encoder.try_encode_ids("ab a ab").unwrap(),
            vec![3, 0, 1, 0]
        );

        let encoder = SymbolEncoder::new(
            model,
            EncoderOptions::default().with_word_mode(WordMode::EveryOccurrence),
        );
        assert_eq!(
            encoder.try_encode_ids("ab a ab").unwrap(),
            vec![3, 0, 1, 0, 3, 0]
        );
    }

    #[test]
    fn test_unknown_skip() {
        let encoder = SymbolEncoder::init(ab_model());

        let encoded = encoder.try_encode("a1b").unwrap();
        assert_eq!(encoded.ids, vec![1, 2, 0]);
        assert_eq!(
            encoded.dropped,
            vec![DroppedSymbol {
                word_index: 0,
                position: 1,
                symbol: "1".into(),
                substitute: None,
            }]
        );
        assert_eq!(encoded.omitted_count(), 1);
    }

    #[test]
    fn test_unknown_fail() {
        let encoder = SymbolEncoder::new(
            ab_model(),
            EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Fail),
        );

        let err = encoder.try_encode("ab zab").unwrap_err();
        match err {
            WordfuseError::UnknownSymbol { symbol, word } => {
                assert_eq!(symbol, "z");
                assert_eq!(word, "zab");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_substitute() {
        let encoder = SymbolEncoder::new(
            ab_model(),
            EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Substitute(99)),
        );

        let encoded = encoder.try_encode("a1").unwrap();
        assert_eq!(encoded.ids, vec![1, 99, 0]);
        assert_eq!(encoded.dropped.len(), 1);
        assert_eq!(encoded.dropped[0].substitute, Some(99));
        assert_eq!(encoded.omitted_count(), 0);
    }

    #[test]
    fn test_merge_word_idempotent() {
        let encoder = SymbolEncoder::new(
            ab_model(),
            EncoderOptions::default().with_merge_mode(MergeMode::RankOrdered),
        );

        let mut span = SymbolSpanBuf::from_word("abab");
        assert_eq!(encoder.merge_word(&mut span), 2);
        assert_eq!(encoder.merge_word(&mut span), 0);
        assert_eq!(span, SymbolSpanBuf::from_symbols(["ab", "ab", "</w>"]));
    }

    #[test]
    fn test_batch() {
        let encoder = SymbolEncoder::init(ab_model());
        let batch = vec!["ab".to_string(), "b a".to_string()];

        let encoded = encoder.try_encode_batch(&batch).unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded[0].ids, vec![3, 0]);
        assert_eq!(encoded[1].ids, vec![2, 0, 1, 0]);
    }
}

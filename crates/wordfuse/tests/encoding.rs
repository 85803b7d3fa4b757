#![allow(missing_docs)]

use std::sync::Arc;

use wordfuse::encoders::{
    EncoderOptions, MergeMode, SymbolEncoder, TextEncoder, UnknownSymbolPolicy, WordMode,
};
use wordfuse::vocab::{MergeRuleSet, TrainedModel, Vocabulary};
use wordfuse::{SymbolPair, WordfuseError};

/// A model where left-to-right and rank-ordered encodes disagree.
///
/// ``(l, o)`` was learned before ``(h, e)``, and ``(e, l)`` after both.
fn hello_model() -> Arc<TrainedModel<u32>> {
    let base = ["</w>", "e", "h", "l", "o"];
    let pairs: Vec<SymbolPair> = [
        ("l", "o"),
        ("h", "e"),
        ("e", "l"),
        ("lo", "</w>"),
        ("he", "l"),
        ("hel", "lo</w>"),
    ]
    .into_iter()
    .map(|(a, b)| (a.into(), b.into()))
    .collect();

    let merges = MergeRuleSet::from_pairs(pairs).unwrap();
    let vocab = Vocabulary::from_symbols(
        base.into_iter()
            .map(Into::into)
            .chain(merges.iter().map(|r| r.merged.clone())),
    )
    .unwrap();

    Arc::new(TrainedModel::init(vocab, merges).unwrap())
}

fn symbols_of(
    model: &TrainedModel<u32>,
    ids: &[u32],
) -> Vec<String> {
    ids.iter()
        .map(|&id| model.vocab().lookup_symbol(id).unwrap().to_string())
        .collect()
}

#[test]
fn left_to_right_passes() {
    let model = hello_model();
    let encoder = SymbolEncoder::init(model.clone());

    // pass 1: [h e] l [l o] </w>  -> he l lo </w>
    // pass 2: [he l] [lo </w>]    -> hel lo</w>
    // pass 3: [hel lo</w>]        -> hello</w>
    let ids = encoder.try_encode_ids("hello").unwrap();
    assert_eq!(symbols_of(&model, &ids), vec!["hello</w>"]);

    // pass 1: [h e] [l o] </w> ... "helo" -> he lo </w>
    // pass 2: he [lo </w>]          -> he lo</w>
    let ids = encoder.try_encode_ids("helo").unwrap();
    assert_eq!(symbols_of(&model, &ids), vec!["he", "lo</w>"]);
}

#[test]
fn rank_ordered_differs_from_left_to_right() {
    let model = hello_model();

    let left_to_right = SymbolEncoder::init(model.clone());
    let rank_ordered = SymbolEncoder::new(
        model.clone(),
        EncoderOptions::default().with_merge_mode(MergeMode::RankOrdered),
    );

    // "elo": the scan takes (e, l) first; rank order prefers (l, o).
    let ids = left_to_right.try_encode_ids("elo").unwrap();
    assert_eq!(symbols_of(&model, &ids), vec!["el", "o", "</w>"]);

    let ids = rank_ordered.try_encode_ids("elo").unwrap();
    assert_eq!(symbols_of(&model, &ids), vec!["e", "lo</w>"]);
}

#[test]
fn unknown_symbol_policies() {
    let model = hello_model();
    let text = "hex hello";

    let skip = SymbolEncoder::init(model.clone());
    let encoded = skip.try_encode(text).unwrap();
    assert_eq!(symbols_of(&model, &encoded.ids), vec!["he", "</w>", "hello</w>"]);
    assert_eq!(encoded.dropped.len(), 1);
    assert_eq!(encoded.dropped[0].symbol, "x");
    assert_eq!(encoded.dropped[0].word_index, 0);
    assert_eq!(encoded.dropped[0].position, 1);

    let substitute = SymbolEncoder::new(
        model.clone(),
        EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Substitute(u32::MAX)),
    );
    let encoded = substitute.try_encode(text).unwrap();
    assert_eq!(encoded.ids.len(), 4);
    assert_eq!(encoded.ids[1], u32::MAX);

    let fail = SymbolEncoder::new(
        model,
        EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Fail),
    );
    assert!(matches!(
        fail.try_encode(text),
        Err(WordfuseError::UnknownSymbol { .. })
    ));
}

#[test]
fn word_modes() {
    let model = hello_model();

    let distinct = SymbolEncoder::init(model.clone());
    let every = SymbolEncoder::new(
        model.clone(),
        EncoderOptions::default().with_word_mode(WordMode::EveryOccurrence),
    );

    let text = "hello  helo hello";
    assert_eq!(distinct.try_encode_ids(text).unwrap().len(), 3);
    assert_eq!(every.try_encode_ids(text).unwrap().len(), 4);
}

#[test]
fn empty_inputs() {
    let model = hello_model();
    let encoder = SymbolEncoder::init(model);

    assert!(encoder.try_encode_ids("").unwrap().is_empty());
    assert!(encoder.try_encode_ids("    ").unwrap().is_empty());

    let untrained: TrainedModel<u32> = TrainedModel::default();
    let encoded = untrained.encode("ab").unwrap();
    assert!(encoded.ids.is_empty());
    assert_eq!(encoded.omitted_count(), 3);
}

#[cfg(feature = "io")]
#[test]
fn json_round_trip_preserves_encoding() {
    use wordfuse::vocab::io::{read_model_json, write_model_json};

    let model = hello_model();
    let mut buf: Vec<u8> = Vec::new();
    write_model_json(model.as_ref(), &mut buf).unwrap();

    let loaded: TrainedModel<u32> = read_model_json(buf.as_slice()).unwrap();
    assert_eq!(&loaded, model.as_ref());

    let text = "hello helo elo";
    assert_eq!(
        SymbolEncoder::init(loaded).try_encode(text).unwrap(),
        SymbolEncoder::init(model).try_encode(text).unwrap()
    );
}

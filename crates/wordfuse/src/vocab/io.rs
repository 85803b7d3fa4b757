//! # JSON Model IO
//!
//! A trained model is dumped as:
//!
//! ```json
//! {"vocab": ["</w>", "a", "b", "ab"], "merges": [["a", "b"]]}
//! ```
//!
//! `vocab` is in id order; `merges` is in learned order.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::errors::{WFResult, WordfuseError};
use crate::types::{Symbol, SymbolPair, TokenType};
use crate::vocab::{MergeRuleSet, TrainedModel, Vocabulary};

#[derive(Debug, Serialize, Deserialize)]
struct ModelDump {
    vocab: Vec<Symbol>,
    merges: Vec<SymbolPair>,
}

/// Write a [`TrainedModel`] as JSON.
///
/// ## Arguments
/// * `model` - The model to save.
/// * `writer` - The writer to write to.
pub fn write_model_json<T, W>(
    model: &TrainedModel<T>,
    writer: &mut W,
) -> WFResult<()>
where
    T: TokenType,
    W: Write,
{
    let dump = ModelDump {
        vocab: model.vocab().symbols().to_vec(),
        merges: model.merges().iter().map(|r| r.pair.clone()).collect(),
    };
    serde_json::to_writer(&mut *writer, &dump).map_err(|e| WordfuseError::Parse(e.to_string()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`TrainedModel`] as JSON to a file.
///
/// ## Arguments
/// * `model` - The model to save.
/// * `path` - The path to the file.
pub fn save_model_json_path<T, P>(
    model: &TrainedModel<T>,
    path: P,
) -> WFResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_model_json(model, &mut writer)
}

/// Read and validate a [`TrainedModel`] from JSON.
///
/// ## Arguments
/// * `reader` - The reader to read from.
pub fn read_model_json<T, R>(reader: R) -> WFResult<TrainedModel<T>>
where
    T: TokenType,
    R: Read,
{
    let dump: ModelDump =
        serde_json::from_reader(reader).map_err(|e| WordfuseError::Parse(e.to_string()))?;

    let vocab = Vocabulary::from_symbols(dump.vocab)?;
    let merges = MergeRuleSet::from_pairs(dump.merges)?;
    TrainedModel::init(vocab, merges)
}

/// Load and validate a [`TrainedModel`] from a JSON file.
///
/// ## Arguments
/// * `path` - The path to the file.
pub fn load_model_json_path<T, P>(path: P) -> WFResult<TrainedModel<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_model_json(BufReader::new(File::open(path)?))
}

use std::io::{BufRead, Write};

use wordfuse::{
    SymbolEncoder,
    TextEncoder,
    TrainedModel,
    encoders::{EncoderOptions, MergeMode, UnknownSymbolPolicy, WordMode},
    vocab::io::load_model_json_path,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Handling of symbols the model has no id for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnknownMode {
    /// Drop the symbol, with a warning.
    #[default]
    Skip,

    /// Stop with an error.
    Fail,

    /// Emit `--unknown-id` in place of the symbol.
    Substitute,
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Path to a JSON model written by `train`.
    #[arg(long)]
    pub model: String,

    /// Apply merges in learned order, rather than by left-to-right passes.
    #[arg(long)]
    pub rank_ordered: bool,

    /// Encode every word occurrence, rather than each distinct word once.
    #[arg(long)]
    pub every_occurrence: bool,

    /// Handling of symbols the model has no id for.
    #[arg(long, value_enum, default_value_t = UnknownMode::Skip)]
    pub unknown: UnknownMode,

    /// Substitute id for `--unknown substitute`.
    #[arg(long, required_if_eq("unknown", "substitute"))]
    pub unknown_id: Option<u32>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl EncodeArgs {
    /// Build the encoder options from the flags.
    pub fn encoder_options(&self) -> Result<EncoderOptions<u32>, Box<dyn std::error::Error>> {
        let unknown_policy = match (self.unknown, self.unknown_id) {
            (UnknownMode::Skip, _) => UnknownSymbolPolicy::Skip,
            (UnknownMode::Fail, _) => UnknownSymbolPolicy::Fail,
            (UnknownMode::Substitute, Some(id)) => UnknownSymbolPolicy::Substitute(id),
            (UnknownMode::Substitute, None) => {
                return Err("--unknown substitute requires --unknown-id".into());
            }
        };

        Ok(EncoderOptions::default()
            .with_merge_mode(if self.rank_ordered {
                MergeMode::RankOrdered
            } else {
                MergeMode::LeftToRight
            })
            .with_word_mode(if self.every_occurrence {
                WordMode::EveryOccurrence
            } else {
                WordMode::Distinct
            })
            .with_unknown_policy(unknown_policy))
    }

    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.encoder_options()?;

        log::info!("model: {}", self.model);
        let model: TrainedModel<u32> = load_model_json_path(&self.model)?;
        log::info!(
            "Vocabulary Size: {}; merges: {}",
            model.len(),
            model.merges().len()
        );

        let encoder = SymbolEncoder::new(model, options);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_encode_lines(&mut reader, &mut writer, &encoder)
    }
}

/// Encode each input line; write its ids space-separated on one output line.
fn run_encode_lines(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &impl TextEncoder<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = encoder.try_encode_ids(&line?)?;

        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wordfuse::vocab::{MergeRuleSet, Vocabulary};

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        encode: EncodeArgs,
    }

    fn parse(args: &[&str]) -> Result<EncodeArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("encode").chain(args.iter().copied()))
            .map(|cli| cli.encode)
    }

    fn ab_encoder(options: EncoderOptions<u32>) -> SymbolEncoder<u32> {
        let vocab = Vocabulary::from_symbols(["</w>", "a", "b", "ab"]).unwrap();
        let merges = MergeRuleSet::from_pairs([("a".into(), "b".into())]).unwrap();
        SymbolEncoder::new(TrainedModel::init(vocab, merges).unwrap(), options)
    }

    #[test]
    fn test_encoder_options() {
        let args = parse(&["--model", "m.json"]).unwrap();
        assert_eq!(args.encoder_options().unwrap(), EncoderOptions::default());

        let args = parse(&[
            "--model",
            "m.json",
            "--rank-ordered",
            "--every-occurrence",
            "--unknown",
            "substitute",
            "--unknown-id",
            "7",
        ])
        .unwrap();
        assert_eq!(
            args.encoder_options().unwrap(),
            EncoderOptions::default()
                .with_merge_mode(MergeMode::RankOrdered)
                .with_word_mode(WordMode::EveryOccurrence)
                .with_unknown_policy(UnknownSymbolPolicy::Substitute(7))
        );

        assert!(parse(&["--model", "m.json", "--unknown", "substitute"]).is_err());
    }

    #[test]
    fn test_run_encode_lines() {
        let encoder = ab_encoder(EncoderOptions::default());

        let mut reader: &[u8] = b"ab ab\nba\n\nab z\n";
        let mut out: Vec<u8> = Vec::new();
        run_encode_lines(&mut reader, &mut out, &encoder).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "3 0\n2 1 0\n\n3 0 0\n");
    }

    #[test]
    fn test_run_encode_lines_fails_on_unknown() {
        let encoder =
            ab_encoder(EncoderOptions::default().with_unknown_policy(UnknownSymbolPolicy::Fail));

        let mut reader: &[u8] = b"ab\nz\n";
        let mut out: Vec<u8> = Vec::new();
        assert!(run_encode_lines(&mut reader, &mut out, &encoder).is_err());
    }
}

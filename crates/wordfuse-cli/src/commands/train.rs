use std::io::{BufRead, BufReader};

use wordfuse::vocab::io::write_model_json;
use wordfuse_training::{BpeTrainer, BpeTrainerOptions, DEFAULT_NUM_MERGES};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; each line is one sample.
    #[arg(required = true)]
    pub files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of merge rounds.
    #[arg(long, default_value_t = DEFAULT_NUM_MERGES)]
    pub num_merges: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer: BpeTrainer = BpeTrainerOptions::new(self.num_merges).init();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text_file(&mut trainer, path)?;
        }
        log::info!("Distinct words: {}", trainer.word_counter.len());

        log::info!("Training...");
        let results = trainer.train_with_results::<u32>()?;
        log::info!(
            "Vocabulary Size: {}; merges: {}{}",
            results.model.len(),
            results.merges_done,
            if results.exhausted { " (exhausted)" } else { "" }
        );

        if let Some(path) = self.output.path() {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_model_json(&results.model, &mut writer)?;

        Ok(())
    }
}

/// Feed every line of a text file to the trainer.
fn read_text_file(
    trainer: &mut BpeTrainer,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    for line in reader.lines() {
        trainer.update_from_samples([line?]);
    }
    Ok(())
}

pub mod encode;
pub mod train;

/// Subcommands for wordfuse
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train merge rules from text files.
    Train(train::TrainArgs),

    /// Encode text to token ids, one output line per input line.
    Encode(encode::EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}

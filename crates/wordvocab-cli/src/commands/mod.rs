use crate::commands::{build::BuildArgs, decode::DecodeArgs, encode::EncodeArgs};

pub mod build;
pub mod decode;
pub mod encode;

/// Subcommands for wordvocab-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from corpus files.
    Build(BuildArgs),

    /// Encode text lines into id lines.
    Encode(EncodeArgs),

    /// Decode id lines into text.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}

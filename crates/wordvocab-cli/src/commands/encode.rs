use std::io::{BufRead, Write};

use wordvocab::vocab::{WordVocab, io::load_token_list_path};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Vocabulary token list file.
    #[arg(long)]
    vocab: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab: WordVocab<u32> = load_token_list_path("vocab", &self.vocab)?;
        log::info!("loaded vocabulary: {} tokens", vocab.size());

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let ids = vocab.encode(&line?);

            for (idx, id) in ids.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}

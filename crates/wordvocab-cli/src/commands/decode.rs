use std::io::{BufRead, Write};

use wordvocab::{
    WVResult, WordVocabError,
    vocab::{WordVocab, io::load_token_list_path},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
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

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab: WordVocab<u32> = load_token_list_path("vocab", &self.vocab)?;
        log::info!("loaded vocabulary: {} tokens", vocab.size());

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let ids = parse_id_line(&line?)?;

            let text = vocab.decode(&ids)?;
            writeln!(writer, "{text}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Parse one line of whitespace-separated token ids.
fn parse_id_line(line: &str) -> WVResult<Vec<u32>> {
    line.split_whitespace()
        .map(|raw| {
            raw.parse()
                .map_err(|err| WordVocabError::Parse(format!("bad token id {raw:?}: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_line() {
        assert_eq!(parse_id_line("1 5 2").unwrap(), vec![1, 5, 2]);
        assert_eq!(parse_id_line("  3\t4 ").unwrap(), vec![3, 4]);
        assert_eq!(parse_id_line("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_id_line_rejects_non_ids() {
        let err = parse_id_line("1 five 2").unwrap_err();
        assert!(matches!(err, WordVocabError::Parse(_)));

        let err = parse_id_line("-3").unwrap_err();
        assert!(matches!(err, WordVocabError::Parse(_)));
    }
}

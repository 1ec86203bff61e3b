use std::io::{BufRead, BufReader, Write};

use wordvocab::{
    TokenType, WVResult,
    vocab::{IngestOptions, WordVocab, io::write_token_list},
};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input corpus files.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Vocabulary label.
    #[arg(long, default_value = "corpus")]
    name: String,

    /// Minimum occurrence count for a token to receive an id.
    #[arg(long, default_value = "2")]
    min_count: u64,

    /// Bump the newline-marker count once per corpus line.
    #[arg(long)]
    newline_as_eol: bool,

    /// Optional size cap; keeps the top entries by count.
    #[arg(long)]
    limit: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildArgs {
    /// Run the build command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        if let Some(limit) = self.limit
            && limit < 5
        {
            return Err(format!("--limit must be >= 5 (the special tokens): {limit}").into());
        }

        let mut vocab: WordVocab<u32> = WordVocab::new(&self.name, self.min_count);
        let options = IngestOptions::default().with_count_newline_as_eol(self.newline_as_eol);

        log::info!("Reading corpus files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            let reader = BufReader::new(std::fs::File::open(path)?);
            ingest_reader(&mut vocab, reader, &options)?;
        }

        if let Some(limit) = self.limit {
            vocab.limit(limit);
        }

        if let Some(path) = self.output.path() {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_token_list(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Feed a line source into the vocabulary without buffering it.
///
/// Lines are pulled one at a time; corpora can be larger than memory.
/// A read error ends the pass, and is reported after the lines already
/// pulled have been counted.
fn ingest_reader<T, R>(
    vocab: &mut WordVocab<T>,
    reader: R,
    options: &IngestOptions,
) -> WVResult<()>
where
    T: TokenType,
    R: BufRead,
{
    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(err) => {
            read_error = Some(err);
            None
        }
    });
    vocab.ingest(lines, options)?;

    match read_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        io::{self, Read},
    };

    use wordvocab::WordVocabError;

    use super::*;

    /// Yields its chunks one `read` call at a time, then either EOF
    /// or a read error.
    struct ChunkedCorpus {
        chunks: VecDeque<&'static [u8]>,
        fail_at_end: bool,
    }

    impl Read for ChunkedCorpus {
        fn read(
            &mut self,
            buf: &mut [u8],
        ) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(chunk);
                    Ok(chunk.len())
                }
                None if self.fail_at_end => Err(io::Error::other("corpus read failed")),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn test_ingest_reader_pulls_lines() {
        let mut vocab: WordVocab<u32> = WordVocab::new("build", 1);

        let reader = BufReader::new(ChunkedCorpus {
            chunks: [b"hello world\n".as_slice(), b"hello again\n".as_slice()].into(),
            fail_at_end: false,
        });
        ingest_reader(&mut vocab, reader, &IngestOptions::default()).unwrap();

        assert!(vocab.token_id("hello").is_some());
        assert!(vocab.token_id("world").is_some());
        assert!(vocab.token_id("again").is_some());
    }

    #[test]
    fn test_ingest_reader_surfaces_read_errors() {
        let mut vocab: WordVocab<u32> = WordVocab::new("build", 1);

        let reader = BufReader::new(ChunkedCorpus {
            chunks: [b"hello world\n".as_slice()].into(),
            fail_at_end: true,
        });
        let err = ingest_reader(&mut vocab, reader, &IngestOptions::default()).unwrap_err();

        assert!(matches!(err, WordVocabError::Io(_)));
        // The lines read before the failure still count.
        assert!(vocab.token_id("hello").is_some());
    }
}

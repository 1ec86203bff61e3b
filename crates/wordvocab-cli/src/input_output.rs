//! # Stream Selection
//!
//! Arg groups for commands that read one line stream and write another.
//! A missing path (or the conventional `"-"`) selects stdin/stdout.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// Input source for a filter-style command.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; "-" or omitted reads stdin.
    #[arg(long)]
    input: Option<String>,
}

impl InputArgs {
    /// Open a buffered reader over the input.
    pub fn open_reader(&self) -> std::io::Result<Box<dyn BufRead>> {
        Ok(match file_path(&self.input) {
            None => Box::new(std::io::stdin().lock()),
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output sink for a filter-style command.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; "-" or omitted writes stdout.
    #[arg(long)]
    output: Option<String>,
}

impl OutputArgs {
    /// The output path, when it names a real file.
    pub fn path(&self) -> Option<&str> {
        file_path(&self.output)
    }

    /// Open a buffered writer over the output.
    pub fn open_writer(&self) -> std::io::Result<Box<dyn Write>> {
        Ok(match self.path() {
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

fn file_path(arg: &Option<String>) -> Option<&str> {
    match arg.as_deref() {
        None | Some("-") => None,
        Some(path) => Some(path),
    }
}

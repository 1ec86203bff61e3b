//! # Token List IO
//!
//! Persists a vocabulary as a plain-text token list: one token per line,
//! in id order. Reading reconstructs the `token -> id` / `id -> token`
//! maps by line position.
//!
//! Counts are not persisted; a reloaded vocabulary is encode/decode-only
//! and cannot be meaningfully re-ingested or limited.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WVResult, WordVocabError},
    types::TokenType,
    vocab::{WordVocab, specials::SPECIAL_TOKENS},
};

/// Write a [`WordVocab`] as a token list, one token per line in id order.
///
/// ## Arguments
/// * `vocab` - The vocabulary to write.
/// * `writer` - The output sink.
pub fn write_token_list<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> WVResult<()>
where
    T: TokenType,
    W: Write,
{
    for index in 0..vocab.size() {
        let token = vocab.token_for_index(index).ok_or_else(|| {
            WordVocabError::VocabConflict(format!("no token at id {index}"))
        })?;
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

/// Write a [`WordVocab`] token list to a file.
///
/// ## Arguments
/// * `vocab` - The vocabulary to write.
/// * `path` - The path to write to.
pub fn save_token_list_path<T, P>(
    vocab: &WordVocab<T>,
    path: P,
) -> WVResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_token_list(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Rebuild a [`WordVocab`] from a token list.
///
/// Every line holds one token; the line position is the token's id. The
/// five special tokens must occupy lines 0-4, which is where
/// [`WordVocab::ingest`] and [`WordVocab::limit`] always leave them.
///
/// ## Arguments
/// * `name` - The label for the reconstructed vocabulary.
/// * `reader` - The line source.
///
/// ## Returns
/// A `Result` with the reconstructed vocabulary, or a
/// [`WordVocabError::VocabConflict`] for misplaced specials, duplicate
/// tokens, or a truncated list.
pub fn read_token_list<T, R>(
    name: &str,
    reader: R,
) -> WVResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = WordVocab::new(name, 1);

    let mut lines_read = 0;
    for (index, line) in reader.lines().enumerate() {
        let token = line?;
        lines_read += 1;

        if index < SPECIAL_TOKENS.len() {
            let (expected, _) = SPECIAL_TOKENS[index];
            if token != expected {
                return Err(WordVocabError::VocabConflict(format!(
                    "expected special token {expected:?} at line {index}, found {token:?}"
                )));
            }
            // Already seeded by WordVocab::new.
            continue;
        }

        vocab.push_token(token)?;
    }

    if lines_read < SPECIAL_TOKENS.len() {
        return Err(WordVocabError::VocabConflict(format!(
            "token list has {lines_read} lines; the {} special tokens are required",
            SPECIAL_TOKENS.len(),
        )));
    }

    Ok(vocab)
}

/// Rebuild a [`WordVocab`] from a token list file.
///
/// ## Arguments
/// * `name` - The label for the reconstructed vocabulary.
/// * `path` - The path to the token list file.
pub fn load_token_list_path<T, P>(
    name: &str,
    path: P,
) -> WVResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_token_list(name, reader)
}

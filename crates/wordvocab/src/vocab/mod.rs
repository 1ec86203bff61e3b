//! # Vocabulary
//!
//! This module provides the word vocabulary and related io mechanisms.
//!
//! [`WordVocab`] owns the token/id mapping and frequency counts. Its
//! lifecycle is: construct empty (specials pre-seeded), populate with one
//! [`WordVocab::ingest`] pass over a line source, optionally shrink once
//! with [`WordVocab::limit`], then use read-only for
//! [`WordVocab::encode`] / [`WordVocab::decode`].
//!
//! [`io`] persists a vocabulary as a newline-delimited token list.

pub mod io;
pub mod specials;
pub mod word_vocab;

#[doc(inline)]
pub use word_vocab::{IngestOptions, IngestReport, WordVocab};

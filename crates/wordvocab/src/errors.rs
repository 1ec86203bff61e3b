//! # Error Types

/// Errors from wordvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum WordVocabError {
    /// An id with no `id -> token` entry was passed to decode.
    #[error("id {id} has no vocabulary entry (vocab size: {size})")]
    UnknownTokenId {
        /// The offending id.
        id: u64,

        /// The vocabulary size at the time of the lookup.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (integer id lists, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordvocab operations.
pub type WVResult<T> = core::result::Result<T, WordVocabError>;

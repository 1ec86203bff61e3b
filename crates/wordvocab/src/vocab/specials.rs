//! # Special Tokens
//!
//! The five reserved vocabulary entries. Every [`crate::vocab::WordVocab`]
//! pre-seeds these in fixed order, so they always occupy ids 0-4.
//!
//! None of them can collide with a corpus token: normalization lowercases
//! all input, and these spellings are uppercase. The `<EOL>` marker is the
//! one special the normalizer itself emits, as the stand-in for literal
//! newlines inside a line.

/// The padding token.
pub const PAD: &str = "<PAD>";

/// The start-of-sentence token.
pub const SOS: &str = "<S>";

/// The end-of-sentence token.
pub const EOS: &str = "</S>";

/// The unknown-word token.
pub const UNK: &str = "<UNK>";

/// The newline marker token.
pub const EOL: &str = "<EOL>";

/// The reserved id of [`PAD`].
pub const PAD_ID: usize = 0;

/// The reserved id of [`SOS`].
pub const SOS_ID: usize = 1;

/// The reserved id of [`EOS`].
pub const EOS_ID: usize = 2;

/// The reserved id of [`UNK`].
pub const UNK_ID: usize = 3;

/// The reserved id of [`EOL`].
pub const EOL_ID: usize = 4;

/// The special tokens, in reserved-id order.
pub const SPECIAL_TOKENS: &[(&str, usize)] = &[
    (PAD, PAD_ID),
    (SOS, SOS_ID),
    (EOS, EOS_ID),
    (UNK, UNK_ID),
    (EOL, EOL_ID),
];

//! # `wordvocab` Word-Level Vocabulary Library
//!
//! `wordvocab` builds and applies a word-level vocabulary over
//! natural-language text:
//!
//! * [`normalizer`] turns raw text lines into ordered token sequences
//!   (HTML unescaping, accent stripping, lowercasing, punctuation
//!   isolation, newline markers).
//! * [`vocab`] owns the token/id mapping: frequency-gated id assignment
//!   during ingestion, an optional one-time top-k shrink, and
//!   encode/decode between token sequences and id sequences.
//!
//! A vocabulary is built in a single streaming pass over a line source,
//! optionally limited once, and is read-only from then on.
//!
//! ```rust
//! use wordvocab::vocab::WordVocab;
//!
//! let corpus = ["hello, world!", "hello there", "HELLO again"];
//!
//! let mut vocab: WordVocab<u32> = WordVocab::new("demo", 2);
//! vocab.ingest(corpus, &Default::default()).unwrap();
//!
//! let ids = vocab.encode("hello world");
//! assert_eq!(ids[0], vocab.token_id("hello").unwrap());
//! assert_eq!(ids[1], vocab.unk_id());
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is
//! a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WVHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod errors;
pub mod normalizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WVResult, WordVocabError};
#[doc(inline)]
pub use normalizer::{Normalizer, NormalizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::WordVocab;

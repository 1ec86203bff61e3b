//! # Word Vocabulary

use crate::errors::{WVResult, WordVocabError};
use crate::normalizer::Normalizer;
use crate::types::{TokenType, WVHashMap, hash_map_new, hash_map_with_capacity};
use crate::vocab::specials::{self, SPECIAL_TOKENS};

/// Occurrence statistics for one observed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordStat {
    /// Raw occurrence count across the ingested corpus.
    count: u64,

    /// First-observation sequence number.
    ///
    /// This is the deterministic tie-break for [`WordVocab::limit`]:
    /// tokens with equal counts rank in first-seen order.
    first_seen: usize,
}

/// Options for [`WordVocab::ingest`].
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Bump the `<EOL>` count once per processed line, whether or not the
    /// line contained a literal newline.
    ///
    /// This lets the `<EOL>` slot's rank reflect line volume even when the
    /// corpus arrives pre-split into single lines.
    pub count_newline_as_eol: bool,
}

impl IngestOptions {
    /// Sets whether each line bumps the `<EOL>` count.
    ///
    /// ## Arguments
    /// * `count_newline_as_eol` - Whether to bump per line.
    ///
    /// ## Returns
    /// The updated `IngestOptions` instance.
    pub fn with_count_newline_as_eol(
        self,
        count_newline_as_eol: bool,
    ) -> Self {
        Self {
            count_newline_as_eol,
        }
    }
}

/// Advisory summary of an [`WordVocab::ingest`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// The number of lines processed.
    pub lines: usize,

    /// The vocabulary size after the pass.
    pub vocab_size: usize,
}

/// Word-level vocabulary: token/id maps, frequency counts, special tokens.
///
/// Ids are always the contiguous range `0..size`, with the five special
/// tokens pre-seeded at ids 0-4. A token earns a permanent id the moment
/// its running count reaches `min_count` during ingestion; tokens that
/// never reach the threshold stay in the count table without an id.
///
/// The lifecycle is one [`Self::ingest`] pass, at most one [`Self::limit`],
/// then read-only [`Self::encode`] / [`Self::decode`] use. Nothing enforces
/// the single pass at runtime, but ids assigned across multiple passes are
/// only meaningful if no `limit` ran in between.
#[derive(Debug, Clone)]
pub struct WordVocab<T: TokenType> {
    name: String,
    min_count: u64,
    normalizer: Normalizer,

    word2id: WVHashMap<String, T>,
    id2word: WVHashMap<T, String>,
    word2count: WVHashMap<String, WordStat>,

    /// The next provisional id to assign.
    next_id: usize,

    /// The next first-seen sequence number.
    seen_counter: usize,
}

impl<T: TokenType> WordVocab<T> {
    /// Create a new, empty vocabulary.
    ///
    /// The five special tokens are pre-seeded at their reserved ids, so a
    /// fresh vocabulary already has size 5.
    ///
    /// ## Arguments
    /// * `name` - An identifying label, opaque to the logic.
    /// * `min_count` - The occurrence threshold for a permanent id.
    ///
    /// ## Returns
    /// A new `WordVocab` instance.
    pub fn new(
        name: impl Into<String>,
        min_count: u64,
    ) -> Self {
        let mut vocab = Self {
            name: name.into(),
            min_count,
            normalizer: Normalizer::default(),
            word2id: hash_map_new(),
            id2word: hash_map_new(),
            word2count: hash_map_new(),
            next_id: 0,
            seen_counter: 0,
        };

        for &(token, _) in SPECIAL_TOKENS {
            vocab
                .assign_next_id(token.to_string())
                .expect("reserved ids fit any token type");
        }

        vocab
    }

    /// Replace the normalizer used for ingestion and encoding.
    ///
    /// ## Arguments
    /// * `normalizer` - The normalizer to use.
    ///
    /// ## Returns
    /// The updated `WordVocab` instance.
    pub fn with_normalizer(
        self,
        normalizer: Normalizer,
    ) -> Self {
        Self { normalizer, ..self }
    }

    /// The vocabulary's identifying label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The occurrence threshold for a permanent id.
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// The normalizer applied to every ingested and encoded line.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The number of distinct ids in use.
    ///
    /// Ids are always exactly `0..size()`.
    pub fn size(&self) -> usize {
        self.word2id.len()
    }

    /// Look up the id of a token.
    pub fn token_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.word2id.get(token).copied()
    }

    /// Look up the token for an id.
    pub fn id_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id2word.get(&id).map(String::as_str)
    }

    /// Look up the token at a `usize` id position, if within range.
    pub fn token_for_index(
        &self,
        index: usize,
    ) -> Option<&str> {
        T::from_usize(index).and_then(|id| self.id_token(id))
    }

    /// The raw occurrence count of a token, if it has been observed.
    ///
    /// Counts survive [`Self::limit`] unmodified, so dropped tokens still
    /// report their pre-limit counts here.
    pub fn token_count(
        &self,
        token: &str,
    ) -> Option<u64> {
        self.word2count.get(token).map(|stat| stat.count)
    }

    /// The number of distinct observed tokens, including sub-threshold ones.
    pub fn observed_tokens(&self) -> usize {
        self.word2count.len()
    }

    /// The `<PAD>` id.
    pub fn pad_id(&self) -> T {
        reserved_id(specials::PAD_ID)
    }

    /// The `<S>` (start-of-sentence) id.
    pub fn bos_id(&self) -> T {
        reserved_id(specials::SOS_ID)
    }

    /// The `</S>` (end-of-sentence) id.
    pub fn eos_id(&self) -> T {
        reserved_id(specials::EOS_ID)
    }

    /// The `<UNK>` id.
    pub fn unk_id(&self) -> T {
        reserved_id(specials::UNK_ID)
    }

    /// The `<EOL>` (newline marker) id.
    pub fn eol_id(&self) -> T {
        reserved_id(specials::EOL_ID)
    }

    /// Ingest a line source, counting tokens and assigning ids.
    ///
    /// Equivalent to [`Self::ingest_with_filter`] with an identity filter.
    ///
    /// ## Arguments
    /// * `lines` - Any iterable source of text lines; consumed in a single
    ///   streaming pass.
    /// * `options` - The ingestion options.
    ///
    /// ## Returns
    /// A `Result` with the advisory [`IngestReport`], or a
    /// [`WordVocabError::VocabSizeOverflow`] if an id would not fit `T`.
    pub fn ingest<I>(
        &mut self,
        lines: I,
        options: &IngestOptions,
    ) -> WVResult<IngestReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ingest_with_filter(lines, |tokens| tokens, options)
    }

    /// Ingest a line source, with a token filter between normalization and
    /// counting.
    ///
    /// Per line: normalize, apply `filter`, then per token bump the count;
    /// the first time a token's count reaches `min_count`, assign it the
    /// next provisional id. Special tokens already hold ids and are never
    /// re-assigned.
    ///
    /// ## Arguments
    /// * `lines` - Any iterable source of text lines.
    /// * `filter` - Drops or transforms the normalized tokens of each line
    ///   before they are counted.
    /// * `options` - The ingestion options.
    ///
    /// ## Returns
    /// A `Result` with the advisory [`IngestReport`], or a
    /// [`WordVocabError::VocabSizeOverflow`] if an id would not fit `T`.
    pub fn ingest_with_filter<I, F>(
        &mut self,
        lines: I,
        mut filter: F,
        options: &IngestOptions,
    ) -> WVResult<IngestReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(Vec<String>) -> Vec<String>,
    {
        let mut lines_read = 0;

        for line in lines {
            lines_read += 1;

            for token in filter(self.normalizer.normalize(line.as_ref())) {
                let count = self.bump_count(&token);
                if count >= self.min_count && !self.word2id.contains_key(&token) {
                    self.assign_next_id(token)?;
                }
            }

            if options.count_newline_as_eol {
                self.bump_count(specials::EOL);
            }
        }

        let report = IngestReport {
            lines: lines_read,
            vocab_size: self.size(),
        };
        log::info!(
            "vocabulary {:?} built: {} tokens from {} lines",
            self.name,
            report.vocab_size,
            report.lines,
        );

        Ok(report)
    }

    /// Shrink the vocabulary to its top `max_size` tokens by count.
    ///
    /// A no-op (with an advisory log line) when `size() <= max_size`.
    ///
    /// Every entry of the count table is ranked by count descending, ties
    /// broken by first-seen order. Before ranking, the five specials are
    /// given adjusted counts above the maximum observed count (in reserved
    /// id order), so for any `max_size >= 5` they survive and keep ids 0-4.
    /// The adjustment happens on a scratch ranking; the stored count table
    /// is left untouched, so after limiting it still reports pre-limit
    /// counts, including counts for tokens that no longer hold an id.
    ///
    /// This operation is irreversible; there is no way to restore dropped
    /// tokens short of rebuilding the vocabulary.
    ///
    /// ## Arguments
    /// * `max_size` - The target vocabulary size.
    pub fn limit(
        &mut self,
        max_size: usize,
    ) {
        let size = self.size();
        if size <= max_size {
            log::info!(
                "vocabulary {:?} has {} tokens, no shrink needed for cap {}",
                self.name,
                size,
                max_size,
            );
            return;
        }

        let max_observed = self
            .word2count
            .values()
            .map(|stat| stat.count)
            .max()
            .unwrap_or(0);

        // (token, adjusted count, tie-break) ranking entries.
        let mut ranked: Vec<(&str, u64, usize)> =
            Vec::with_capacity(self.word2count.len() + SPECIAL_TOKENS.len());

        for &(token, id) in SPECIAL_TOKENS {
            let boost = (SPECIAL_TOKENS.len() - id) as u64;
            ranked.push((token, max_observed + boost, id));
        }
        for (token, stat) in &self.word2count {
            if SPECIAL_TOKENS.iter().any(|&(special, _)| special == token) {
                continue;
            }
            ranked.push((token.as_str(), stat.count, stat.first_seen));
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(max_size);

        let mut word2id = hash_map_with_capacity(ranked.len());
        let mut id2word = hash_map_with_capacity(ranked.len());
        for (index, &(token, _, _)) in ranked.iter().enumerate() {
            // New ids are a prefix of the pre-limit id range, so they fit T.
            let id = T::from_usize(index).expect("shrunken id fits token type");
            word2id.insert(token.to_string(), id);
            id2word.insert(id, token.to_string());
        }

        self.word2id = word2id;
        self.id2word = id2word;
        self.next_id = max_size;

        log::info!(
            "vocabulary {:?} limited: {} -> {} tokens",
            self.name,
            size,
            max_size,
        );
    }

    /// Encode a raw text line into an id sequence.
    ///
    /// The line is normalized, then each token is mapped through the
    /// vocabulary; tokens without an id map to the `<UNK>` id. Never
    /// fails, and never inserts sentence boundary ids; callers add
    /// `bos_id()` / `eos_id()` themselves if needed.
    ///
    /// ## Arguments
    /// * `line` - The raw text line.
    ///
    /// ## Returns
    /// The id sequence.
    pub fn encode(
        &self,
        line: &str,
    ) -> Vec<T> {
        let unk = self.unk_id();

        self.normalizer
            .normalize(line)
            .into_iter()
            .map(|token| self.token_id(&token).unwrap_or(unk))
            .collect()
    }

    /// Decode an id sequence back into text.
    ///
    /// Walks the ids in order, stopping before the first `</S>` id; every
    /// retained id is mapped to its token, the tokens are joined with
    /// single spaces, and `<EOL>` markers collapse back to literal
    /// newlines.
    ///
    /// ## Arguments
    /// * `ids` - The id sequence.
    ///
    /// ## Returns
    /// A `Result` with the decoded text, or a
    /// [`WordVocabError::UnknownTokenId`] if a retained id has no entry --
    /// a caller contract violation, not a recoverable condition.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> WVResult<String> {
        let eos = self.eos_id();

        let mut tokens: Vec<&str> = Vec::with_capacity(ids.len());
        for &id in ids {
            if id == eos {
                break;
            }
            match self.id2word.get(&id) {
                Some(token) => tokens.push(token),
                None => {
                    return Err(WordVocabError::UnknownTokenId {
                        id: id.to_u64().unwrap_or(u64::MAX),
                        size: self.size(),
                    });
                }
            }
        }

        Ok(self.normalizer.restore_newlines(&tokens.join(" ")))
    }

    /// Bump a token's count, registering first-seen order on first sight.
    ///
    /// ## Returns
    /// The updated count.
    fn bump_count(
        &mut self,
        token: &str,
    ) -> u64 {
        if let Some(stat) = self.word2count.get_mut(token) {
            stat.count += 1;
            stat.count
        } else {
            self.word2count.insert(
                token.to_string(),
                WordStat {
                    count: 1,
                    first_seen: self.seen_counter,
                },
            );
            self.seen_counter += 1;
            1
        }
    }

    /// Assign the next provisional id to a token.
    fn assign_next_id(
        &mut self,
        token: String,
    ) -> WVResult<T> {
        let id = T::from_usize(self.next_id).ok_or(WordVocabError::VocabSizeOverflow {
            size: self.next_id + 1,
        })?;
        self.next_id += 1;

        self.word2id.insert(token.clone(), id);
        self.id2word.insert(id, token);

        Ok(id)
    }

    /// Append a token at the next id position, for list-based reloading.
    ///
    /// Fails with [`WordVocabError::VocabConflict`] if the token already
    /// holds an id.
    pub(crate) fn push_token(
        &mut self,
        token: String,
    ) -> WVResult<T> {
        if self.word2id.contains_key(&token) {
            return Err(WordVocabError::VocabConflict(format!(
                "duplicate token {token:?} in token list"
            )));
        }
        self.assign_next_id(token)
    }
}

/// Convert a reserved special-token id to `T`.
fn reserved_id<T: TokenType>(id: usize) -> T {
    T::from_usize(id).expect("reserved ids fit any token type")
}

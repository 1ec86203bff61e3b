#![allow(missing_docs)]

use wordvocab::vocab::{IngestOptions, WordVocab, io, specials};

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve",
    "a &lt; b &amp; c",
    "$$$!!!...---",
];

fn sample_vocab(min_count: u64) -> WordVocab<u32> {
    let mut vocab = WordVocab::new("samples", min_count);
    vocab.ingest(SAMPLES, &IngestOptions::default()).unwrap();
    vocab
}

fn assert_specials_at_reserved_ids(vocab: &WordVocab<u32>) {
    for (id, &(token, _)) in specials::SPECIAL_TOKENS.iter().enumerate() {
        assert_eq!(vocab.token_id(token), Some(id as u32));
        assert_eq!(vocab.id_token(id as u32), Some(token));
    }
}

fn assert_contiguous_ids(vocab: &WordVocab<u32>) {
    for index in 0..vocab.size() {
        assert!(vocab.token_for_index(index).is_some(), "gap at id {index}");
    }
    assert_eq!(vocab.token_for_index(vocab.size()), None);
}

#[test]
fn roundtrip_all_samples() {
    let vocab = sample_vocab(1);

    for text in SAMPLES {
        let normalized = vocab.normalizer().normalize(text);
        let expected = vocab.normalizer().restore_newlines(&normalized.join(" "));

        let ids = vocab.encode(text);
        assert_eq!(ids.len(), normalized.len());

        let decoded = vocab.decode(&ids).unwrap();
        assert_eq!(decoded, expected, "roundtrip mismatch for {text:?}");
    }
}

#[test]
fn specials_and_contiguity_survive_ingest_and_limit() {
    let mut vocab = sample_vocab(1);

    assert_specials_at_reserved_ids(&vocab);
    assert_contiguous_ids(&vocab);

    let before = vocab.size();
    vocab.limit(10);

    assert_eq!(vocab.size(), before.min(10));
    assert_specials_at_reserved_ids(&vocab);
    assert_contiguous_ids(&vocab);
}

#[test]
fn unseen_tokens_encode_as_unk() {
    let vocab = sample_vocab(1);

    let ids = vocab.encode("hello zyzzyva");
    assert_eq!(ids[0], vocab.token_id("hello").unwrap());
    assert_eq!(ids[1], vocab.unk_id());
}

#[test]
fn build_limit_write_read_encode_decode() {
    let mut vocab = sample_vocab(1);
    vocab.limit(12);

    let mut buffer: Vec<u8> = Vec::new();
    io::write_token_list(&vocab, &mut buffer).unwrap();

    let reloaded: WordVocab<u32> = io::read_token_list("samples", buffer.as_slice()).unwrap();

    assert_eq!(reloaded.size(), vocab.size());
    assert_specials_at_reserved_ids(&reloaded);
    assert_contiguous_ids(&reloaded);

    for text in SAMPLES {
        let ids = vocab.encode(text);
        assert_eq!(reloaded.encode(text), ids);
        assert_eq!(reloaded.decode(&ids).unwrap(), vocab.decode(&ids).unwrap());
    }
}

#[test]
fn newline_volume_counting() {
    let options = IngestOptions::default().with_count_newline_as_eol(true);

    let mut vocab: WordVocab<u32> = WordVocab::new("lines", 2);
    let report = vocab.ingest(SAMPLES, &options).unwrap();

    assert_eq!(report.lines, SAMPLES.len());
    // One bump per line, plus the literal markers in the multi-line sample.
    assert_eq!(
        vocab.token_count(specials::EOL),
        Some(SAMPLES.len() as u64 + 2)
    );
}

//! # Text Line Normalizer
//!
//! Pure pipeline from a raw text line to an ordered sequence of normalized
//! word tokens. The steps run in a fixed order, and the order is load
//! bearing: punctuation padding must run before the `<EOL>` marker is
//! inserted (so the marker's `<`/`>` stay glued), and the marker insertion
//! must run before unknown symbols are collapsed (the marker's characters
//! are all in the allowed set, so it survives the collapse).

use regex::Regex;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

use crate::vocab::specials::EOL;

/// The punctuation characters that are split into their own tokens.
pub const ALLOWED_PUNCT: &str = ".!?,=<>";

/// Options for [`Normalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    /// Unescape HTML entities (``&amp;`` and friends) before anything else.
    pub unescape_html: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            unescape_html: true,
        }
    }
}

impl NormalizerOptions {
    /// Sets whether HTML entities are unescaped.
    ///
    /// ## Arguments
    /// * `unescape_html` - Whether to unescape entities.
    ///
    /// ## Returns
    /// The updated `NormalizerOptions` instance.
    pub fn with_unescape_html(
        self,
        unescape_html: bool,
    ) -> Self {
        Self { unescape_html }
    }

    /// Initializes a [`Normalizer`] from these options.
    pub fn init(self) -> Normalizer {
        Normalizer::new(self)
    }
}

/// Line normalizer.
///
/// Holds the compiled patterns for the pipeline; construct once and reuse.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Normalizer options.
    pub options: NormalizerOptions,

    punct_re: Regex,
    newline_re: Regex,
    junk_re: Regex,
    spaces_re: Regex,
    eol_collapse_re: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        NormalizerOptions::default().init()
    }
}

impl Normalizer {
    /// Create a new normalizer.
    ///
    /// ## Arguments
    /// * `options` - The normalizer options.
    ///
    /// ## Returns
    /// A new `Normalizer` instance.
    pub fn new(options: NormalizerOptions) -> Self {
        let compile = |pattern: &str| {
            Regex::new(pattern).expect("regex pattern compilation failed")
        };

        Self {
            options,
            punct_re: compile(&format!("([{ALLOWED_PUNCT}])")),
            newline_re: compile(r"[\r\n]+"),
            junk_re: compile(&format!("[^a-zA-Z0-9{ALLOWED_PUNCT}]+")),
            spaces_re: compile("[ ]+"),
            eol_collapse_re: compile(&format!(" *{EOL} *")),
        }
    }

    /// Normalize a raw text line into word tokens.
    ///
    /// Steps, in order:
    /// 1. Unescape HTML entities (if [`NormalizerOptions::unescape_html`]).
    /// 2. NFD-decompose and drop nonspacing marks (accent stripping).
    /// 3. Lowercase, trim surrounding whitespace.
    /// 4. Pad each of ``. ! ? , = < >`` with spaces.
    /// 5. Replace each run of CR/LF characters with a spaced `<EOL>` marker.
    /// 6. Collapse each run of characters outside the alphanumeric and
    ///    allowed punctuation set to a single space.
    /// 7. Trim again, then split on space runs.
    ///
    /// An empty (or fully collapsed) line yields a single empty-string
    /// token; callers that need line alignment depend on this, so it is
    /// not filtered out here.
    ///
    /// ## Arguments
    /// * `line` - The raw text line.
    ///
    /// ## Returns
    /// The ordered token sequence.
    pub fn normalize(
        &self,
        line: &str,
    ) -> Vec<String> {
        let s = if self.options.unescape_html {
            html_escape::decode_html_entities(line).into_owned()
        } else {
            line.to_string()
        };

        let s = strip_accents(&s);
        let s = s.to_lowercase();
        let s = s.trim();

        let s = self.punct_re.replace_all(s, " $1 ");
        let s = self.newline_re.replace_all(&s, format!(" {EOL} ").as_str());
        let s = self.junk_re.replace_all(&s, " ");
        let s = s.trim();

        self.spaces_re.split(s).map(str::to_string).collect()
    }

    /// Collapse spaced `<EOL>` markers back into literal newlines.
    ///
    /// This is the inverse of the marker insertion in [`Self::normalize`],
    /// used when rendering decoded token sequences back to text.
    ///
    /// ## Arguments
    /// * `text` - Space-joined token text.
    ///
    /// ## Returns
    /// The text with each marker (and its surrounding spaces) replaced by
    /// a newline character.
    pub fn restore_newlines(
        &self,
        text: &str,
    ) -> String {
        self.eol_collapse_re.replace_all(text, "\n").into_owned()
    }
}

/// Strip nonspacing combining marks after NFD decomposition.
///
/// Characters without a decomposition pass through unchanged.
fn strip_accents(s: &str) -> String {
    s.nfd()
        .filter(|&c| get_general_category(c) != GeneralCategory::NonspacingMark)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_isolation() {
        let norm = Normalizer::default();

        assert_eq!(
            norm.normalize("Hello, World!"),
            vec!["hello", ",", "world", "!"]
        );
        assert_eq!(norm.normalize("a<b>=3"), vec!["a", "<", "b", ">", "=", "3"]);
    }

    #[test]
    fn test_accent_stripping_and_case() {
        let norm = Normalizer::default();

        assert_eq!(
            norm.normalize("Caf\u{00e9} NA\u{00cf}VE"),
            vec!["cafe", "naive"]
        );
    }

    #[test]
    fn test_newline_marker() {
        let norm = Normalizer::default();

        assert_eq!(
            norm.normalize("line1\nline2"),
            vec!["line1", EOL, "line2"]
        );
        assert_eq!(
            norm.normalize("line1\r\n\r\nline2"),
            vec!["line1", EOL, "line2"]
        );
    }

    #[test]
    fn test_unknown_symbols_collapse() {
        let norm = Normalizer::default();

        assert_eq!(
            norm.normalize("price: $100 (approx); 50%"),
            vec!["price", "100", "approx", "50"]
        );
        assert_eq!(norm.normalize("\u{4f60}\u{597d} world"), vec!["world"]);
    }

    #[test]
    fn test_html_unescaping() {
        let norm = Normalizer::default();

        assert_eq!(norm.normalize("a &lt; b"), vec!["a", "<", "b"]);
        assert_eq!(norm.normalize("tom &amp; co."), vec!["tom", "co", "."]);

        let raw = NormalizerOptions::default()
            .with_unescape_html(false)
            .init();
        assert_eq!(raw.normalize("a &lt; b"), vec!["a", "lt", "b"]);
    }

    #[test]
    fn test_empty_line_single_empty_token() {
        let norm = Normalizer::default();

        assert_eq!(norm.normalize(""), vec![String::new()]);
        assert_eq!(norm.normalize("   "), vec![String::new()]);
        assert_eq!(norm.normalize("\u{1f600}\u{1f680}"), vec![String::new()]);
    }

    #[test]
    fn test_idempotence_on_normalized_text() {
        let norm = Normalizer::default();

        for s in [
            "Hello, World!",
            "It's 72 degrees  today...",
            "a &lt; b = c",
            "mixed: hello\u{00a0}world",
        ] {
            let once = norm.normalize(s);
            let again = norm.normalize(&once.join(" "));
            assert_eq!(again, once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_restore_newlines() {
        let norm = Normalizer::default();

        assert_eq!(
            norm.restore_newlines(&format!("line1 {EOL} line2")),
            "line1\nline2"
        );
        assert_eq!(norm.restore_newlines(EOL), "\n");
    }
}

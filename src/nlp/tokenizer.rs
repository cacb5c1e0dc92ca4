//! Word tokenization and token normalization
//!
//! The default tokenizer follows the Unicode word-boundary rules (UAX #29)
//! and drops punctuation and whitespace segments.

use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::traits::Tokenizer;

/// Default word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }
}

/// Strip a single trailing `.`; `"end."` becomes `"end"`, `"etc.."` becomes
/// `"etc."`.
pub fn strip_trailing_period(word: &str) -> &str {
    word.strip_suffix('.').unwrap_or(word)
}

/// Lower-case a token and strip one trailing period.
pub fn normalize_token(token: &str) -> String {
    strip_trailing_period(&token.to_lowercase()).to_string()
}

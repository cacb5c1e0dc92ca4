//! Collaborator trait definitions for the pipeline.
//!
//! Sentence segmentation, word tokenization and the stop-word inventory are
//! injected capabilities. The scoring core only assumes "an ordered sequence
//! of sentences, each an ordered sequence of word strings". Implementations
//! are statically dispatched through [`Pipeline`](super::runner::Pipeline)'s
//! type parameters; trait objects work too.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::types::Sentence;

// ============================================================================
// SentenceSplitter: stage 0a
// ============================================================================

/// Splits a document into sentences.
///
/// # Contract
///
/// - Sentences are returned in document order with `index` = 0, 1, 2, ...
/// - Each `text` is a verbatim substring of the input at `start..end`.
/// - Whitespace-only spans are not sentences.
pub trait SentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence>;
}

// ============================================================================
// Tokenizer: stage 0b
// ============================================================================

/// Splits one sentence into word tokens, in order.
///
/// Handling of contractions, hyphens and numerals is entirely up to the
/// implementation. Tokens are returned in their original case.
pub trait Tokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str>;
}

// ============================================================================
// StopwordSet: membership test for already lower-cased words
// ============================================================================

/// A fixed inventory of words excluded from frequency counting.
pub trait StopwordSet {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> StopwordSet for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

//! Sentence segmentation
//!
//! Uses the Unicode sentence-boundary rules (UAX #29) from
//! `unicode-segmentation`. Surrounding whitespace is trimmed off each span so
//! the sentence text stays a verbatim substring of the document.

use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::traits::SentenceSplitter;
use crate::types::Sentence;

/// Default sentence splitter
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for (offset, segment) in text.split_sentence_bound_indices() {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (segment.len() - segment.trim_start().len());
            let end = start + trimmed.len();
            sentences.push(Sentence::new(trimmed, start, end, sentences.len()));
        }

        sentences
    }
}

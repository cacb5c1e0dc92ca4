//! Frequency analysis
//!
//! Counts non-stop-word tokens across the whole document and keeps the
//! top-N as the significant word set.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::strip_trailing_period;
use crate::pipeline::traits::StopwordSet;
use crate::types::FrequencyEntry;

/// Builds the significant word set of a document
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    top_word_count: usize,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new(100)
    }
}

impl FrequencyAnalyzer {
    pub fn new(top_word_count: usize) -> Self {
        Self { top_word_count }
    }

    /// Count every token and return the `top_word_count` most frequent.
    ///
    /// Tokens are lower-cased, stop-words dropped, then one trailing period
    /// is trimmed from the survivors. Ties keep first-seen order.
    pub fn analyze<S, W>(&self, sentences: &[Vec<S>], stopwords: &W) -> Vec<FrequencyEntry>
    where
        S: AsRef<str>,
        W: StopwordSet + ?Sized,
    {
        let mut slots: FxHashMap<String, usize> = FxHashMap::default();
        let mut entries: Vec<FrequencyEntry> = Vec::new();

        let words = sentences
            .iter()
            .flatten()
            .map(|token| token.as_ref().to_lowercase());

        for word in words {
            if stopwords.contains(&word) {
                continue;
            }
            let word = strip_trailing_period(&word);
            match slots.get(word) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    slots.insert(word.to_string(), entries.len());
                    entries.push(FrequencyEntry::new(word, 1));
                }
            }
        }

        // Stable: equal counts stay in first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(self.top_word_count);
        entries
    }
}

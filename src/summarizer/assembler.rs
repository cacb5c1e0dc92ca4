//! Summary assembly
//!
//! Maps kept scores back to their sentences in document order.

use crate::types::{Sentence, SentenceScore, Summary, SummarySentence};

/// Build the [`Summary`] from the kept scores.
///
/// `kept` may be in any order; indices must refer to `sentences`.
pub fn assemble(sentences: &[Sentence], mut kept: Vec<SentenceScore>, source_len: usize) -> Summary {
    kept.sort_by_key(|s| s.index);

    let sentences = kept
        .into_iter()
        .filter_map(|score| {
            sentences.get(score.index).map(|sentence| SummarySentence {
                index: score.index,
                text: sentence.text.clone(),
                score: score.score,
            })
        })
        .collect();

    Summary {
        sentences,
        source_len,
    }
}

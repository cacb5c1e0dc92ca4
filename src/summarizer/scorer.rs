//! Sentence scoring
//!
//! Each sentence is scored by its densest run of significant words. The
//! first occurrence of every significant word gives a position; sorted
//! positions are grouped into clusters wherever consecutive positions are
//! closer than the cluster-distance threshold; a cluster of `k` significant
//! words spanning `span` tokens scores `k² / span`, and the sentence takes
//! the best of its clusters.
//!
//! Sentences are independent, so they are scored in parallel.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::types::{Cluster, FrequencyEntry, SentenceScore};

/// Scores sentences against a significant word set
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    cluster_distance_threshold: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl SentenceScorer {
    pub fn new(cluster_distance_threshold: usize) -> Self {
        Self {
            cluster_distance_threshold,
        }
    }

    /// Score every sentence that contains at least one significant word.
    ///
    /// `sentences` holds normalized tokens per sentence, in document order.
    /// The result is in document order and skips sentences without any
    /// significant word.
    pub fn score<S>(&self, sentences: &[Vec<S>], significant: &[FrequencyEntry]) -> Vec<SentenceScore>
    where
        S: AsRef<str> + Sync,
    {
        if significant.is_empty() {
            return Vec::new();
        }

        sentences
            .par_iter()
            .enumerate()
            .filter_map(|(index, tokens)| {
                self.score_sentence(tokens, significant)
                    .map(|score| SentenceScore::new(index, score))
            })
            .collect()
    }

    /// Best cluster score of one sentence, or `None` if no significant word
    /// occurs in it.
    pub fn score_sentence<S: AsRef<str>>(
        &self,
        tokens: &[S],
        significant: &[FrequencyEntry],
    ) -> Option<f64> {
        let positions = significant_positions(tokens, significant);
        if positions.is_empty() {
            return None;
        }

        build_clusters(&positions, self.cluster_distance_threshold)
            .iter()
            .map(Cluster::score)
            .reduce(f64::max)
    }
}

/// Sorted first-occurrence positions of the significant words found in
/// `tokens`. Words that do not occur are left out.
pub fn significant_positions<S: AsRef<str>>(tokens: &[S], significant: &[FrequencyEntry]) -> Vec<usize> {
    let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
    for (pos, token) in tokens.iter().enumerate() {
        first_seen.entry(token.as_ref()).or_insert(pos);
    }

    let mut positions: Vec<usize> = significant
        .iter()
        .filter_map(|entry| first_seen.get(entry.word.as_str()).copied())
        .collect();
    positions.sort_unstable();
    positions
}

/// Group ascending `positions` into clusters.
///
/// A position joins the current cluster when its gap to the previous one is
/// strictly less than `threshold`; otherwise it starts a new cluster.
///
/// # Panics
///
/// `positions` must be strictly ascending, as [`significant_positions`]
/// returns them. Descending input underflows the gap computation.
pub(crate) fn build_clusters(positions: &[usize], threshold: usize) -> Vec<Cluster> {
    let Some((&first, rest)) = positions.split_first() else {
        return Vec::new();
    };

    let mut clusters = Vec::new();
    let mut current = Cluster::starting_at(first);
    let mut previous = first;

    for &pos in rest {
        if pos - previous < threshold {
            current.push(pos);
        } else {
            clusters.push(std::mem::replace(&mut current, Cluster::starting_at(pos)));
        }
        previous = pos;
    }
    clusters.push(current);

    clusters
}

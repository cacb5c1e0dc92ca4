//! Core data model
//!
//! Sentences, frequency entries, clusters and scores flow forward through the
//! pipeline; [`SummarizerConfig`] carries the tunable constants.

use serde::{Deserialize, Serialize};

use crate::pipeline::errors::PipelineSpecError;
use crate::pipeline::error_code::ErrorCode;

/// A sentence of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Verbatim text, exactly as it appears in the document
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Position in document order
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// Occurrence count of one surviving word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// A run of significant-word positions within one sentence.
///
/// Positions are strictly increasing and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    positions: Vec<usize>,
}

impl Cluster {
    /// Start a cluster at `position`
    pub fn starting_at(position: usize) -> Self {
        Self {
            positions: vec![position],
        }
    }

    pub(crate) fn push(&mut self, position: usize) {
        debug_assert!(self.last() < position);
        self.positions.push(position);
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn first(&self) -> usize {
        self.positions[0]
    }

    pub fn last(&self) -> usize {
        self.positions[self.positions.len() - 1]
    }

    /// Number of significant words in the cluster
    pub fn significant_words(&self) -> usize {
        self.positions.len()
    }

    /// Tokens covered, inclusive of both ends
    pub fn span(&self) -> usize {
        self.last() - self.first() + 1
    }

    /// `k² / span`
    pub fn score(&self) -> f64 {
        let k = self.significant_words() as f64;
        k * k / self.span() as f64
    }
}

/// Salience of one sentence that contained at least one significant word
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
}

impl SentenceScore {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// What to do when exactly one sentence could be scored.
///
/// The standard deviation of a single score is zero, so the plain cutoff
/// `score > mean + m * 0` can never hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoneSentencePolicy {
    /// Always keep the sole scored sentence
    #[default]
    Keep,
    /// Apply the cutoff unchanged (the sentence is never kept)
    Formula,
}

/// Summarizer tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum size of the significant word set
    pub top_word_count: usize,
    /// Positions closer than this stay in the same cluster
    pub cluster_distance_threshold: usize,
    /// Standard deviations above the mean a sentence must exceed
    pub selection_std_dev_multiplier: f64,
    /// Stop-word inventory language
    pub language: String,
    pub lone_sentence_policy: LoneSentencePolicy,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            top_word_count: 100,
            cluster_distance_threshold: 5,
            selection_std_dev_multiplier: 0.5,
            language: "en".to_string(),
            lone_sentence_policy: LoneSentencePolicy::Keep,
        }
    }
}

impl SummarizerConfig {
    pub fn with_top_word_count(mut self, n: usize) -> Self {
        self.top_word_count = n;
        self
    }

    pub fn with_cluster_distance_threshold(mut self, threshold: usize) -> Self {
        self.cluster_distance_threshold = threshold;
        self
    }

    pub fn with_selection_std_dev_multiplier(mut self, multiplier: f64) -> Self {
        self.selection_std_dev_multiplier = multiplier;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_lone_sentence_policy(mut self, policy: LoneSentencePolicy) -> Self {
        self.lone_sentence_policy = policy;
        self
    }

    /// Check the numeric constraints, returning every violation found.
    pub fn validate(&self) -> Vec<PipelineSpecError> {
        let mut out = Vec::new();

        let counts: &[(&str, usize)] = &[
            ("top_word_count", self.top_word_count),
            ("cluster_distance_threshold", self.cluster_distance_threshold),
        ];
        for &(field, value) in counts {
            if value == 0 {
                out.push(
                    PipelineSpecError::new(
                        ErrorCode::InvalidValue,
                        format!("/scoring/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint("Use a positive value"),
                );
            }
        }

        let m = self.selection_std_dev_multiplier;
        if !m.is_finite() || m < 0.0 {
            out.push(
                PipelineSpecError::new(
                    ErrorCode::InvalidValue,
                    "/selection/std_dev_multiplier",
                    format!("std_dev_multiplier must be a finite, non-negative number, got {m}"),
                )
                .with_hint("The default is 0.5"),
            );
        }

        out
    }
}

/// One sentence kept in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Result of summarizing one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Kept sentences in document order
    pub sentences: Vec<SummarySentence>,
    /// Length of the source document in bytes
    pub source_len: usize,
}

impl Summary {
    /// Summary text: kept sentences joined by `\n`, no trailing separator
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Fraction of the source removed, in `[0, 1]`
    pub fn compression_ratio(&self) -> f64 {
        if self.source_len == 0 {
            return 0.0;
        }
        let kept = self.text().len().min(self.source_len);
        (self.source_len - kept) as f64 / self.source_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_span_and_score() {
        let mut cluster = Cluster::starting_at(9);
        cluster.push(10);
        cluster.push(13);

        assert_eq!(cluster.significant_words(), 3);
        assert_eq!(cluster.span(), 5);
        assert!((cluster.score() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_single_position_cluster() {
        let cluster = Cluster::starting_at(4);
        assert_eq!(cluster.span(), 1);
        assert_eq!(cluster.score(), 1.0);
    }

    #[test]
    fn test_default_config() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.top_word_count, 100);
        assert_eq!(cfg.cluster_distance_threshold, 5);
        assert_eq!(cfg.selection_std_dev_multiplier, 0.5);
        assert_eq!(cfg.lone_sentence_policy, LoneSentencePolicy::Keep);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn test_config_validation_collects_all_errors() {
        let cfg = SummarizerConfig::default()
            .with_top_word_count(0)
            .with_cluster_distance_threshold(0)
            .with_selection_std_dev_multiplier(f64::NAN);

        let errors = cfg.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.code == ErrorCode::InvalidValue));
        assert_eq!(errors[0].path, "/scoring/top_word_count");
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let cfg = SummarizerConfig::default().with_selection_std_dev_multiplier(-1.0);
        assert_eq!(cfg.validate().len(), 1);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{ "top_word_count": 20, "lone_sentence_policy": "formula" }"#)
                .unwrap();
        assert_eq!(cfg.top_word_count, 20);
        assert_eq!(cfg.cluster_distance_threshold, 5);
        assert_eq!(cfg.lone_sentence_policy, LoneSentencePolicy::Formula);
    }

    #[test]
    fn test_summary_text_and_compression() {
        let summary = Summary {
            sentences: vec![
                SummarySentence {
                    index: 0,
                    text: "First.".into(),
                    score: 2.0,
                },
                SummarySentence {
                    index: 3,
                    text: "Fourth.".into(),
                    score: 3.0,
                },
            ],
            source_len: 28,
        };

        assert_eq!(summary.text(), "First.\nFourth.");
        assert_eq!(summary.len(), 2);
        assert!((summary.compression_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
        assert_eq!(summary.compression_ratio(), 0.0);
    }
}

//! Outlier-based sentence selection
//!
//! Keeps every sentence whose score is strictly above
//! `mean + multiplier * stddev` of all sentence scores.

use crate::types::{LoneSentencePolicy, SentenceScore};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Standard deviations above the mean a score must exceed
    pub std_dev_multiplier: f64,
    /// Handling of a document with exactly one scored sentence
    pub lone_sentence_policy: LoneSentencePolicy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            std_dev_multiplier: 0.5,
            lone_sentence_policy: LoneSentencePolicy::Keep,
        }
    }
}

/// Mean and population standard deviation of a score list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ScoreStats {
    /// `None` for an empty slice. When every value is identical (a single
    /// value included) the mean is that value and the standard deviation is
    /// exactly zero, so no score can exceed the cutoff.
    pub fn population(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        if rest.iter().all(|&v| v == first) {
            return Some(Self {
                mean: first,
                std_dev: 0.0,
            });
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    pub fn cutoff(&self, multiplier: f64) -> f64 {
        self.mean + multiplier * self.std_dev
    }
}

/// Outcome of a selection pass
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Kept scores, in input order
    pub kept: Vec<SentenceScore>,
    /// Cutoff that was applied, if there were any scores
    pub cutoff: Option<f64>,
}

/// Statistical-outlier sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn with_std_dev_multiplier(mut self, multiplier: f64) -> Self {
        self.config.std_dev_multiplier = multiplier;
        self
    }

    pub fn with_lone_sentence_policy(mut self, policy: LoneSentencePolicy) -> Self {
        self.config.lone_sentence_policy = policy;
        self
    }

    pub fn select(&self, scores: &[SentenceScore]) -> Selection {
        let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
        let Some(stats) = ScoreStats::population(&values) else {
            return Selection::default();
        };
        let cutoff = stats.cutoff(self.config.std_dev_multiplier);

        let kept = if scores.len() == 1 && self.config.lone_sentence_policy == LoneSentencePolicy::Keep {
            scores.to_vec()
        } else {
            scores.iter().filter(|s| s.score > cutoff).copied().collect()
        };

        Selection {
            kept,
            cutoff: Some(cutoff),
        }
    }
}

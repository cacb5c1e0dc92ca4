//! Summarizer configuration document.
//!
//! A [`SummarizerSpec`] is the JSON form of a [`SummarizerConfig`] plus the
//! stop-word inventory. It is the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "scoring": { "top_word_count": 100, "cluster_distance_threshold": 5 },
//!   "selection": { "std_dev_multiplier": 0.5, "lone_sentence": "keep" },
//!   "stopwords": { "language": "en", "add": ["via"], "remove": [] },
//!   "strict": false
//! }
//! ```
//!
//! Every field except `v` is optional and falls back to the defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::runner::{DefaultPipeline, PipelineBuilder};
use super::validation::ValidationEngine;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{LoneSentencePolicy, SummarizerConfig};

/// Top-level configuration document (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Document version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub scoring: ScoringSpec,

    #[serde(default)]
    pub selection: SelectionSpec,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Frequency and clustering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSpec {
    #[serde(default)]
    pub top_word_count: Option<usize>,

    #[serde(default)]
    pub cluster_distance_threshold: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Cutoff settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSpec {
    #[serde(default)]
    pub std_dev_multiplier: Option<f64>,

    #[serde(default)]
    pub lone_sentence: Option<LoneSentencePolicy>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Stop-word inventory: a built-in language list, edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default)]
    pub language: Option<String>,

    /// Extra words to ignore.
    #[serde(default)]
    pub add: Vec<String>,

    /// Built-in words to count after all.
    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarizerSpec {
    /// Parse a JSON document. Does not validate.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The numeric configuration, with defaults filled in.
    pub fn to_config(&self) -> SummarizerConfig {
        let defaults = SummarizerConfig::default();
        SummarizerConfig {
            top_word_count: self.scoring.top_word_count.unwrap_or(defaults.top_word_count),
            cluster_distance_threshold: self
                .scoring
                .cluster_distance_threshold
                .unwrap_or(defaults.cluster_distance_threshold),
            selection_std_dev_multiplier: self
                .selection
                .std_dev_multiplier
                .unwrap_or(defaults.selection_std_dev_multiplier),
            language: self.stopwords.language.clone().unwrap_or(defaults.language),
            lone_sentence_policy: self
                .selection
                .lone_sentence
                .unwrap_or(defaults.lone_sentence_policy),
        }
    }

    /// The stop-word inventory described by the `stopwords` section.
    pub fn stopword_filter(&self) -> StopwordFilter {
        let language = self.stopwords.language.as_deref().unwrap_or("en");
        let mut filter = StopwordFilter::new(language);
        filter.add_stopwords(&self.stopwords.add);
        filter.remove_stopwords(&self.stopwords.remove);
        filter
    }

    /// Validate and build a pipeline. Warnings are logged; any error
    /// rejects the document with every diagnostic attached.
    pub fn into_pipeline(self) -> Result<DefaultPipeline> {
        let report = ValidationEngine::with_defaults().validate(&self);
        if report.has_errors() {
            return Err(SummarizeError::InvalidConfig(report));
        }
        for warning in report.warnings() {
            warn!(%warning, "summarizer configuration warning");
        }

        let stopwords = self.stopword_filter();
        PipelineBuilder::for_config(self.to_config())
            .stopwords(stopwords)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(!spec.strict);
        assert_eq!(spec.to_config(), SummarizerConfig::default());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "scoring": { "top_word_count": 40, "cluster_distance_threshold": 3 },
            "selection": { "std_dev_multiplier": 1.0, "lone_sentence": "formula" },
            "stopwords": { "language": "de", "add": ["Rust"], "remove": ["und"] },
            "strict": true
        }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();
        let cfg = spec.to_config();

        assert_eq!(cfg.top_word_count, 40);
        assert_eq!(cfg.cluster_distance_threshold, 3);
        assert_eq!(cfg.selection_std_dev_multiplier, 1.0);
        assert_eq!(cfg.lone_sentence_policy, LoneSentencePolicy::Formula);
        assert_eq!(cfg.language, "de");
        assert!(spec.strict);

        let filter = spec.stopword_filter();
        assert!(filter.is_stopword("rust"));
        assert!(filter.is_stopword("der"));
        assert!(!filter.is_stopword("und"));
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let err = SummarizerSpec::from_json(r#"{ "scoring": {} }"#).unwrap_err();
        assert!(matches!(err, SummarizeError::Json(_)));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "scoring": { "top_n": 10 },
            "stopwords": { "lang": "en" }
        }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.scoring.unknown_fields.contains_key("top_n"));
        assert!(spec.stopwords.unknown_fields.contains_key("lang"));
    }

    #[test]
    fn test_into_pipeline_rejects_invalid_values() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1, "scoring": { "top_word_count": 0 } }"#)
            .unwrap();
        assert!(matches!(spec.into_pipeline(), Err(SummarizeError::InvalidConfig(_))));
    }

    #[test]
    fn test_into_pipeline_allows_warnings() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1, "extra": true }"#).unwrap();
        let pipeline = spec.into_pipeline().unwrap();
        assert_eq!(pipeline.config().top_word_count, 100);
    }
}

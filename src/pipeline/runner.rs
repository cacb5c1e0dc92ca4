//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds the injected collaborators (sentence
//! splitter, tokenizer, stop-word inventory) and a validated
//! [`SummarizerConfig`]. Calling [`Pipeline::run`] executes the stages in
//! order, threading artifacts between them and notifying a
//! [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its collaborators, so each combination is
//! monomorphized. The defaults are zero-sized except for the stop-word set.

use tracing::debug;

use crate::errors::{Result, SummarizeError};
use crate::nlp::sentence::UnicodeSentenceSplitter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{normalize_token, UnicodeWordTokenizer};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_ASSEMBLE, STAGE_FREQUENCY,
    STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::traits::{SentenceSplitter, StopwordSet, Tokenizer};
use crate::pipeline::validation::{ValidationDiagnostic, ValidationReport};
use crate::summarizer::assembler::assemble;
use crate::summarizer::frequency::FrequencyAnalyzer;
use crate::summarizer::scorer::SentenceScorer;
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::types::{SummarizerConfig, Summary};

/// Enter a tracing span for a pipeline stage. The returned guard closes the
/// span when dropped.
macro_rules! stage_span {
    ($name:expr) => {
        tracing::info_span!("pipeline_stage", stage = $name).entered()
    };
}

// ============================================================================
// Pipeline: statically-composed collaborator container
// ============================================================================

/// A summarization pipeline.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Split` | [`SentenceSplitter`] | [`UnicodeSentenceSplitter`] |
/// | `Tok` | [`Tokenizer`] | [`UnicodeWordTokenizer`] |
/// | `Stop` | [`StopwordSet`] | [`StopwordFilter`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Split, Tok, Stop> {
    pub splitter: Split,
    pub tokenizer: Tok,
    pub stopwords: Stop,
    config: SummarizerConfig,
}

/// Type alias for the pipeline with all default collaborators.
pub type DefaultPipeline = Pipeline<UnicodeSentenceSplitter, UnicodeWordTokenizer, StopwordFilter>;

impl DefaultPipeline {
    /// Default collaborators, stop-words for `config.language`.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        PipelineBuilder::for_config(config).build()
    }
}

impl<Split, Tok, Stop> Pipeline<Split, Tok, Stop> {
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Split, Tok, Stop> Pipeline<Split, Tok, Stop>
where
    Split: SentenceSplitter,
    Tok: Tokenizer,
    Stop: StopwordSet,
{
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// Stages run in order:
    /// 1. Segment into sentences and tokens
    /// 2. Build the significant word set
    /// 3. Score sentences
    /// 4. Select outliers
    /// 5. Assemble in document order
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> Summary {
        let cfg = &self.config;

        // Stage 1: Segment
        let span = stage_span!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.splitter.split(text);
        let tokens: Vec<Vec<&str>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(&s.text))
            .collect();
        debug!(sentences = sentences.len(), "segmented document");
        let report = StageReport::new(clock.elapsed()).with_items(sentences.len());
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);
        drop(span);

        // Stage 2: Frequency analysis
        let span = stage_span!(STAGE_FREQUENCY);
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let significant =
            FrequencyAnalyzer::new(cfg.top_word_count).analyze(&tokens, &self.stopwords);
        debug!(significant_words = significant.len(), "built significant word set");
        let report = StageReport::new(clock.elapsed()).with_items(significant.len());
        observer.on_stage_end(STAGE_FREQUENCY, &report);
        observer.on_frequencies(&significant);
        drop(span);

        // Stage 3: Score
        let span = stage_span!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let normalized: Vec<Vec<String>> = tokens
            .iter()
            .map(|sentence| sentence.iter().map(|t| normalize_token(t)).collect())
            .collect();
        let scores =
            SentenceScorer::new(cfg.cluster_distance_threshold).score(&normalized, &significant);
        debug!(scored = scores.len(), "scored sentences");
        let report = StageReport::new(clock.elapsed()).with_items(scores.len());
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&scores);
        drop(span);

        // Stage 4: Select
        let span = stage_span!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = SentenceSelector::with_config(SelectorConfig {
            std_dev_multiplier: cfg.selection_std_dev_multiplier,
            lone_sentence_policy: cfg.lone_sentence_policy,
        })
        .select(&scores);
        debug!(kept = selection.kept.len(), cutoff = ?selection.cutoff, "selected sentences");
        let report = StageReport::new(clock.elapsed()).with_items(selection.kept.len());
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);
        drop(span);

        // Stage 5: Assemble
        let _span = stage_span!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let summary = assemble(&sentences, selection.kept, text.len());
        let report = StageReport::new(clock.elapsed()).with_items(summary.len());
        observer.on_stage_end(STAGE_ASSEMBLE, &report);

        summary
    }

    /// Run without an observer and return the summary text.
    pub fn summarize(&self, text: &str) -> String {
        self.run(text, &mut NoopObserver).text()
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom collaborators
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom collaborators.
///
/// The stop-word inventory is fixed when the builder is created:
/// [`PipelineBuilder::new`] starts from the English list and
/// [`PipelineBuilder::for_config`] from the configured language. Replace it
/// with [`PipelineBuilder::stopwords`].
///
/// ```
/// # use rapid_luhn::pipeline::runner::PipelineBuilder;
/// # use rapid_luhn::nlp::stopwords::StopwordFilter;
/// let pipeline = PipelineBuilder::new()
///     .stopwords(StopwordFilter::from_list(&["the", "a"]))
///     .build()
///     .unwrap();
/// assert_eq!(pipeline.summarize(""), "");
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<
    Split = UnicodeSentenceSplitter,
    Tok = UnicodeWordTokenizer,
    Stop = StopwordFilter,
> {
    splitter: Split,
    tokenizer: Tok,
    stopwords: Stop,
    config: SummarizerConfig,
}

impl PipelineBuilder {
    /// Start from the default collaborators and configuration.
    pub fn new() -> Self {
        Self::for_config(SummarizerConfig::default())
    }

    /// Start from the default collaborators with `config`, loading the
    /// stop-word list for `config.language`.
    pub fn for_config(config: SummarizerConfig) -> Self {
        PipelineBuilder {
            splitter: UnicodeSentenceSplitter,
            tokenizer: UnicodeWordTokenizer,
            stopwords: StopwordFilter::new(&config.language),
            config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Split, Tok, Stop> PipelineBuilder<Split, Tok, Stop> {
    /// Override the sentence splitter.
    pub fn splitter<S: SentenceSplitter>(self, splitter: S) -> PipelineBuilder<S, Tok, Stop> {
        PipelineBuilder {
            splitter,
            tokenizer: self.tokenizer,
            stopwords: self.stopwords,
            config: self.config,
        }
    }

    /// Override the tokenizer.
    pub fn tokenizer<T: Tokenizer>(self, tokenizer: T) -> PipelineBuilder<Split, T, Stop> {
        PipelineBuilder {
            splitter: self.splitter,
            tokenizer,
            stopwords: self.stopwords,
            config: self.config,
        }
    }

    /// Override the stop-word inventory.
    pub fn stopwords<W: StopwordSet>(self, stopwords: W) -> PipelineBuilder<Split, Tok, W> {
        PipelineBuilder {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            stopwords,
            config: self.config,
        }
    }

    /// Replace the numeric configuration. Does not reload stop-words.
    pub fn config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and produce a [`Pipeline`].
    pub fn build(self) -> Result<Pipeline<Split, Tok, Stop>> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Err(SummarizeError::InvalidConfig(ValidationReport {
                diagnostics: errors.into_iter().map(ValidationDiagnostic::error).collect(),
            }));
        }

        Ok(Pipeline {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            stopwords: self.stopwords,
            config: self.config,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

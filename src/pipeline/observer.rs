//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and capturing intermediate
//! artifacts (sentences, frequency table, scores) for debugging.

use std::time::{Duration, Instant};

use crate::summarizer::selector::Selection;
use crate::types::{FrequencyEntry, Sentence, SentenceScore};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Stage names in execution order
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_FREQUENCY,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_ASSEMBLE,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Receives callbacks while a pipeline runs. Every method has an empty
/// default, so implementors override only what they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_frequencies(&mut self, _significant: &[FrequencyEntry]) {}

    fn on_scores(&mut self, _scores: &[SentenceScore]) {}

    fn on_selection(&mut self, _selection: &Selection) {}
}

/// Ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a [`StageReport`] per finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

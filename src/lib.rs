//! # rapid-luhn
//!
//! Deterministic extractive summarization. The summary is a subset of the
//! document's own sentences, chosen because they pack the document's most
//! frequent non-trivial vocabulary into dense runs.
//!
//! ```
//! let text = "Rust is a systems programming language. \
//!             The weather was pleasant. \
//!             Rust programming gives memory safety in systems code.";
//! let summary = rapid_luhn::summarize(text).unwrap();
//! for line in summary.lines() {
//!     assert!(text.contains(line));
//! }
//! ```
//!
//! For the structured result (scores, compression ratio) or custom
//! collaborators, use [`pipeline::runner::PipelineBuilder`].

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

use rayon::prelude::*;

pub use errors::{Result, SummarizeError};
pub use pipeline::runner::{DefaultPipeline, Pipeline, PipelineBuilder};
pub use pipeline::spec::SummarizerSpec;
pub use types::{LoneSentencePolicy, Summary, SummarizerConfig};

/// Summarize `text` with the default configuration and English stop-words.
///
/// Returns the selected sentences, verbatim and in document order, joined by
/// `\n`. An empty or vocabulary-free document yields `""`.
pub fn summarize(text: &str) -> Result<String> {
    summarize_with(text, &SummarizerConfig::default())
}

/// Summarize `text` with `config`. The configuration is validated first.
pub fn summarize_with(text: &str, config: &SummarizerConfig) -> Result<String> {
    let pipeline = DefaultPipeline::with_config(config.clone())?;
    Ok(pipeline.summarize(text))
}

/// Summarize raw bytes, rejecting anything that is not UTF-8 text.
pub fn summarize_bytes(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SummarizeError::InvalidInput(format!("input is not valid UTF-8: {e}")))?;
    summarize(text)
}

/// Summarize many documents in parallel. Results are in input order.
pub fn summarize_batch<S>(texts: &[S], config: &SummarizerConfig) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let pipeline = DefaultPipeline::with_config(config.clone())?;
    Ok(texts
        .par_iter()
        .map(|text| pipeline.summarize(text.as_ref()))
        .collect())
}

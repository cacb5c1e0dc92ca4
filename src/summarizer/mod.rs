//! Summarization components
//!
//! Extractive summarization by significant-word density:
//! frequency analysis picks the document's vocabulary, the scorer rates each
//! sentence by its densest cluster of that vocabulary, the selector keeps
//! statistical outliers and the assembler restores document order.

pub mod assembler;
pub mod frequency;
pub mod scorer;
pub mod selector;

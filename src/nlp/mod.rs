//! Natural Language Processing components
//!
//! This module provides the default sentence splitter, tokenizer and
//! stopword filtering.

pub mod sentence;
pub mod stopwords;
pub mod tokenizer;

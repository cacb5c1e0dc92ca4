//! Pipeline composition
//!
//! Collaborator traits, the stage runner, observer hooks, and the JSON
//! configuration document with its validation engine.

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

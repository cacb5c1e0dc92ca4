//! Error types for the public entry points.

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

/// Everything that can make a summarization call fail.
///
/// Degenerate documents (empty text, no sentences, nothing but stop-words)
/// are not errors; they produce an empty summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {}", first_error(.0))]
    InvalidConfig(ValidationReport),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

fn first_error(report: &ValidationReport) -> String {
    match report.errors().next() {
        Some(err) => err.to_string(),
        None => "no details".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error_code::ErrorCode;
    use crate::pipeline::errors::PipelineSpecError;
    use crate::pipeline::validation::ValidationDiagnostic;

    #[test]
    fn test_invalid_config_display_uses_first_error() {
        let report = ValidationReport {
            diagnostics: vec![
                ValidationDiagnostic::warning(PipelineSpecError::new(
                    ErrorCode::UnknownField,
                    "/extra",
                    "unrecognized field \"extra\"",
                )),
                ValidationDiagnostic::error(PipelineSpecError::new(
                    ErrorCode::InvalidValue,
                    "/scoring/top_word_count",
                    "top_word_count must be greater than 0",
                )),
            ],
        };

        let err = SummarizeError::InvalidConfig(report);
        assert_eq!(
            err.to_string(),
            "invalid configuration: [invalid_value] /scoring/top_word_count: \
             top_word_count must be greater than 0"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SummarizeError = parse.unwrap_err().into();
        assert!(matches!(err, SummarizeError::Json(_)));
    }
}

//! Structured configuration errors.

use serde::Serialize;

use super::error_code::ErrorCode;

/// A single configuration problem: what went wrong, where (as a JSON
/// pointer into the configuration document), and optionally how to fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineSpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PipelineSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for PipelineSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for PipelineSpecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = PipelineSpecError::new(
            ErrorCode::InvalidValue,
            "/scoring/top_word_count",
            "top_word_count must be greater than 0",
        )
        .with_hint("Use a positive value");

        assert_eq!(
            err.to_string(),
            "[invalid_value] /scoring/top_word_count: top_word_count must be greater than 0 \
             (hint: Use a positive value)"
        );
    }

    #[test]
    fn test_serialize_omits_missing_hint() {
        let err = PipelineSpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}

//! Stable machine-readable codes for configuration diagnostics.

use serde::Serialize;

/// Diagnostic category. Serialized in `snake_case`; the strings are part of
/// the public contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` names a document version this crate does not understand.
    UnsupportedVersion,
    /// A numeric setting is out of range.
    InvalidValue,
    /// The stop-word language has no built-in inventory.
    UnknownLanguage,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_matches_as_str() {
        for code in [
            ErrorCode::UnsupportedVersion,
            ErrorCode::InvalidValue,
            ErrorCode::UnknownLanguage,
            ErrorCode::UnknownField,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.as_str());
        }
    }
}

//! Validation engine for summarizer configuration documents.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarizerSpec`](super::spec::SummarizerSpec) and collects every
//! diagnostic into a [`ValidationReport`]. It never short-circuits on the
//! first error, so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_luhn::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::SummarizerSpec;
use crate::nlp::stopwords::{is_supported_language, SUPPORTED_LANGUAGES};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`PipelineSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarizerSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"version"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarizerSpec`] and
/// collects all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(ConfigValuesRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarizerSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Only version 1 is understood ────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == 1 {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            PipelineSpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported configuration version {}", spec.v),
            )
            .with_hint("Set \"v\": 1"),
        )]
    }
}

// ─── 2. Numeric settings in range ───────────────────────────────────────────

struct ConfigValuesRule;

impl ValidationRule for ConfigValuesRule {
    fn name(&self) -> &str {
        "config_values"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        spec.to_config()
            .validate()
            .into_iter()
            .map(ValidationDiagnostic::error)
            .collect()
    }
}

// ─── 3. Stop-word language has a built-in list ──────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        match spec.stopwords.language.as_deref() {
            Some(lang) if !is_supported_language(lang) => {
                vec![ValidationDiagnostic::warning(
                    PipelineSpecError::new(
                        ErrorCode::UnknownLanguage,
                        "/stopwords/language",
                        format!("no built-in stop-words for \"{lang}\", using English"),
                    )
                    .with_hint(format!("Supported: {}", SUPPORTED_LANGUAGES.join(", "))),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    PipelineSpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/scoring",
            &spec.scoring.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/selection",
            &spec.selection.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> SummarizerSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "scoring": { "top_word_count": 50, "cluster_distance_threshold": 4 },
                "selection": { "std_dev_multiplier": 0.0, "lone_sentence": "keep" },
                "stopwords": { "language": "fr" }
            }"#,
        ));
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        assert_eq!(
            engine().rule_names(),
            vec!["version", "config_values", "stopword_language", "unknown_fields"]
        );
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errors[0].path, "/v");
    }

    #[test]
    fn test_all_value_errors_reported_together() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "scoring": { "top_word_count": 0, "cluster_distance_threshold": 0 },
                "selection": { "std_dev_multiplier": -0.5 }
            }"#,
        ));
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/scoring/top_word_count",
                "/scoring/cluster_distance_threshold",
                "/selection/std_dev_multiplier",
            ]
        );
    }

    // ─── Warnings ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_is_warning() {
        let report = engine().validate(&spec(r#"{ "v": 1, "stopwords": { "language": "xx" } }"#));
        assert!(report.is_valid());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ErrorCode::UnknownLanguage);
    }

    #[test]
    fn test_unknown_fields_non_strict_warn() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "bogus": 1, "selection": { "cutoff": 2 } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<&str> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/bogus", "/selection/cutoff"]);
    }

    #[test]
    fn test_unknown_fields_strict_error() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "stopwords": { "lang": "en" } }"#,
        ));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "/stopwords/lang");
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 3 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let first = &json["diagnostics"][0];
        assert_eq!(first["severity"], "error");
        assert_eq!(first["code"], "unsupported_version");
        assert_eq!(first["path"], "/v");
    }

    #[test]
    fn test_custom_rule() {
        struct NoGermanRule;

        impl ValidationRule for NoGermanRule {
            fn name(&self) -> &str {
                "no_german"
            }

            fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
                if spec.stopwords.language.as_deref() == Some("de") {
                    vec![ValidationDiagnostic::error(PipelineSpecError::new(
                        ErrorCode::InvalidValue,
                        "/stopwords/language",
                        "german is disabled",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(NoGermanRule));
        let report = engine.validate(&spec(r#"{ "v": 1, "stopwords": { "language": "de" } }"#));
        assert_eq!(report.len(), 1);
        assert!(report.has_errors());
    }
}

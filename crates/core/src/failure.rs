//! Structured failures returned to the calling agent.
//!
//! Engine errors never escape as faults. Each one is converted into a
//! [`Failure`]: a machine-readable [`ErrorKind`], a message, and a bag of
//! hint fields (`available_laws`, `missing`, ...) the agent can use to
//! repair its next call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Every recoverable failure the computation layer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    // Arithmetic
    EmptyInput,
    InvalidNumber,
    ArityError,
    DivisionByZero,
    UnknownOperation,

    // Constants
    UnknownCategory,
    UnknownConstant,
    PartialMatch,

    // Formulas
    UnknownLaw,
    MissingParameters,
    InsufficientParameters,
    Overdetermined,
    TotalInternalReflection,
    CalculationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::ArityError => "arity_error",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::UnknownOperation => "unknown_operation",
            ErrorKind::UnknownCategory => "unknown_category",
            ErrorKind::UnknownConstant => "unknown_constant",
            ErrorKind::PartialMatch => "partial_match",
            ErrorKind::UnknownLaw => "unknown_law",
            ErrorKind::MissingParameters => "missing_parameters",
            ErrorKind::InsufficientParameters => "insufficient_parameters",
            ErrorKind::Overdetermined => "overdetermined",
            ErrorKind::TotalInternalReflection => "total_internal_reflection",
            ErrorKind::CalculationError => "calculation_error",
        }
    }

    /// A partial match only asks the caller to disambiguate.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ErrorKind::PartialMatch)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured failure: kind, message, and optional hint fields.
///
/// Serializes flat, e.g.
/// `{"error": "...", "kind": "unknown_law", "available_laws": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    #[serde(rename = "error")]
    pub message: String,

    pub kind: ErrorKind,

    #[serde(flatten)]
    pub hints: Map<String, Value>,
}

impl Failure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            hints: Map::new(),
        }
    }

    /// Attach a hint field. Values that fail to serialize are dropped.
    pub fn with_hint(mut self, key: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.hints.insert(key.to_string(), v);
            }
            Err(e) => tracing::warn!(hint = key, error = %e, "Dropping unserializable hint"),
        }
        self
    }

    pub fn hint(&self, key: &str) -> Option<&Value> {
        self.hints.get(key)
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    pub fn to_value(&self) -> Value {
        let mut map = self.hints.clone();
        map.insert("error".into(), Value::String(self.message.clone()));
        map.insert("kind".into(), Value::String(self.kind.as_str().into()));
        Value::Object(map)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

impl std::error::Error for Failure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_serializes_flat() {
        let failure = Failure::new(ErrorKind::UnknownLaw, "Unknown law 'hooke'")
            .with_hint("available_laws", vec!["ohms_law", "momentum"]);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["error"], "Unknown law 'hooke'");
        assert_eq!(json["kind"], "unknown_law");
        assert_eq!(json["available_laws"][1], "momentum");
        assert_eq!(json, failure.to_value());
    }

    #[test]
    fn failure_roundtrips_through_json() {
        let failure = Failure::new(ErrorKind::MissingParameters, "Missing required parameters: mass (kg)")
            .with_hint("missing", ["mass"]);
        let json = serde_json::to_string(&failure).unwrap();
        let parsed: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, failure);
    }

    #[test]
    fn partial_match_is_not_fatal() {
        assert!(!ErrorKind::PartialMatch.is_fatal());
        assert!(ErrorKind::DivisionByZero.is_fatal());
    }

    #[test]
    fn kind_string_matches_serde() {
        let kind = ErrorKind::TotalInternalReflection;
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, kind.as_str());
    }
}

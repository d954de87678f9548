//! Unified error types for the templar domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Template not found.
    NotFound,
    /// A required field is missing or empty.
    InvalidInput,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplarError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl TemplarError {
    /// Creates a new `TemplarError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }
}

impl fmt::Display for TemplarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for TemplarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_without_context() {
        let err = TemplarError::new(ErrorKind::NotFound, "template not found");
        assert_eq!(err.to_string(), "[NotFound] template not found");
    }

    #[test]
    fn error_display_with_context() {
        let err = TemplarError::not_found("template not found").with_context("id: invoice");
        assert!(err.to_string().contains("invoice"));
    }

    #[test]
    fn error_serialization_roundtrip() {
        let err = TemplarError::new(ErrorKind::InvalidInput, "name is empty");
        let json = serde_json::to_string(&err).expect("serialize");
        let back: TemplarError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::InvalidInput);
        assert_eq!(back.message, "name is empty");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::NotFound).expect("serialize");
        assert_eq!(json, "\"not_found\"");
    }
}

//! Error types for the fitness calculators

use thiserror::Error;

use crate::validation::get_field_display_label;

/// Input rejected at the calculator boundary, tied to the offending field
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Engine-wide error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },

    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl EngineError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        EngineError::UnknownTag {
            kind,
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Malformed(err.to_string())
    }
}

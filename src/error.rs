//! Custom error types for the stepper
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for stepper operations
#[derive(Error, Debug)]
pub enum StepperError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for form definitions and options
    #[error("Validation error: {0}")]
    Validation(String),

    /// A page index outside `0..page_count`
    #[error("Invalid page index {position}: form has {page_count} page(s)")]
    InvalidPageIndex { position: usize, page_count: usize },

    /// A veto hook failed while deciding on a transition
    #[error("Navigation hook failed: {0}")]
    Hook(String),
}

impl StepperError {
    /// Create an "invalid page index" error
    pub fn invalid_page(position: usize, page_count: usize) -> Self {
        Self::InvalidPageIndex {
            position,
            page_count,
        }
    }

    /// Check if this is an "invalid page index" error
    pub fn is_invalid_page_index(&self) -> bool {
        matches!(self, Self::InvalidPageIndex { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for StepperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StepperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for StepperError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for stepper operations
pub type StepperResult<T> = Result<T, StepperError>;

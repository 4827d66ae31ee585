//! Step metadata handed to renderers
//!
//! One descriptor per page, carrying the optional label and the status used
//! to pick the indicator glyph.

use std::fmt;

use serde::Serialize;

/// Status of a single step relative to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// After the current page
    Upcoming,
    /// The current page
    Active,
    /// Before the current page, no error mode
    Completed,
    /// Before the current page while error mode is on
    Errored,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// Descriptor for one step in the top indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    /// Zero-based page index
    pub index: usize,
    /// Label shown under the step marker
    pub label: Option<String>,
    /// Status relative to the current page
    pub status: StepStatus,
}

impl StepDescriptor {
    /// One-based number shown inside the marker
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(StepStatus::Upcoming.to_string(), "upcoming");
        assert_eq!(StepStatus::Errored.to_string(), "errored");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&StepStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}

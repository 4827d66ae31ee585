//! Construction-time options for a navigator
//!
//! An explicit, immutable value handed to `PageNavigator::new`. Partial
//! overrides (from a form file or the command line) are layered on top with
//! `StepperOverrides::apply`.

use serde::{Deserialize, Serialize};

/// Options recognised at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperOptions {
    /// Page shown first
    pub initial_page: usize,
    /// Start in error mode
    pub error: bool,
    /// Labels for the top indicator, one per page
    pub step_labels: Option<Vec<String>>,
    /// Draw the top step indicator
    pub show_top_stepper: bool,
    /// Draw the bottom navigation bar
    pub show_bottom_stepper: bool,
    /// Title of the back button
    pub back_button_title: String,
    /// Title of the next button
    pub next_button_title: String,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            initial_page: 0,
            error: false,
            step_labels: None,
            show_top_stepper: false,
            show_bottom_stepper: false,
            back_button_title: "Back".to_string(),
            next_button_title: "Next".to_string(),
        }
    }
}

impl StepperOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn with_step_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.step_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_top_stepper(mut self, show: bool) -> Self {
        self.show_top_stepper = show;
        self
    }

    pub fn with_bottom_stepper(mut self, show: bool) -> Self {
        self.show_bottom_stepper = show;
        self
    }

    pub fn with_button_titles(mut self, back: impl Into<String>, next: impl Into<String>) -> Self {
        self.back_button_title = back.into();
        self.next_button_title = next.into();
        self
    }
}

/// A partial set of options; unset fields keep the base value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepperOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_top_stepper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_bottom_stepper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_button_title: Option<String>,
}

impl StepperOverrides {
    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer these overrides on top of `base`
    pub fn apply(&self, mut base: StepperOptions) -> StepperOptions {
        if let Some(page) = self.initial_page {
            base.initial_page = page;
        }
        if let Some(error) = self.error {
            base.error = error;
        }
        if let Some(ref labels) = self.step_labels {
            base.step_labels = Some(labels.clone());
        }
        if let Some(show) = self.show_top_stepper {
            base.show_top_stepper = show;
        }
        if let Some(show) = self.show_bottom_stepper {
            base.show_bottom_stepper = show;
        }
        if let Some(ref title) = self.back_button_title {
            base.back_button_title = title.clone();
        }
        if let Some(ref title) = self.next_button_title {
            base.next_button_title = title.clone();
        }
        base
    }
}

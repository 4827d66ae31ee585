//! Form definition files
//!
//! Loads, validates and writes form definitions, and turns them into a
//! navigator over their pages.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StepperError, StepperResult};
use crate::navigator::{PageNavigator, StepperOptions, StepperOverrides};

use super::acknowledge::Acknowledgements;

/// One page of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title, also the default step label
    pub title: String,
    /// Free text shown in the content area
    #[serde(default)]
    pub body: String,
    /// Require an explicit acknowledgement before moving on
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub acknowledge: bool,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            acknowledge: false,
        }
    }

    /// Mark the page as requiring acknowledgement
    pub fn acknowledged(mut self) -> Self {
        self.acknowledge = true;
        self
    }
}

/// Serialization format of a form file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Yaml,
    Json,
}

impl FormFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> StepperResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(StepperError::Validation(format!(
                "Unsupported form file '{}': expected .yaml, .yml or .json",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for FormFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// A complete form: pages plus option overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Title shown in the frame border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pages in display order
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Display option overrides
    #[serde(default, skip_serializing_if = "StepperOverrides::is_empty")]
    pub options: StepperOverrides,
}

impl FormDefinition {
    /// Load a form from a `.yaml`/`.yml`/`.json` file
    pub fn load(path: impl AsRef<Path>) -> StepperResult<Self> {
        let path = path.as_ref();
        let format = FormFormat::from_path(path)?;

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StepperError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let form = Self::parse(&contents, format)?;
        tracing::info!(path = %path.display(), pages = form.pages.len(), "form loaded");
        Ok(form)
    }

    /// Parse and validate a form from a string
    pub fn parse(contents: &str, format: FormFormat) -> StepperResult<Self> {
        let form: FormDefinition = match format {
            FormFormat::Yaml => serde_yaml::from_str(contents)?,
            FormFormat::Json => serde_json::from_str(contents)?,
        };
        form.validate()?;
        Ok(form)
    }

    /// Serialize the form in the given format
    pub fn dump(&self, format: FormFormat) -> StepperResult<String> {
        Ok(match format {
            FormFormat::Yaml => serde_yaml::to_string(self)?,
            FormFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Write the form to `path`, picking the format from the extension
    pub fn save(&self, path: impl AsRef<Path>) -> StepperResult<()> {
        let path = path.as_ref();
        let contents = self.dump(FormFormat::from_path(path)?)?;
        std::fs::write(path, contents).map_err(|e| {
            StepperError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Check that every page has a title
    pub fn validate(&self) -> StepperResult<()> {
        for (index, page) in self.pages.iter().enumerate() {
            if page.title.trim().is_empty() {
                return Err(StepperError::Validation(format!(
                    "Page {} has an empty title",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// Page titles, used as step labels when none are given
    pub fn page_titles(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.title.clone()).collect()
    }

    /// Resolve the final options: `base`, then this form's overrides
    pub fn resolve_options(&self, base: StepperOptions) -> StepperOptions {
        let mut options = self.options.apply(base);
        if options.step_labels.is_none() {
            options.step_labels = Some(self.page_titles());
        }
        options
    }

    /// Build a navigator over the pages
    ///
    /// Pages marked `acknowledge` get a veto on leaving them forward until
    /// they have been acknowledged through the returned handle.
    pub fn into_navigator(
        self,
        options: StepperOptions,
    ) -> StepperResult<(PageNavigator<Page>, Acknowledgements)> {
        let acks = Acknowledgements::new(self.pages.iter().map(|p| p.acknowledge).collect());
        let navigator =
            PageNavigator::new(self.pages, options)?.with_before_next(acks.veto_hook());
        Ok((navigator, acks))
    }

    /// A small example form
    pub fn sample() -> Self {
        Self {
            title: Some("Getting started".to_string()),
            pages: vec![
                Page::new(
                    "Welcome",
                    "This form walks you through three short pages.\n\
                     Use the arrow keys or h/l to move between them.",
                ),
                Page::new(
                    "Terms",
                    "Moving past this page requires an acknowledgement.\n\
                     Press Space to acknowledge, then continue.",
                )
                .acknowledged(),
                Page::new("Done", "You reached the last page. Press q to quit."),
            ],
            options: StepperOverrides::default(),
        }
    }
}

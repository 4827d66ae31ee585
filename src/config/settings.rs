//! User settings for the stepper
//!
//! Persisted defaults for the stepper's display options and the terminal
//! event loop. A form file or the command line can override any of them.

use serde::{Deserialize, Serialize};

use super::paths::StepperPaths;
use crate::error::StepperError;
use crate::navigator::StepperOptions;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Draw the top step indicator unless a form says otherwise
    #[serde(default = "default_true")]
    pub show_top_stepper: bool,

    /// Draw the bottom navigation bar unless a form says otherwise
    #[serde(default = "default_true")]
    pub show_bottom_stepper: bool,

    /// Default title of the back button
    #[serde(default = "default_back_title")]
    pub back_button_title: String,

    /// Default title of the next button
    #[serde(default = "default_next_title")]
    pub next_button_title: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_back_title() -> String {
    "Back".to_string()
}

fn default_next_title() -> String {
    "Next".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            show_top_stepper: true,
            show_bottom_stepper: true,
            back_button_title: default_back_title(),
            next_button_title: default_next_title(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Base stepper options before any form or command-line overrides
    pub fn stepper_options(&self) -> StepperOptions {
        StepperOptions::new()
            .with_top_stepper(self.show_top_stepper)
            .with_bottom_stepper(self.show_bottom_stepper)
            .with_button_titles(&self.back_button_title, &self.next_button_title)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StepperPaths) -> Result<Self, StepperError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StepperError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StepperError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StepperPaths) -> Result<(), StepperError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StepperError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            StepperError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.show_top_stepper);
        assert!(settings.show_bottom_stepper);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepperPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.show_top_stepper = false;
        settings.next_button_title = "Continue".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.show_top_stepper);
        assert_eq!(loaded.next_button_title, "Continue");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tick_rate_ms": 100}"#).unwrap();
        assert_eq!(settings.tick_rate_ms, 100);
        assert!(settings.show_bottom_stepper);
        assert_eq!(settings.back_button_title, "Back");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepperPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, StepperError::Config(_)));
    }

    #[test]
    fn test_stepper_options_from_settings() {
        let mut settings = Settings::default();
        settings.show_top_stepper = false;
        settings.back_button_title = "Previous".into();

        let options = settings.stepper_options();
        assert!(!options.show_top_stepper);
        assert!(options.show_bottom_stepper);
        assert_eq!(options.back_button_title, "Previous");
        assert_eq!(options.initial_page, 0);
    }
}

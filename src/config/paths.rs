//! Path management for the stepper
//!
//! ## Path Resolution Order
//!
//! 1. `STEPPER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/stepper` on Linux, `~/Library/Application Support/stepper`
//!    on macOS, `%APPDATA%\stepper\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StepperError;

/// Environment variable overriding the base directory
pub const CONFIG_DIR_ENV: &str = "STEPPER_CONFIG_DIR";

/// Manages all paths used by the stepper
#[derive(Debug, Clone)]
pub struct StepperPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl StepperPaths {
    /// Create a new StepperPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, StepperError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StepperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), StepperError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StepperError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| StepperError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, StepperError> {
    ProjectDirs::from("", "", "stepper")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StepperError::Config("Could not determine home directory".into()))
}

//! Configuration module for the stepper
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Default stepper options derived from those settings

pub mod paths;
pub mod settings;

pub use paths::StepperPaths;
pub use settings::Settings;

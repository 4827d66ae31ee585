//! stepper - paginated forms in the terminal
//!
//! This library provides a page navigator for multi-page forms: a single
//! current page index, bounds-checked back/next transitions that external
//! hooks may veto, an error mode that blocks forward progress, and a
//! renderer seam that is told about every state change. A ratatui front
//! end draws the step indicator, page content and navigation bar.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `navigator`: The page navigation state machine and renderer trait
//! - `form`: Form definitions loaded from YAML or JSON
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `display`: Plain-text tables for the CLI
//! - `cli`: Command handlers
//! - `tui`: The interactive terminal stepper
//!
//! # Example
//!
//! ```rust,ignore
//! use stepper::navigator::{PageNavigator, StepperOptions};
//!
//! let mut nav = PageNavigator::new(vec!["a", "b", "c"], StepperOptions::default())?;
//! nav.go_next()?;
//! assert_eq!(nav.current_page(), Some(1));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod navigator;
pub mod tui;

pub use error::StepperError;

//! Display formatting for terminal output
//!
//! Formats navigator state for the non-interactive `inspect` command.

pub mod steps;

pub use steps::{format_navigation_summary, format_step_table};

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with form loading and the navigator.

pub mod args;
pub mod inspect;
pub mod new;
pub mod run;

pub use args::{load_form_navigator, DisplayArgs, LoadedForm};
pub use inspect::{handle_inspect_command, InspectArgs};
pub use new::{handle_new_command, NewArgs};
pub use run::{handle_run_command, RunArgs};

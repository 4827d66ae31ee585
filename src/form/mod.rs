//! Form definitions
//!
//! A form is the file the CLI feeds into the stepper: an ordered list of
//! pages plus optional display options, written in YAML or JSON.

pub mod acknowledge;
pub mod definition;

pub use acknowledge::Acknowledgements;
pub use definition::{FormDefinition, FormFormat, Page};

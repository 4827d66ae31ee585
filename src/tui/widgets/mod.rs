//! Reusable widgets for the TUI
//!
//! Contains the stepper widget and toast notifications

pub mod stepper;
pub mod toast;

pub use stepper::{progress_dots, step_marker, StepperWidget};
pub use toast::{toast_area, Toast, ToastKind, ToastQueue};

//! Page navigation state machine
//!
//! This module provides the behavioral core of the stepper:
//! - `NavigatorState`: the current page and the flags derived from it
//! - `PageNavigator`: bounds-checked, hook-gated back/next transitions
//! - `Renderer`: the seam through which every state change is published

pub mod options;
pub mod page_navigator;
pub mod renderer;
pub mod state;
pub mod step;

pub use options::{StepperOptions, StepperOverrides};
pub use page_navigator::{Direction, PageNavigator, Transition, VetoHook};
pub use renderer::{RenderFrame, Renderer, TracingRenderer};
pub use state::NavigatorState;
pub use step::{StepDescriptor, StepStatus};

//! Terminal User Interface module
//!
//! This module draws the stepper with ratatui: the step indicator, the
//! current page and the back/next bar, plus a help overlay and toasts.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;

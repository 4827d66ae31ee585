//! Application state for the TUI
//!
//! The App struct holds the navigator and the view state around it
//! (scroll offset, help overlay, toasts).

use crate::error::StepperError;
use crate::form::{Acknowledgements, Page};
use crate::navigator::{PageNavigator, Transition};

use super::widgets::{Toast, ToastQueue};

/// Main application state
pub struct App {
    /// The page navigator
    pub navigator: PageNavigator<Page>,

    /// Acknowledgements recorded for pages that need them
    pub acks: Acknowledgements,

    /// Form title shown in the content border
    pub title: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Scroll offset of the content pane
    pub scroll_offset: u16,

    /// Pending toast notifications
    pub toasts: ToastQueue,
}

impl App {
    /// Create a new App instance
    pub fn new(
        navigator: PageNavigator<Page>,
        acks: Acknowledgements,
        title: Option<String>,
    ) -> Self {
        Self {
            navigator,
            acks,
            title,
            should_quit: false,
            show_help: false,
            scroll_offset: 0,
            toasts: ToastQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Go to the next page, explaining in a toast if that is not possible
    pub fn next_page(&mut self) {
        let result = self.navigator.go_next();
        self.after_transition(result);
    }

    /// Go to the previous page
    pub fn previous_page(&mut self) {
        let result = self.navigator.go_back();
        self.after_transition(result);
    }

    fn after_transition(&mut self, result: Result<Transition, StepperError>) {
        match result {
            Ok(Transition::Moved { .. }) => {
                self.scroll_offset = 0;
            }
            Ok(Transition::Vetoed) => {
                self.toasts.push(Toast::warning(
                    "Acknowledge this page (Space) before continuing",
                ));
            }
            Ok(Transition::Blocked) => {
                if self.navigator.is_error() && !self.navigator.state().is_last_page() {
                    self.toasts
                        .push(Toast::warning("Error mode is on; forward navigation is disabled"));
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "navigation failed");
                self.toasts.push(Toast::error(e.to_string()));
            }
        }
    }

    /// Toggle the acknowledgement of the current page
    pub fn toggle_acknowledgement(&mut self) {
        let Some(page) = self.navigator.current_page() else {
            return;
        };
        if !self.acks.is_required(page) {
            self.toasts
                .push(Toast::info("This page does not need acknowledging"));
            return;
        }
        let acknowledged = self.acks.toggle(page);
        tracing::debug!(page, acknowledged, "acknowledgement toggled");
    }

    /// Flip error mode
    pub fn toggle_error(&mut self) {
        let error = !self.navigator.is_error();
        self.navigator.set_error(error);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Drop toasts whose time is up
    pub fn tick(&mut self) {
        self.toasts.remove_expired();
    }
}

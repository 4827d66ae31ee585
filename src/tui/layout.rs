//! Layout definitions for the TUI
//!
//! Splits the screen into the optional step indicator, the content pane
//! and the optional navigation bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the step indicator (markers, labels, separator)
pub const TOP_STEPPER_HEIGHT: u16 = 3;

/// Height of the navigation bar (separator, buttons, padding)
pub const BOTTOM_STEPPER_HEIGHT: u16 = 3;

/// Layout regions for the stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperLayout {
    /// Step indicator, if shown
    pub top: Option<Rect>,
    /// Current page
    pub content: Rect,
    /// Back/next bar, if shown
    pub bottom: Option<Rect>,
}

impl StepperLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, show_top: bool, show_bottom: bool) -> Self {
        let mut constraints = Vec::with_capacity(3);
        if show_top {
            constraints.push(Constraint::Length(TOP_STEPPER_HEIGHT));
        }
        constraints.push(Constraint::Min(3));
        if show_bottom {
            constraints.push(Constraint::Length(BOTTOM_STEPPER_HEIGHT));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut chunks = chunks.iter().copied();
        let top = if show_top { chunks.next() } else { None };
        let content = chunks.next().unwrap_or(area);
        let bottom = if show_bottom { chunks.next() } else { None };

        Self {
            top,
            content,
            bottom,
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

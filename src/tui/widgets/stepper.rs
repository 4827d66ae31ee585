//! Stepper widget
//!
//! Draws one `RenderFrame`: the step indicator at the top, the current page
//! in the middle and the back/dots/next bar at the bottom. The top and
//! bottom regions are only drawn when the frame asks for them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::form::{Acknowledgements, Page};
use crate::navigator::{RenderFrame, StepDescriptor, StepStatus};
use crate::tui::layout::StepperLayout;

const ACTIVE_COLOR: Color = Color::Yellow;
const INACTIVE_COLOR: Color = Color::DarkGray;
const COMPLETED_COLOR: Color = Color::Green;
const ERRORED_COLOR: Color = Color::Red;

/// Glyph shown inside a step marker
pub fn step_marker(step: &StepDescriptor) -> String {
    match step.status {
        StepStatus::Completed => "✓".to_string(),
        StepStatus::Errored => "✗".to_string(),
        StepStatus::Active | StepStatus::Upcoming => step.number().to_string(),
    }
}

/// Style for a step marker
fn marker_style(status: StepStatus) -> Style {
    match status {
        StepStatus::Active => Style::default()
            .fg(ACTIVE_COLOR)
            .add_modifier(Modifier::BOLD),
        StepStatus::Completed => Style::default().fg(COMPLETED_COLOR),
        StepStatus::Errored => Style::default()
            .fg(ERRORED_COLOR)
            .add_modifier(Modifier::BOLD),
        StepStatus::Upcoming => Style::default().fg(INACTIVE_COLOR),
    }
}

/// Text of the progress dots, `●` for the current page
pub fn progress_dots(current: Option<usize>, count: usize) -> String {
    (0..count)
        .map(|index| if Some(index) == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Widget rendering a stepper frame over form pages
pub struct StepperWidget<'a> {
    frame: &'a RenderFrame<'a, Page>,
    title: Option<&'a str>,
    acks: Option<&'a Acknowledgements>,
    scroll: u16,
}

impl<'a> StepperWidget<'a> {
    /// Create a new stepper widget
    pub fn new(frame: &'a RenderFrame<'a, Page>) -> Self {
        Self {
            frame,
            title: None,
            acks: None,
            scroll: 0,
        }
    }

    /// Title drawn in the content border
    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    /// Show acknowledgement state for pages that need it
    pub fn acknowledgements(mut self, acks: &'a Acknowledgements) -> Self {
        self.acks = Some(acks);
        self
    }

    /// Vertical scroll offset of the content
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn render_steps(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(INACTIVE_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        let steps = &self.frame.steps;
        if steps.is_empty() {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, steps.len() as u32); steps.len()])
            .split(inner);

        for (step, column) in steps.iter().zip(columns.iter()) {
            let style = marker_style(step.status);
            let label_style = if step.status == StepStatus::Active {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(INACTIVE_COLOR)
            };

            let lines = vec![
                Line::from(Span::styled(format!("({})", step_marker(step)), style)),
                Line::from(Span::styled(
                    step.label.clone().unwrap_or_default(),
                    label_style,
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }

        let Some(page) = self.frame.content else {
            Paragraph::new(Line::from(Span::styled(
                "Nothing to show",
                Style::default().fg(INACTIVE_COLOR),
            )))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                page.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(page.body.lines().map(|l| Line::from(l.to_string())));

        if let (Some(acks), Some(index)) = (self.acks, self.frame.current_page()) {
            if acks.is_required(index) {
                lines.push(Line::from(""));
                lines.push(if acks.is_acknowledged(index) {
                    Line::from(Span::styled(
                        "[x] Acknowledged",
                        Style::default().fg(COMPLETED_COLOR),
                    ))
                } else {
                    Line::from(Span::styled(
                        "[ ] Press Space to acknowledge",
                        Style::default().fg(ACTIVE_COLOR),
                    ))
                });
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    fn render_bottom(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(INACTIVE_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        let options = self.frame.options;
        let back = format!("‹ {}", options.back_button_title);
        let next = format!("{} ›", options.next_button_title);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(back.chars().count() as u16 + 1),
                Constraint::Min(1),
                Constraint::Length(next.chars().count() as u16 + 1),
            ])
            .split(inner);

        let button_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        if self.frame.show_back() {
            Paragraph::new(Span::styled(back, button_style)).render(columns[0], buf);
        }

        let dots = progress_dots(self.frame.current_page(), self.frame.page_count());
        Paragraph::new(Span::styled(dots, Style::default().fg(ACTIVE_COLOR)))
            .alignment(Alignment::Center)
            .render(columns[1], buf);

        if self.frame.show_next() {
            Paragraph::new(Span::styled(next, button_style))
                .alignment(Alignment::Right)
                .render(columns[2], buf);
        }
    }
}

impl<'a> Widget for StepperWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = StepperLayout::new(
            area,
            self.frame.show_top_stepper(),
            self.frame.show_bottom_stepper(),
        );

        if let Some(top) = layout.top {
            self.render_steps(top, buf);
        }
        self.render_content(layout.content, buf);
        if let Some(bottom) = layout.bottom {
            self.render_bottom(bottom, buf);
        }
    }
}

//! Toast notifications
//!
//! Short-lived messages shown in the corner of the screen, used to explain
//! why a transition did not happen.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A single toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    ttl: Duration,
}

impl Toast {
    /// Default time a toast stays on screen
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: Self::DEFAULT_TTL,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

impl Widget for &Toast {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast, dropping an identical message already waiting
    pub fn push(&mut self, toast: Toast) {
        self.toasts
            .retain(|t| !(t.kind == toast.kind && t.message == toast.message));
        self.toasts.push(toast);
    }

    pub fn remove_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// The toast to display now
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

/// Area for a toast in the top-right corner of `area`
pub fn toast_area(area: Rect) -> Rect {
    let width = area.width.min(40);
    let height = area.height.min(4);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_kinds() {
        assert_eq!(ToastKind::Info.color(), Color::Blue);
        assert_eq!(ToastKind::Warning.color(), Color::Yellow);
        assert_eq!(ToastKind::Error.color(), Color::Red);
        assert_eq!(Toast::warning("x").kind, ToastKind::Warning);
    }

    #[test]
    fn test_queue_order_and_dedup() {
        let mut queue = ToastQueue::new();
        assert!(queue.is_empty());

        queue.push(Toast::info("First"));
        queue.push(Toast::warning("Second"));
        queue.push(Toast::info("First"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "Second");
    }

    #[test]
    fn test_expiry() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::info("gone").with_ttl(Duration::ZERO));
        queue.push(Toast::info("stays"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "stays");
    }

    #[test]
    fn test_toast_area_fits() {
        let area = Rect::new(0, 0, 30, 10);
        let toast = toast_area(area);
        assert_eq!(toast.width, 30);
        assert_eq!(toast.x, 0);

        let wide = toast_area(Rect::new(0, 0, 100, 30));
        assert_eq!(wide, Rect::new(60, 0, 40, 4));
    }
}

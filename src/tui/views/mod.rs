//! TUI views
//!
//! Composes the stepper widget with the overlays drawn on top of it.

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::widgets::{toast_area, StepperWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let stepper_frame = app.navigator.frame();
    let widget = StepperWidget::new(&stepper_frame)
        .title(app.title.as_deref())
        .acknowledgements(&app.acks)
        .scroll(app.scroll_offset);
    frame.render_widget(widget, area);

    if let Some(toast) = app.toasts.current() {
        frame.render_widget(toast, toast_area(area));
    }

    if app.show_help {
        dialogs::help::render(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDefinition;
    use crate::navigator::StepperOptions;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let form = FormDefinition::sample();
        let title = form.title.clone();
        let options = form.resolve_options(
            StepperOptions::new()
                .with_top_stepper(true)
                .with_bottom_stepper(true),
        );
        let (navigator, acks) = form.into_navigator(options).unwrap();
        App::new(navigator, acks, title)
    }

    #[test]
    fn test_renders_first_page() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Getting started"));
        assert!(text.contains("Welcome"));
        assert!(text.contains("Next ›"));
        assert!(!text.contains("‹ Back"));
    }

    #[test]
    fn test_renders_toast_and_help() {
        let mut app = app();
        app.next_page();
        app.next_page();
        app.toggle_help();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Warning"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Toggle error mode"));
    }
}

//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the stepper until the user quits
pub fn run_tui(app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut terminal = init_terminal()?;
    tracing::info!(pages = app.navigator.page_count(), "terminal stepper started");

    let result = event_loop(&mut terminal, app, tick_rate);

    // Restore even if the loop failed
    restore_terminal()?;
    tracing::info!(
        last_page = ?app.navigator.current_page(),
        "terminal stepper stopped"
    );

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| views::render(frame, app))?;

        let event = events.next().context("terminal event stream closed")?;
        handle_event(app, event)?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

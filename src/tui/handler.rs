//! Event handler for the TUI
//!
//! Routes terminal events to the app through the keybinding table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::App;
use super::event::Event;
use super::keybindings::{action_for, Action};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well as presses
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let action = action_for(&key);

    // While help is open any key closes it; only q and Ctrl+C still quit
    if app.show_help {
        if action == Some(Action::Quit) && key.code != KeyCode::Esc {
            app.quit();
        } else {
            app.toggle_help();
        }
        return Ok(());
    }

    let Some(action) = action else {
        return Ok(());
    };

    match action {
        Action::Next => app.next_page(),
        Action::Back => app.previous_page(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollDown => app.scroll_down(),
        Action::Acknowledge => app.toggle_acknowledgement(),
        Action::ToggleError => app.toggle_error(),
        Action::Help => app.toggle_help(),
        Action::Quit => app.quit(),
    }

    Ok(())
}

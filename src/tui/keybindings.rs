//! Keybinding definitions
//!
//! The key table drives both the event handler's dispatch and the help
//! overlay, so the two cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Back,
    ScrollUp,
    ScrollDown,
    Acknowledge,
    ToggleError,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Action triggered
    pub action: Action,
}

const fn bind(key: KeyCode, description: &'static str, action: Action) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        description,
        action,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    bind(KeyCode::Right, "Next page", Action::Next),
    bind(KeyCode::Char('l'), "Next page", Action::Next),
    bind(KeyCode::Char('n'), "Next page", Action::Next),
    bind(KeyCode::Enter, "Next page", Action::Next),
    bind(KeyCode::Left, "Previous page", Action::Back),
    bind(KeyCode::Char('h'), "Previous page", Action::Back),
    bind(KeyCode::Char('p'), "Previous page", Action::Back),
    bind(KeyCode::Backspace, "Previous page", Action::Back),
    bind(KeyCode::Up, "Scroll up", Action::ScrollUp),
    bind(KeyCode::Char('k'), "Scroll up", Action::ScrollUp),
    bind(KeyCode::Down, "Scroll down", Action::ScrollDown),
    bind(KeyCode::Char('j'), "Scroll down", Action::ScrollDown),
    bind(KeyCode::Char(' '), "Acknowledge page", Action::Acknowledge),
    bind(KeyCode::Char('e'), "Toggle error mode", Action::ToggleError),
    bind(KeyCode::Char('?'), "Help", Action::Help),
    bind(KeyCode::Char('q'), "Quit", Action::Quit),
    bind(KeyCode::Esc, "Quit", Action::Quit),
];

/// Look up the action bound to a key event
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    // Shifted characters arrive with SHIFT set; match on the character alone
    let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
    KEYBINDINGS
        .iter()
        .find(|kb| kb.key == key.code && kb.modifiers == modifiers)
        .map(|kb| kb.action)
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    }
}

/// Keys grouped by description, in table order: `("→/l/n/Enter", "Next page")`
pub fn help_entries() -> Vec<(String, &'static str)> {
    let mut entries: Vec<(String, &'static str)> = Vec::new();
    for kb in KEYBINDINGS {
        let key = format_keybinding(kb);
        match entries.iter_mut().find(|(_, desc)| *desc == kb.description) {
            Some((keys, _)) => {
                keys.push('/');
                keys.push_str(&key);
            }
            None => entries.push((key, kb.description)),
        }
    }
    entries
}

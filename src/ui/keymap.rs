//! Key translation for the terminal front end and key scripts
//!
//! Maps input to AppEvent:
//! - the configured quit / clear / copy / undo characters → app events
//! - Enter or newline → `=`
//! - Backspace / Delete → Undo, Esc → Clear, Ctrl-C → Quit
//! - anything else → calculator input (the session decides what it means)

use crate::app::AppEvent;
use crate::config::KeyBindings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a single character, as typed or read from a key script
pub fn char_to_app_event(c: char, keys: &KeyBindings) -> AppEvent {
    if c == keys.quit {
        AppEvent::Quit
    } else if c == keys.clear {
        AppEvent::Clear
    } else if c == keys.copy {
        AppEvent::Copy
    } else if c == keys.undo {
        AppEvent::Undo
    } else if c == '\n' || c == '\r' {
        AppEvent::Input('=')
    } else if c.is_whitespace() {
        AppEvent::None
    } else {
        AppEvent::Input(c)
    }
}

/// Translate a terminal key event
pub fn key_to_app_event(key: KeyEvent, keys: &KeyBindings) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
        KeyCode::Char(c) => char_to_app_event(c, keys),
        KeyCode::Enter => AppEvent::Input('='),
        KeyCode::Backspace | KeyCode::Delete => AppEvent::Undo,
        KeyCode::Esc => AppEvent::Clear,
        _ => AppEvent::None,
    }
}

/// One-line summary of the keys for the help bar
pub fn key_help(keys: &KeyBindings) -> String {
    format!(
        "{} quit · {}/Esc clear · {} copy · ⌫/{} undo · Enter =",
        keys.quit, keys.clear, keys.copy, keys.undo
    )
}

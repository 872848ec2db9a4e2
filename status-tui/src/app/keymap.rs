//! Keybindings
//!
//! Maps a key press to the action it triggers in the current state. Keys
//! that map to nothing are text input for the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Direction};
use super::state::AppState;

/// Action bound to `key`, or `None` when the key is text input
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Some(Action::Quit),

        (KeyCode::F(1), _) => {
            return Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            });
        }

        (KeyCode::Char('c'), m) if is_copy_modifier(m) => {
            return state.can_copy().then_some(Action::CopyRequested);
        }
        (KeyCode::F(5), _) => return state.can_copy().then_some(Action::CopyRequested),

        (KeyCode::Esc, _) if state.error.is_some() => return Some(Action::DismissError),
        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),
        (KeyCode::Esc, _) if state.drag.is_some() => {
            return Some(Action::DragEnd { destination: None });
        }

        _ => {}
    }

    // Overlays swallow everything else
    if state.help_visible || state.error.is_some() {
        return None;
    }

    if let Some(drag) = state.drag {
        return match key.code {
            KeyCode::Up => Some(Action::DragMove(Direction::Up)),
            KeyCode::Down => Some(Action::DragMove(Direction::Down)),
            KeyCode::Enter => Some(Action::DragEnd {
                destination: Some(drag.target),
            }),
            _ => None,
        };
    }

    map_editor_key(state, key)
}

/// Bindings while editing fields
fn map_editor_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => Some(Action::FocusNext),
        (KeyCode::BackTab, _) => Some(Action::FocusPrev),
        (KeyCode::Enter, KeyModifiers::NONE) if !state.focus.is_multiline() => {
            Some(Action::FocusNext)
        }

        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Some(Action::AddRequested),

        (KeyCode::Char('d'), KeyModifiers::CONTROL) if state.focus.entry_index().is_some() => {
            Some(Action::DeleteFocused)
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) if state.focus.entry_index().is_some() => {
            Some(Action::RerollRequested)
        }
        (KeyCode::Char('g'), KeyModifiers::CONTROL) if state.focus.entry_index().is_some() => {
            Some(Action::DragStart)
        }

        (KeyCode::Up, KeyModifiers::ALT) => Some(Action::MoveFocused(Direction::Up)),
        (KeyCode::Down, KeyModifiers::ALT) => Some(Action::MoveFocused(Direction::Down)),

        _ => None,
    }
}

/// Meta or control, as used by the copy shortcut
fn is_copy_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

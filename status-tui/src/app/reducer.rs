//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`
//!
//! The reducer has NO side effects - it only computes new state values.
//! Emoji picks, cues and clipboard writes happen in the event loop, which
//! feeds their outcome back in as follow-up actions.

use super::actions::{Action, Direction};
use super::keymap::map_key;
use super::state::{AppState, CopiedIndicator, DragState, Focus, StatusBarState};
use libstatusmaker::{EntryField, StatusError};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No clipboard or terminal I/O
/// - No randomness (emoji arrive inside actions)
/// - No clock reads (instants arrive inside actions)
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },

        Action::Tick(now) => {
            let copied = state.copied.tick(now);
            let expired = state.copied.is_visible() && !copied.is_visible();
            let state = AppState { copied, ..state };
            if expired {
                reduce(state, Action::ClearStatus)
            } else {
                state
            }
        }

        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => AppState {
            focus: state.focus.next(state.board.len()),
            ..state
        },

        Action::FocusPrev => AppState {
            focus: state.focus.previous(state.board.len()),
            ..state
        },

        // === Status List ===
        Action::FieldChanged(value) => {
            let state = apply_edit(state, value);
            if state.status.message.is_some() {
                reduce(state, Action::ClearStatus)
            } else {
                state
            }
        }

        Action::AddRequested => {
            // Emoji pick and pop cue happen outside the reducer,
            // the new entry arrives as EntryAdded
            state
        }

        Action::EntryAdded { emoji } => {
            let board = state.board.add(emoji);
            let focus = Focus::Entry {
                index: board.len() - 1,
                field: EntryField::Title,
            };
            AppState {
                board,
                focus,
                ..state
            }
        }

        Action::DeleteFocused => delete_focused(state),

        Action::MoveFocused(direction) => move_focused(state, direction),

        Action::RerollRequested => state,

        Action::EmojiRerolled { emoji } => match state.focus {
            Focus::Entry { index, .. } => match state.board.update(index, EntryField::Emoji, emoji) {
                Ok(board) => AppState { board, ..state },
                Err(e) => show_error(state, e),
            },
            Focus::Headline => state,
        },

        // === Drag and drop ===
        Action::DragStart => match state.focus.entry_index() {
            Some(index) => AppState {
                drag: Some(DragState {
                    source: index,
                    target: index,
                }),
                ..state
            },
            None => state,
        },

        Action::DragMove(direction) => match state.drag {
            Some(drag) => {
                let target = step(drag.target, direction, state.board.len()).unwrap_or(drag.target);
                AppState {
                    drag: Some(DragState { target, ..drag }),
                    ..state
                }
            }
            None => state,
        },

        Action::DragEnd { destination } => finish_drag(state, destination),

        // === Clipboard ===
        Action::CopyRequested => {
            // Clipboard write is handled outside reducer
            state
        }

        Action::CopyStarted => AppState {
            copying: true,
            status: StatusBarState {
                message: Some("Copying...".to_string()),
            },
            ..state
        },

        Action::CopySucceeded { provider, at } => AppState {
            copying: false,
            copied: CopiedIndicator::show(at),
            status: StatusBarState {
                message: Some(format!("Copied to clipboard ({})", provider)),
            },
            ..state
        },

        Action::CopyFailed { error } => AppState {
            copying: false,
            status: StatusBarState {
                message: Some(format!("Copy failed: {}", error)),
            },
            ..state
        },

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Write the edited text into the focused field
fn apply_edit(state: AppState, value: String) -> AppState {
    match state.focus {
        Focus::Headline => AppState {
            board: state.board.set_headline(value),
            ..state
        },
        Focus::Entry { index, field } => match state.board.update(index, field, value) {
            Ok(board) => AppState { board, ..state },
            Err(e) => show_error(state, e),
        },
    }
}

fn delete_focused(state: AppState) -> AppState {
    let Some(index) = state.focus.entry_index() else {
        return state;
    };

    if state.board.len() <= 1 {
        return AppState {
            status: StatusBarState {
                message: Some("A status needs at least one entry".to_string()),
            },
            ..state
        };
    }

    let board = state.board.delete(index);
    let focus = state.focus.clamp(board.len());
    AppState {
        board,
        focus,
        ..state
    }
}

fn move_focused(state: AppState, direction: Direction) -> AppState {
    let Focus::Entry { index, field } = state.focus else {
        return state;
    };
    let Some(destination) = step(index, direction, state.board.len()) else {
        return state;
    };

    match state.board.reorder(index, destination) {
        Ok(board) => AppState {
            board,
            focus: Focus::Entry {
                index: destination,
                field,
            },
            ..state
        },
        Err(e) => show_error(state, e),
    }
}

fn finish_drag(state: AppState, destination: Option<usize>) -> AppState {
    let Some(drag) = state.drag else {
        return state;
    };

    match state.board.drop_entry(drag.source, destination) {
        Ok(board) => {
            let focus = match (destination, state.focus) {
                (Some(index), Focus::Entry { field, .. }) => Focus::Entry { index, field },
                (_, focus) => focus,
            };
            AppState {
                board,
                focus,
                drag: None,
                ..state
            }
        }
        Err(e) => show_error(AppState { drag: None, ..state }, e),
    }
}

/// Neighbouring index in `direction`, if it exists
fn step(index: usize, direction: Direction, len: usize) -> Option<usize> {
    match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|&next| next < len),
    }
}

fn show_error(state: AppState, error: StatusError) -> AppState {
    tracing::warn!("Rejected status edit: {}", error);
    reduce(state, Action::ShowError(error.to_string()))
}

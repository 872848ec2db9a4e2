//! Reducer flows over the status list
//!
//! Adds, deletes, moves, drags and copies driven through actions the way the
//! event loop sends them.

use std::time::{Duration, Instant};

use libstatusmaker::{EntryField, StatusBoard, StatusEntry};
use status_tui::app::{reduce, Action, AppState, Direction, Focus};

fn titled(titles: &[&str]) -> AppState {
    let entries = titles
        .iter()
        .map(|title| StatusEntry::new("🚀").with(EntryField::Title, *title))
        .collect();
    AppState::new(StatusBoard::from_parts("Weekly", entries).unwrap())
}

fn titles(state: &AppState) -> Vec<String> {
    state.board.entries.iter().map(|e| e.title.clone()).collect()
}

fn focus_entry(state: AppState, index: usize) -> AppState {
    AppState {
        focus: Focus::Entry {
            index,
            field: EntryField::Title,
        },
        ..state
    }
}

#[test]
fn test_add_then_delete_restores_list() {
    let before = titled(&["First", "Second"]);
    let original = before.board.clone();

    let added = reduce(before, Action::EntryAdded {
        emoji: "🎉".to_string(),
    });
    assert_eq!(added.board.len(), 3);
    assert_eq!(added.board.entry(2).unwrap().emoji, "🎉");
    assert_eq!(
        added.focus,
        Focus::Entry {
            index: 2,
            field: EntryField::Title
        }
    );

    let deleted = reduce(added, Action::DeleteFocused);
    assert_eq!(deleted.board, original);
}

#[test]
fn test_last_entry_cannot_be_deleted() {
    let state = titled(&["Only"]);

    let state = reduce(state, Action::DeleteFocused);

    assert_eq!(state.board.len(), 1);
    assert_eq!(titles(&state), vec!["Only"]);
    assert_eq!(
        state.status.message.as_deref(),
        Some("A status needs at least one entry")
    );
}

#[test]
fn test_delete_keeps_focus_in_range() {
    let state = focus_entry(titled(&["a", "b", "c"]), 2);

    let state = reduce(state, Action::DeleteFocused);

    assert_eq!(titles(&state), vec!["a", "b"]);
    assert_eq!(state.focus.entry_index(), Some(1));
}

#[test]
fn test_list_never_empties() {
    let mut state = titled(&["a", "b", "c"]);
    for _ in 0..10 {
        state = reduce(state, Action::DeleteFocused);
        assert!(state.board.len() >= 1);
    }
    assert_eq!(state.board.len(), 1);
}

#[test]
fn test_move_focused_entry_follows_focus() {
    let state = titled(&["a", "b", "c"]);

    let state = reduce(state, Action::MoveFocused(Direction::Down));
    assert_eq!(titles(&state), vec!["b", "a", "c"]);
    assert_eq!(state.focus.entry_index(), Some(1));

    let state = reduce(state, Action::MoveFocused(Direction::Down));
    assert_eq!(titles(&state), vec!["b", "c", "a"]);

    // Already at the bottom
    let state = reduce(state, Action::MoveFocused(Direction::Down));
    assert_eq!(titles(&state), vec!["b", "c", "a"]);
    assert!(state.error.is_none());
}

#[test]
fn test_drag_and_drop_reorders() {
    let state = titled(&["a", "b", "c"]);

    let state = reduce(state, Action::DragStart);
    let state = reduce(state, Action::DragMove(Direction::Down));
    let state = reduce(state, Action::DragMove(Direction::Down));
    let target = state.drag.unwrap().target;
    assert_eq!(target, 2);

    // Nothing moves until the drop
    assert_eq!(titles(&state), vec!["a", "b", "c"]);

    let state = reduce(state, Action::DragEnd {
        destination: Some(target),
    });
    assert_eq!(titles(&state), vec!["b", "c", "a"]);
    assert!(state.drag.is_none());
    assert_eq!(state.focus.entry_index(), Some(2));
}

#[test]
fn test_drag_target_stays_in_bounds() {
    let state = titled(&["a", "b"]);

    let state = reduce(state, Action::DragStart);
    let state = reduce(state, Action::DragMove(Direction::Up));
    assert_eq!(state.drag.unwrap().target, 0);

    let state = reduce(state, Action::DragMove(Direction::Down));
    let state = reduce(state, Action::DragMove(Direction::Down));
    assert_eq!(state.drag.unwrap().target, 1);
}

#[test]
fn test_abandoned_drag_leaves_list_unchanged() {
    let state = titled(&["a", "b", "c"]);
    let original = state.board.clone();

    let state = reduce(state, Action::DragStart);
    let state = reduce(state, Action::DragMove(Direction::Down));
    let state = reduce(state, Action::DragEnd { destination: None });

    assert_eq!(state.board, original);
    assert!(state.drag.is_none());
    assert!(state.accepts_text());
}

#[test]
fn test_reroll_replaces_focused_emoji() {
    let state = focus_entry(titled(&["a", "b"]), 1);

    let state = reduce(state, Action::EmojiRerolled {
        emoji: "🦄".to_string(),
    });

    assert_eq!(state.board.entry(0).unwrap().emoji, "🚀");
    assert_eq!(state.board.entry(1).unwrap().emoji, "🦄");
}

#[test]
fn test_edits_flow_into_preview() {
    let state = titled(&["Shipped"]);
    let state = reduce(state, Action::FocusNext);
    let state = reduce(state, Action::FieldChanged("Done early".to_string()));

    assert_eq!(state.result(), "*Weekly*\n\n*🚀 Shipped*\nDone early");
}

#[test]
fn test_copy_failure_reports_and_allows_retry() {
    let state = reduce(titled(&["a"]), Action::CopyStarted);
    assert!(!state.can_copy());

    let state = reduce(state, Action::CopyFailed {
        error: "xclip exited with status 1".to_string(),
    });

    assert!(state.can_copy());
    assert!(!state.copied.is_visible());
    assert_eq!(
        state.status.message.as_deref(),
        Some("Copy failed: xclip exited with status 1")
    );
}

#[test]
fn test_second_copy_extends_indicator() {
    let start = Instant::now();
    let state = reduce(titled(&["a"]), Action::CopySucceeded {
        provider: "memory".to_string(),
        at: start,
    });
    let state = reduce(state, Action::CopySucceeded {
        provider: "memory".to_string(),
        at: start + Duration::from_secs(2),
    });

    let state = reduce(state, Action::Tick(start + Duration::from_millis(4000)));
    assert!(state.copied.is_visible());

    let state = reduce(state, Action::Tick(start + Duration::from_millis(5000)));
    assert!(!state.copied.is_visible());
}

#[test]
fn test_copied_indicator_does_not_block_editing() {
    let state = reduce(titled(&["a"]), Action::CopySucceeded {
        provider: "memory".to_string(),
        at: Instant::now(),
    });

    assert!(state.accepts_text());
    let state = reduce(state, Action::FieldChanged("b".to_string()));
    assert_eq!(titles(&state), vec!["b"]);
}

//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions that need a side
//! effect first (picking an emoji, writing the clipboard) come in pairs: a
//! `*Requested` action the event loop acts on, and a follow-up carrying the
//! outcome back into the reducer.

use std::time::Instant;

use crossterm::event::KeyEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick; carries the time so the reducer stays pure
    Tick(Instant),

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move focus to the next editable field
    FocusNext,

    /// Move focus to the previous editable field
    FocusPrev,

    // === Status List ===
    /// Focused field was edited
    FieldChanged(String),

    /// User asked for a new entry; the event loop picks the emoji
    AddRequested,

    /// New entry appended with the chosen emoji
    EntryAdded { emoji: String },

    /// Delete the focused entry (refused for the last one)
    DeleteFocused,

    /// Move the focused entry one slot
    MoveFocused(Direction),

    /// User asked for a different emoji on the focused entry
    RerollRequested,

    /// Focused entry's emoji replaced
    EmojiRerolled { emoji: String },

    // === Drag and drop ===
    /// Pick up the focused entry
    DragStart,

    /// Move the drop target
    DragMove(Direction),

    /// Release the entry; `None` abandons the drag
    DragEnd { destination: Option<usize> },

    // === Clipboard ===
    /// User asked to copy the formatted status
    CopyRequested,

    /// Clipboard write handed off
    CopyStarted,

    /// Clipboard accepted the text at `at`
    CopySucceeded { provider: String, at: Instant },

    /// Clipboard rejected the text
    CopyFailed { error: String },

    // === Error Handling ===
    /// Show error overlay for a rejected edit
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Clear status message; follows an edit or the end of the copied window
    ClearStatus,
}

/// Vertical direction for moves and drags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

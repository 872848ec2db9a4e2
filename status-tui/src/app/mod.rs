//! Application module
//!
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Keymap: Which key triggers which action

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Direction};
pub use keymap::map_key;
pub use reducer::reduce;
pub use state::{AppState, CopiedIndicator, DragState, Focus, StatusBarState, UiConfig, COPIED_DURATION};

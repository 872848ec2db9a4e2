//! Statusmaker - compose multi-part status updates
//!
//! This library provides the status list store, the chat-markup formatter,
//! and the clipboard plumbing shared by the Statusmaker TUI and CLI.

pub mod clipboard;
pub mod config;
pub mod cue;
pub mod emoji;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClipboardError, ConfigError, Result, StatusError, StatusmakerError};
pub use format::format_status;
pub use model::{EntryField, EntryList, StatusBoard, StatusEntry};

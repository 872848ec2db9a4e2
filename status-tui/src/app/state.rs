//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use std::time::{Duration, Instant};

use libstatusmaker::{EntryField, StatusBoard};

/// How long the "copied" acknowledgment stays up
pub const COPIED_DURATION: Duration = Duration::from_millis(3000);

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Headline and entries
    pub board: StatusBoard,

    /// Field receiving keystrokes
    pub focus: Focus,

    /// Entry being dragged, if any
    pub drag: Option<DragState>,

    /// Copied acknowledgment
    pub copied: CopiedIndicator,

    /// Clipboard write in flight?
    pub copying: bool,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Which field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Headline,
    Entry { index: usize, field: EntryField },
}

impl Focus {
    /// Index of the focused entry, if an entry field is focused
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Focus::Headline => None,
            Focus::Entry { index, .. } => Some(*index),
        }
    }

    /// Whether Enter inserts a newline rather than advancing focus
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            Focus::Entry {
                field: EntryField::Body,
                ..
            }
        )
    }

    /// Next field in tab order, wrapping to the headline
    pub fn next(self, len: usize) -> Focus {
        match self {
            Focus::Headline => Focus::Entry {
                index: 0,
                field: EntryField::Emoji,
            },
            Focus::Entry { index, field } => match field.next() {
                Some(field) => Focus::Entry { index, field },
                None if index + 1 < len => Focus::Entry {
                    index: index + 1,
                    field: EntryField::Emoji,
                },
                None => Focus::Headline,
            },
        }
    }

    /// Previous field in tab order, wrapping to the last body
    pub fn previous(self, len: usize) -> Focus {
        match self {
            Focus::Headline => Focus::Entry {
                index: len.saturating_sub(1),
                field: EntryField::Body,
            },
            Focus::Entry { index, field } => match field.previous() {
                Some(field) => Focus::Entry { index, field },
                None if index > 0 => Focus::Entry {
                    index: index - 1,
                    field: EntryField::Body,
                },
                None => Focus::Headline,
            },
        }
    }

    /// Same field kind, clamped to a list of `len` entries
    pub fn clamp(self, len: usize) -> Focus {
        match self {
            Focus::Entry { index, field } if index >= len => Focus::Entry {
                index: len.saturating_sub(1),
                field,
            },
            other => other,
        }
    }
}

/// An entry picked up for reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub source: usize,
    pub target: usize,
}

/// Single-slot timer behind the copied acknowledgment.
///
/// Showing it again replaces the deadline rather than stacking resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedIndicator {
    until: Option<Instant>,
}

impl CopiedIndicator {
    /// Turn on until `now + COPIED_DURATION`
    pub fn show(now: Instant) -> Self {
        Self {
            until: Some(now + COPIED_DURATION),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.until.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.until
    }

    /// Indicator as of `now`
    pub fn tick(self, now: Instant) -> Self {
        match self.until {
            Some(until) if now >= until => Self { until: None },
            _ => self,
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_settings(&libstatusmaker::config::UiSettings::default())
    }
}

impl UiConfig {
    /// Config file settings with environment overrides applied
    pub fn from_settings(settings: &libstatusmaker::config::UiSettings) -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("STATUSMAKER_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("STATUSMAKER_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(settings.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// State for a fresh session around `board`
    pub fn new(board: StatusBoard) -> Self {
        Self::with_config(board, UiConfig::default())
    }

    pub fn with_config(board: StatusBoard, config: UiConfig) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            board,
            focus: Focus::Entry {
                index: 0,
                field: EntryField::Title,
            },
            drag: None,
            copied: CopiedIndicator::default(),
            copying: false,
            status: StatusBarState::default(),
            error: None,
            config,
        }
    }

    /// Formatted status, as previewed and copied
    pub fn result(&self) -> String {
        self.board.render()
    }

    /// Current text of the focused field
    pub fn focused_value(&self) -> &str {
        match self.focus {
            Focus::Headline => &self.board.headline,
            Focus::Entry { index, field } => self
                .board
                .entry(index)
                .map(|entry| entry.get(field))
                .unwrap_or_default(),
        }
    }

    /// Whether keystrokes should reach the field editor
    pub fn accepts_text(&self) -> bool {
        self.drag.is_none() && !self.help_visible && self.error.is_none()
    }

    /// Copy is allowed when no other copy is in flight
    pub fn can_copy(&self) -> bool {
        !self.copying
    }
}

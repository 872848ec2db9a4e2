//! Event handling infrastructure
//!
//! Polls crossterm for keyboard and resize events and turns quiet periods
//! into ticks, so timers in state advance without user input.

use std::time::{Duration, Instant};

use crate::app::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Nothing happened before the poll timeout
    Tick(Instant),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick(now) => Action::Tick(now),
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// How long to block: the tick rate, or less if `deadline` comes first
    pub fn poll_timeout(&self, now: Instant, deadline: Option<Instant>) -> Duration {
        match deadline {
            Some(deadline) => self
                .tick_rate
                .min(deadline.saturating_duration_since(now)),
            None => self.tick_rate,
        }
    }

    /// Poll for the next event, waking no later than `deadline`
    pub fn next(&self, deadline: Option<Instant>) -> std::io::Result<TuiEvent> {
        let timeout = self.poll_timeout(Instant::now(), deadline);

        if event::poll(timeout)? {
            match event::read()? {
                // Some platforms report releases too; only presses count
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick(Instant::now())),
            }
        } else {
            Ok(TuiEvent::Tick(Instant::now()))
        }
    }
}

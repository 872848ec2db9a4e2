//! Service layer adapter for the TUI
//!
//! Bridges the async copy service to the synchronous event loop and owns
//! the session's side-effect sources.
//!
//! # Architecture
//!
//! - `ServiceHandle`: wraps `StatusmakerService` and a tokio runtime
//! - Emoji/cue: picked and played here so the reducer stays pure
//! - Copy: platform clipboard writes run on the runtime and report back on a
//!   crossbeam channel; the OSC 52 fallback runs before `copy` returns,
//!   since it writes to the terminal the UI is drawing on
//!
//! # Example
//!
//! ```no_run
//! use status_tui::services::ServiceHandle;
//!
//! # fn example() -> status_tui::error::Result<()> {
//! let mut services = ServiceHandle::new(libstatusmaker::Config::default())?;
//! let board = services.new_board();
//!
//! let done = services.copy(board.render());
//! if let Ok(result) = done.try_recv() {
//!     // Apply result
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver};
use libstatusmaker::cue::Cue;
use libstatusmaker::emoji::{EmojiSource, RandomEmoji};
use libstatusmaker::service::{CopyOutcome, CopyRoute, StatusmakerService};
use libstatusmaker::{Config, StatusBoard};

use crate::app::Action;
use crate::error::Result;

/// Outcome of one clipboard write
pub type CopyResult = libstatusmaker::Result<CopyOutcome>;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: Arc<StatusmakerService>,
    runtime: tokio::runtime::Runtime,
    emoji: RandomEmoji,
    cue: Arc<dyn Cue>,
}

impl ServiceHandle {
    /// Create a new service handle from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created
    pub fn new(config: Config) -> Result<Self> {
        Self::from_service(StatusmakerService::from_config(config))
    }

    /// Wrap an already built service
    pub fn from_service(service: StatusmakerService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let emoji = service.emoji_source();
        let cue = service.cue();

        Ok(Self {
            service: Arc::new(service),
            runtime,
            emoji,
            cue,
        })
    }

    pub fn config(&self) -> &Config {
        self.service.config()
    }

    /// Board for a fresh session, seeded from the emoji source
    pub fn new_board(&mut self) -> StatusBoard {
        self.service.new_board(&mut self.emoji)
    }

    /// Emoji for a new or re-rolled entry
    pub fn next_emoji(&mut self) -> String {
        self.emoji.next()
    }

    /// Play the pop cue; never fails
    pub fn pop(&self) {
        self.cue.play();
    }

    /// Copy `text` to the clipboard
    ///
    /// Returns a receiver that yields exactly one result. With a platform
    /// clipboard the write happens in the background; otherwise the
    /// fallback has already run and the result is waiting.
    pub fn copy(&self, text: String) -> Receiver<CopyResult> {
        let (tx, rx) = bounded(1);
        let service = Arc::clone(&self.service);

        match service.copy().route() {
            CopyRoute::Primary => {
                self.runtime.spawn(async move {
                    let result = service.copy().copy(&text).await;
                    // Receiver dropped means the UI is gone
                    let _ = tx.send(result);
                });
            }
            CopyRoute::Fallback | CopyRoute::Unavailable => {
                let result = self.runtime.block_on(service.copy().copy(&text));
                let _ = tx.send(result);
            }
        }

        rx
    }
}

/// Map a finished copy to the action that records it
pub fn copy_result_action(result: CopyResult, at: Instant) -> Action {
    match result {
        Ok(outcome) => Action::CopySucceeded {
            provider: outcome.provider,
            at,
        },
        Err(e) => Action::CopyFailed {
            error: e.to_string(),
        },
    }
}

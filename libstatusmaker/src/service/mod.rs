//! Service layer for Statusmaker
//!
//! `StatusmakerService` is the facade the TUI and CLI share. It owns the
//! loaded configuration, builds the emoji source and pop cue from it, and
//! wires the clipboard providers into a [`CopyService`].
//!
//! - `CopyService`: clipboard writes with a terminal fallback
//! - `EventBus`: copy progress distribution
//!
//! # Example
//!
//! ```no_run
//! use libstatusmaker::service::StatusmakerService;
//!
//! # async fn example() -> libstatusmaker::Result<()> {
//! let service = StatusmakerService::new()?;
//!
//! let mut emoji = service.emoji_source();
//! let board = service.new_board(&mut emoji);
//!
//! let outcome = service.copy().copy(&board.render()).await?;
//! println!("Copied {} characters via {}", outcome.chars, outcome.provider);
//! # Ok(())
//! # }
//! ```

pub mod copy;
pub mod events;

pub use copy::{CopyOutcome, CopyRoute, CopyService};

use std::io::Write;
use std::sync::Arc;

use self::events::EventBus;
use crate::clipboard::{ClipboardProvider, CommandClipboard, Osc52Clipboard, SystemClipboard};
use crate::cue::{Cue, SilentCue, TerminalBell};
use crate::emoji::{EmojiSource, RandomEmoji};
use crate::model::StatusBoard;
use crate::{Config, Result};

/// Main service facade
pub struct StatusmakerService {
    config: Arc<Config>,
    copy: CopyService,
    event_bus: EventBus,
}

impl StatusmakerService {
    /// Create a service from the default configuration file.
    ///
    /// The OSC 52 fallback, when enabled, writes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_config(config))
    }

    /// Create a service with a pre-loaded configuration
    pub fn from_config(config: Config) -> Self {
        Self::with_terminal(config, std::io::stdout())
    }

    /// Create a service whose OSC 52 fallback writes to `terminal`.
    ///
    /// `[clipboard] command` overrides the system clipboard.
    pub fn with_terminal<W>(config: Config, terminal: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let primary: Option<Arc<dyn ClipboardProvider>> = match config.clipboard.command.as_deref() {
            Some(line) => CommandClipboard::from_command_line(line)
                .map(|c| Arc::new(c) as Arc<dyn ClipboardProvider>),
            None => SystemClipboard::detect().map(|c| Arc::new(c) as Arc<dyn ClipboardProvider>),
        };
        let fallback: Option<Arc<dyn ClipboardProvider>> = if config.clipboard.osc52_fallback {
            Some(Arc::new(Osc52Clipboard::new(terminal)))
        } else {
            None
        };

        Self::with_providers(config, primary, fallback)
    }

    /// Create a service with explicit clipboard providers
    pub fn with_providers(
        config: Config,
        primary: Option<Arc<dyn ClipboardProvider>>,
        fallback: Option<Arc<dyn ClipboardProvider>>,
    ) -> Self {
        let event_bus = EventBus::new(32);
        let copy = CopyService::new(primary, fallback, event_bus.clone());

        Self {
            config: Arc::new(config),
            copy,
            event_bus,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the copy service
    pub fn copy(&self) -> &CopyService {
        &self.copy
    }

    /// Emoji source configured from `[emoji]`
    pub fn emoji_source(&self) -> RandomEmoji {
        RandomEmoji::new(
            self.config.emoji.candidates.clone(),
            self.config.emoji.recent_window,
        )
    }

    /// Pop cue: the terminal bell, or nothing when sound is off
    pub fn cue(&self) -> Arc<dyn Cue> {
        if self.config.ui.sound {
            Arc::new(TerminalBell::stdout())
        } else {
            Arc::new(SilentCue)
        }
    }

    /// Board a session starts with: configured headline, one seeded entry
    pub fn new_board(&self, emoji: &mut dyn EmojiSource) -> StatusBoard {
        StatusBoard::new(self.config.defaults.headline.clone(), emoji.seed())
    }

    /// Subscribe to copy events
    pub fn subscribe(&self) -> events::EventReceiver {
        self.event_bus.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn test_new_board_uses_config_headline() {
        let mut config = Config::default();
        config.defaults.headline = "Friday wrap-up".to_string();
        config.emoji.candidates = vec!["🧪".to_string()];
        let service = StatusmakerService::with_providers(config, None, None);

        let mut emoji = service.emoji_source();
        let board = service.new_board(&mut emoji);

        assert_eq!(board.headline, "Friday wrap-up");
        assert_eq!(board.len(), 1);
        assert_eq!(board.entry(0).unwrap().emoji, "🧪");
    }

    #[test]
    fn test_configured_command_is_primary() {
        let mut config = Config::default();
        config.clipboard.command = Some("statusmaker-test-copy --flag".to_string());
        config.clipboard.osc52_fallback = false;
        let service = StatusmakerService::with_terminal(config, Vec::new());

        assert_eq!(service.copy().route(), CopyRoute::Primary);
    }

    #[test]
    fn test_osc52_disabled_without_primary_is_unavailable() {
        let mut config = Config::default();
        config.clipboard.osc52_fallback = false;
        let service = StatusmakerService::with_providers(config, None, None);

        assert_eq!(service.copy().route(), CopyRoute::Unavailable);
    }

    #[tokio::test]
    async fn test_copy_emits_to_subscribers() {
        let service = StatusmakerService::with_providers(
            Config::default(),
            Some(Arc::new(MemoryClipboard::new())),
            None,
        );
        let mut receiver = service.subscribe();

        service.copy().copy("*First*").await.unwrap();

        assert!(matches!(
            receiver.recv().await.unwrap(),
            events::Event::CopyStarted { .. }
        ));
    }
}

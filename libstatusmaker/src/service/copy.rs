//! Copy-to-clipboard service
//!
//! Routes a formatted status to the platform clipboard. The fallback
//! provider is only used when no platform clipboard exists at all; a
//! platform clipboard that rejects the text is reported as a recoverable
//! failure instead of silently retried elsewhere.

use std::sync::Arc;

use super::events::{Event, EventBus};
use crate::clipboard::ClipboardProvider;
use crate::error::{ClipboardError, Result};

/// Which provider a copy will go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRoute {
    /// Platform clipboard, may take a while
    Primary,
    /// Terminal escape sequence, completes synchronously
    Fallback,
    /// Nothing to copy with
    Unavailable,
}

/// Successful copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copy_id: String,
    pub provider: String,
    pub chars: usize,
}

/// Clipboard writer shared by the TUI and CLI
#[derive(Clone)]
pub struct CopyService {
    primary: Option<Arc<dyn ClipboardProvider>>,
    fallback: Option<Arc<dyn ClipboardProvider>>,
    event_bus: EventBus,
}

impl CopyService {
    pub fn new(
        primary: Option<Arc<dyn ClipboardProvider>>,
        fallback: Option<Arc<dyn ClipboardProvider>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            primary,
            fallback,
            event_bus,
        }
    }

    pub fn route(&self) -> CopyRoute {
        match (&self.primary, &self.fallback) {
            (Some(_), _) => CopyRoute::Primary,
            (None, Some(_)) => CopyRoute::Fallback,
            (None, None) => CopyRoute::Unavailable,
        }
    }

    /// Copy `text`, emitting started/completed/failed events
    pub async fn copy(&self, text: &str) -> Result<CopyOutcome> {
        let provider = self
            .primary
            .as_ref()
            .or(self.fallback.as_ref())
            .ok_or(ClipboardError::Unavailable)?;

        let copy_id = uuid::Uuid::new_v4().to_string();
        let provider_name = provider.name().to_string();

        self.event_bus.emit(Event::CopyStarted {
            copy_id: copy_id.clone(),
            provider: provider_name.clone(),
        });

        match provider.write_text(text).await {
            Ok(()) => {
                let chars = text.chars().count();
                tracing::info!(copy_id = %copy_id, provider = %provider_name, chars, "Copied status");
                self.event_bus.emit(Event::CopyCompleted {
                    copy_id: copy_id.clone(),
                    provider: provider_name.clone(),
                    chars,
                });
                Ok(CopyOutcome {
                    copy_id,
                    provider: provider_name,
                    chars,
                })
            }
            Err(e) => {
                tracing::warn!(copy_id = %copy_id, provider = %provider_name, "Copy failed: {}", e);
                self.event_bus.emit(Event::CopyFailed {
                    copy_id,
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }
}

//! Event system for clipboard progress
//!
//! In-process event bus built on `tokio::sync::broadcast`. The copy service
//! emits events while a clipboard write is in flight; `status-fmt --verbose`
//! subscribes and logs them. The TUI takes copy results from its own channel.
//!
//! If no subscribers exist, events are dropped immediately.
//!
//! # Example
//!
//! ```no_run
//! use libstatusmaker::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(16);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.emit(Event::CopyStarted {
//!     copy_id: "abc123".to_string(),
//!     provider: "pbcopy".to_string(),
//! });
//!
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Broadcast bus for copy events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus buffering `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted from now on
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers. Never blocks.
    pub fn emit(&self, event: Event) {
        // send() fails only when nobody is listening
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted while copying a status to the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A clipboard write was handed to a provider
    CopyStarted {
        copy_id: String,
        provider: String,
    },

    /// The provider accepted the text
    CopyCompleted {
        copy_id: String,
        provider: String,
        /// Characters copied
        chars: usize,
    },

    /// The provider rejected the text
    CopyFailed { copy_id: String, error: String },
}

impl Event {
    pub fn copy_id(&self) -> &str {
        match self {
            Event::CopyStarted { copy_id, .. }
            | Event::CopyCompleted { copy_id, .. }
            | Event::CopyFailed { copy_id, .. } => copy_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission_and_subscription() {
        let event_bus = EventBus::new(10);
        let mut receiver = event_bus.subscribe();

        event_bus.emit(Event::CopyStarted {
            copy_id: "test123".to_string(),
            provider: "wl-copy".to_string(),
        });

        match receiver.recv().await.unwrap() {
            Event::CopyStarted { copy_id, provider } => {
                assert_eq!(copy_id, "test123");
                assert_eq!(provider, "wl-copy");
            }
            _ => panic!("Wrong event type received"),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let event_bus = EventBus::new(10);
        let mut receiver1 = event_bus.subscribe();
        let mut receiver2 = event_bus.subscribe();

        let event = Event::CopyCompleted {
            copy_id: "test456".to_string(),
            provider: "osc52".to_string(),
            chars: 12,
        };
        event_bus.emit(event.clone());

        assert_eq!(receiver1.recv().await.unwrap(), event);
        assert_eq!(receiver2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_no_subscribers() {
        let event_bus = EventBus::new(10);

        event_bus.emit(Event::CopyFailed {
            copy_id: "test789".to_string(),
            error: "nope".to_string(),
        });

        assert_eq!(event_bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::CopyFailed {
            copy_id: "serial_test".to_string(),
            error: "xclip exited 1".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("copy_failed"));
        assert!(json.contains("serial_test"));

        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_copy_id_accessor() {
        let event = Event::CopyCompleted {
            copy_id: "id-1".to_string(),
            provider: "pbcopy".to_string(),
            chars: 3,
        };
        assert_eq!(event.copy_id(), "id-1");
    }
}

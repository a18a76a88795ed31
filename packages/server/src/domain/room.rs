//! The chat room aggregate: every piece of mutable hub state in one place.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::{ConnectionRegistry, MessageStore, TypingTracker};

/// Owns the registry, typing tracker and message store.
///
/// All mutation goes through [`crate::domain::router::dispatch`] while the
/// caller holds exclusive access, so the three components never observe a
/// half-applied event.
#[derive(Debug, Clone, Default)]
pub struct ChatRoom {
    pub registry: ConnectionRegistry,
    pub typing: TypingTracker,
    pub store: MessageStore,
}

impl ChatRoom {
    /// Create an empty room with the default history capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty room keeping at most `history_capacity` messages
    pub fn with_history_capacity(history_capacity: usize) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            typing: TypingTracker::new(),
            store: MessageStore::with_capacity(history_capacity),
        }
    }
}

/// The single-writer handle shared by use cases.
pub type SharedChatRoom = Arc<Mutex<ChatRoom>>;

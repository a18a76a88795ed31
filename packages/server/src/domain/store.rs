//! Bounded message history with mutable reaction and read-receipt state.

use std::collections::VecDeque;

use super::{ChatMessage, ConnectionId, MessageBody, MessageId, ReactionSymbol, Timestamp, Username};

/// Default number of broadcast messages kept in history
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Ordered log of broadcast messages, oldest first.
///
/// Ids come from a monotonic counter, so the log is always sorted by id and
/// lookups can binary search. When the log grows past `capacity` the oldest
/// message is evicted together with its reaction and read state.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
    next_id: u64,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding at most `capacity` messages (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reserve the next message id without storing anything.
    ///
    /// Private messages take their ids from here so ids stay unique across both kinds.
    pub fn issue_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a broadcast message at the tail, evicting the head past capacity.
    pub fn append(
        &mut self,
        sender_id: ConnectionId,
        sender: Username,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> ChatMessage {
        let message = ChatMessage::new(self.issue_id(), sender, sender_id, body, timestamp);
        self.messages.push_back(message.clone());
        while self.messages.len() > self.capacity {
            if let Some(evicted) = self.messages.pop_front() {
                tracing::debug!("Evicted message {} from history", evicted.id);
            }
        }
        message
    }

    /// Record that `reader_id` has read `message_id`.
    ///
    /// Returns `true` only when the reader was newly recorded.
    pub fn mark_read(&mut self, message_id: MessageId, reader_id: &ConnectionId) -> bool {
        match self.get_mut(message_id) {
            Some(message) => message.read_by.insert(reader_id.clone()),
            None => false,
        }
    }

    /// Add `reactor_id` to the reactors of `symbol` on `message_id`.
    ///
    /// Returns `true` only when the reactor set changed.
    pub fn add_reaction(
        &mut self,
        message_id: MessageId,
        symbol: &ReactionSymbol,
        reactor_id: &ConnectionId,
    ) -> bool {
        match self.get_mut(message_id) {
            Some(message) => message
                .reactions
                .entry(symbol.clone())
                .or_default()
                .insert(reactor_id.clone()),
            None => false,
        }
    }

    /// Remove `reactor_id` from the reactors of `symbol` on `message_id`.
    ///
    /// The symbol entry is dropped once its last reactor is removed. Returns
    /// `true` only when the reactor was present.
    pub fn remove_reaction(
        &mut self,
        message_id: MessageId,
        symbol: &ReactionSymbol,
        reactor_id: &ConnectionId,
    ) -> bool {
        let Some(message) = self.get_mut(message_id) else {
            return false;
        };
        let Some(reactors) = message.reactions.get_mut(symbol) else {
            return false;
        };
        let removed = reactors.remove(reactor_id);
        if reactors.is_empty() {
            message.reactions.remove(symbol);
        }
        removed
    }

    pub fn get(&self, message_id: MessageId) -> Option<&ChatMessage> {
        let index = self.position(message_id)?;
        self.messages.get(index)
    }

    /// Oldest-first snapshot of the history.
    pub fn list(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn get_mut(&mut self, message_id: MessageId) -> Option<&mut ChatMessage> {
        let index = self.position(message_id)?;
        self.messages.get_mut(index)
    }

    fn position(&self, message_id: MessageId) -> Option<usize> {
        self.messages
            .binary_search_by_key(&message_id, |m| m.id)
            .ok()
    }
}

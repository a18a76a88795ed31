//! Core domain entities for the chat hub.

use std::collections::{BTreeMap, BTreeSet};

use super::value_object::{ConnectionId, MessageBody, MessageId, ReactionSymbol, Timestamp, Username};

/// A present user: the pair of a live connection and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: ConnectionId,
    pub username: Username,
}

impl Identity {
    pub fn new(id: ConnectionId, username: Username) -> Self {
        Self { id, username }
    }
}

/// A chat message, either broadcast to the room or sent privately to one peer.
///
/// Only broadcast messages live in the `MessageStore`; their `reactions` and
/// `read_by` are mutated in place by later events referencing `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    /// Sender's display name at send time
    pub sender: Username,
    pub sender_id: ConnectionId,
    pub body: MessageBody,
    pub timestamp: Timestamp,
    pub is_private: bool,
    /// Reaction symbol to the set of connections that applied it. Never holds an empty set.
    pub reactions: BTreeMap<ReactionSymbol, BTreeSet<ConnectionId>>,
    pub read_by: BTreeSet<ConnectionId>,
}

impl ChatMessage {
    /// Create a new broadcast message with empty reaction and read state
    pub fn new(
        id: MessageId,
        sender: Username,
        sender_id: ConnectionId,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            sender,
            sender_id,
            body,
            timestamp,
            is_private: false,
            reactions: BTreeMap::new(),
            read_by: BTreeSet::new(),
        }
    }

    /// Create a new private (point-to-point) message
    pub fn new_private(
        id: MessageId,
        sender: Username,
        sender_id: ConnectionId,
        body: MessageBody,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            is_private: true,
            ..Self::new(id, sender, sender_id, body, timestamp)
        }
    }

    /// Connections that applied `symbol`, if any
    pub fn reactors(&self, symbol: &ReactionSymbol) -> Option<&BTreeSet<ConnectionId>> {
        self.reactions.get(symbol)
    }
}

//! Inbound and outbound events exchanged between connections and the hub.

use super::{ChatMessage, ConnectionId, Identity, MessageId, ReactionSymbol, Username};

/// An event received from one connection.
///
/// Payloads are carried as raw strings; the router validates them and drops
/// malformed input before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Join { username: String },
    Send { body: String },
    PrivateSend { to: String, body: String },
    Typing { is_typing: bool },
    MarkRead { message_id: MessageId },
    AddReaction { message_id: MessageId, symbol: String },
    RemoveReaction { message_id: MessageId, symbol: String },
    Disconnect,
}

impl InboundEvent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Send { .. } => "send",
            Self::PrivateSend { .. } => "private_send",
            Self::Typing { .. } => "typing",
            Self::MarkRead { .. } => "mark_read",
            Self::AddReaction { .. } => "add_reaction",
            Self::RemoveReaction { .. } => "remove_reaction",
            Self::Disconnect => "disconnect",
        }
    }
}

/// A reaction change on a stored message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionChange {
    pub message_id: MessageId,
    pub symbol: ReactionSymbol,
    pub user_id: ConnectionId,
}

/// A read receipt for a stored message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReceipt {
    pub message_id: MessageId,
    pub user_id: ConnectionId,
}

/// An event the hub sends to one or more connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// Greeting telling a fresh connection its own id
    Connected { connection_id: ConnectionId },
    /// Full presence roster
    UserList(Vec<Identity>),
    UserJoined(Identity),
    UserLeft(Identity),
    /// A new broadcast message
    NewMessage(ChatMessage),
    PrivateMessage(ChatMessage),
    /// Full set of typist names
    TypingUsers(Vec<Username>),
    ReactionAdded(ReactionChange),
    ReactionRemoved(ReactionChange),
    MessageRead(ReadReceipt),
}

/// Who receives an outbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single connection (the origin or a named peer)
    Connection(ConnectionId),
    /// Every live connection
    All,
}

/// An outbound event paired with its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub target: Target,
    pub event: OutboundEvent,
}

impl Delivery {
    pub fn to(connection_id: ConnectionId, event: OutboundEvent) -> Self {
        Self {
            target: Target::Connection(connection_id),
            event,
        }
    }

    pub fn broadcast(event: OutboundEvent) -> Self {
        Self {
            target: Target::All,
            event,
        }
    }
}

//! WebSocket event envelopes.
//!
//! Every frame is `{"event": <name>, "data": <payload>}`.

use serde::{Deserialize, Serialize};

use super::model::{ConnectedDto, IdentityDto, MessageDto, ReactionDto, ReadReceiptDto};

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    UserJoin(String),
    SendMessage(SendMessagePayload),
    PrivateMessage(PrivateMessagePayload),
    Typing(bool),
    MarkRead(u64),
    AddReaction(ReactionPayload),
    RemoveReaction(ReactionPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(alias = "message")]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateMessagePayload {
    pub to: String,
    #[serde(alias = "message")]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    pub message_id: u64,
    #[serde(alias = "reaction")]
    pub symbol: String,
}

/// Events sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Connected(ConnectedDto),
    UserList(Vec<IdentityDto>),
    UserJoined(IdentityDto),
    UserLeft(IdentityDto),
    ReceiveMessage(MessageDto),
    PrivateMessage(MessageDto),
    TypingUsers(Vec<String>),
    ReactionAdded(ReactionDto),
    ReactionRemoved(ReactionDto),
    MessageRead(ReadReceiptDto),
}

//! Conversion logic between DTOs and domain types.

use huddle_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    ChatMessage, Identity, InboundEvent, MessageId, OutboundEvent, ReactionChange, ReadReceipt,
};
use crate::infrastructure::dto::{
    model::{ConnectedDto, IdentityDto, MessageDto, ReactionDto, ReadReceiptDto},
    websocket::{ClientEvent, ServerEvent},
};

// ========================================
// DTO → Domain
// ========================================

impl From<ClientEvent> for InboundEvent {
    fn from(dto: ClientEvent) -> Self {
        match dto {
            ClientEvent::UserJoin(username) => Self::Join { username },
            ClientEvent::SendMessage(payload) => Self::Send { body: payload.body },
            ClientEvent::PrivateMessage(payload) => Self::PrivateSend {
                to: payload.to,
                body: payload.body,
            },
            ClientEvent::Typing(is_typing) => Self::Typing { is_typing },
            ClientEvent::MarkRead(message_id) => Self::MarkRead {
                message_id: MessageId::new(message_id),
            },
            ClientEvent::AddReaction(payload) => Self::AddReaction {
                message_id: MessageId::new(payload.message_id),
                symbol: payload.symbol,
            },
            ClientEvent::RemoveReaction(payload) => Self::RemoveReaction {
                message_id: MessageId::new(payload.message_id),
                symbol: payload.symbol,
            },
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Identity> for IdentityDto {
    fn from(model: &Identity) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            username: model.username.as_str().to_string(),
        }
    }
}

impl From<&ChatMessage> for MessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            id: model.id.value(),
            sender: model.sender.as_str().to_string(),
            sender_id: model.sender_id.as_str().to_string(),
            body: model.body.as_str().to_string(),
            timestamp: timestamp_to_rfc3339(model.timestamp.value()),
            is_private: model.is_private,
            reactions: model
                .reactions
                .iter()
                .map(|(symbol, reactors)| {
                    (
                        symbol.as_str().to_string(),
                        reactors.iter().map(|id| id.as_str().to_string()).collect(),
                    )
                })
                .collect(),
            read_by: model
                .read_by
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}

impl From<&ReactionChange> for ReactionDto {
    fn from(model: &ReactionChange) -> Self {
        Self {
            message_id: model.message_id.value(),
            symbol: model.symbol.as_str().to_string(),
            user_id: model.user_id.as_str().to_string(),
        }
    }
}

impl From<&ReadReceipt> for ReadReceiptDto {
    fn from(model: &ReadReceipt) -> Self {
        Self {
            message_id: model.message_id.value(),
            user_id: model.user_id.as_str().to_string(),
        }
    }
}

impl From<&OutboundEvent> for ServerEvent {
    fn from(model: &OutboundEvent) -> Self {
        match model {
            OutboundEvent::Connected { connection_id } => Self::Connected(ConnectedDto {
                id: connection_id.as_str().to_string(),
            }),
            OutboundEvent::UserList(identities) => {
                Self::UserList(identities.iter().map(IdentityDto::from).collect())
            }
            OutboundEvent::UserJoined(identity) => Self::UserJoined(identity.into()),
            OutboundEvent::UserLeft(identity) => Self::UserLeft(identity.into()),
            OutboundEvent::NewMessage(message) => Self::ReceiveMessage(message.into()),
            OutboundEvent::PrivateMessage(message) => Self::PrivateMessage(message.into()),
            OutboundEvent::TypingUsers(names) => Self::TypingUsers(
                names.iter().map(|name| name.as_str().to_string()).collect(),
            ),
            OutboundEvent::ReactionAdded(change) => Self::ReactionAdded(change.into()),
            OutboundEvent::ReactionRemoved(change) => Self::ReactionRemoved(change.into()),
            OutboundEvent::MessageRead(receipt) => Self::MessageRead(receipt.into()),
        }
    }
}

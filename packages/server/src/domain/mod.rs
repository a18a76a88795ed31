//! Domain layer for the chat hub.
//!
//! This module contains the hub state and the routing rules, independent of
//! data transfer objects (DTOs) and transport concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod pusher;
pub mod registry;
pub mod room;
pub mod router;
pub mod store;
pub mod typing;
pub mod value_object;

pub use entity::{ChatMessage, Identity};
pub use error::{MessagePushError, ValueObjectError};
pub use event::{Delivery, InboundEvent, OutboundEvent, ReactionChange, ReadReceipt, Target};
pub use factory::ConnectionIdFactory;
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use room::{ChatRoom, SharedChatRoom};
pub use store::{DEFAULT_HISTORY_CAPACITY, MessageStore};
pub use typing::TypingTracker;
pub use value_object::{ConnectionId, MessageBody, MessageId, ReactionSymbol, Timestamp, Username};

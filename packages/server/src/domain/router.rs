//! Broadcast router: applies one inbound event to the room and decides who hears about it.
//!
//! [`dispatch`] is a pure function of the event and the current room state.
//! It performs at most one state change and returns the outbound deliveries;
//! it never sends anything itself. Invalid input and unknown targets degrade
//! to an empty delivery list.

use super::{
    ChatMessage, ChatRoom, ConnectionId, Delivery, InboundEvent, MessageBody, MessageId,
    OutboundEvent, ReactionChange, ReactionSymbol, ReadReceipt, Timestamp, Username,
};

/// Route one inbound event from `origin` against `room`.
pub fn dispatch(
    room: &mut ChatRoom,
    origin: &ConnectionId,
    event: InboundEvent,
    now: Timestamp,
) -> Vec<Delivery> {
    match event {
        InboundEvent::Join { username } => join(room, origin, username),
        InboundEvent::Send { body } => send(room, origin, body, now),
        InboundEvent::PrivateSend { to, body } => private_send(room, origin, to, body, now),
        InboundEvent::Typing { is_typing } => typing(room, origin, is_typing),
        InboundEvent::MarkRead { message_id } => mark_read(room, origin, message_id),
        InboundEvent::AddReaction { message_id, symbol } => {
            add_reaction(room, origin, message_id, symbol)
        }
        InboundEvent::RemoveReaction { message_id, symbol } => {
            remove_reaction(room, origin, message_id, symbol)
        }
        InboundEvent::Disconnect => disconnect(room, origin),
    }
}

fn join(room: &mut ChatRoom, origin: &ConnectionId, username: String) -> Vec<Delivery> {
    if room.registry.contains(origin) {
        tracing::debug!("Connection '{}' already joined, ignoring join", origin);
        return Vec::new();
    }
    let identity = room.registry.join(origin.clone(), Username::new(username));
    tracing::info!("{} joined the chat", identity.username);

    vec![
        Delivery::broadcast(OutboundEvent::UserList(room.registry.list())),
        Delivery::broadcast(OutboundEvent::UserJoined(identity)),
    ]
}

fn send(room: &mut ChatRoom, origin: &ConnectionId, body: String, now: Timestamp) -> Vec<Delivery> {
    let Ok(body) = MessageBody::new(body) else {
        tracing::debug!("Dropped blank message from '{}'", origin);
        return Vec::new();
    };

    let sender = sender_name(room, origin);
    let message = room.store.append(origin.clone(), sender, body, now);
    vec![Delivery::broadcast(OutboundEvent::NewMessage(message))]
}

fn private_send(
    room: &mut ChatRoom,
    origin: &ConnectionId,
    to: String,
    body: String,
    now: Timestamp,
) -> Vec<Delivery> {
    let Ok(body) = MessageBody::new(body) else {
        tracing::debug!("Dropped blank private message from '{}'", origin);
        return Vec::new();
    };

    let sender = sender_name(room, origin);
    let id = room.store.issue_id();
    let message = ChatMessage::new_private(id, sender, origin.clone(), body, now);

    let mut deliveries = Vec::with_capacity(2);
    match ConnectionId::new(to) {
        Ok(recipient) if recipient != *origin && room.registry.contains(&recipient) => {
            deliveries.push(Delivery::to(
                recipient,
                OutboundEvent::PrivateMessage(message.clone()),
            ));
        }
        Ok(recipient) if recipient == *origin => {}
        _ => tracing::debug!(
            "Private message {} from '{}' has no live recipient, echoing to sender only",
            id,
            origin
        ),
    }
    deliveries.push(Delivery::to(
        origin.clone(),
        OutboundEvent::PrivateMessage(message),
    ));
    deliveries
}

fn typing(room: &mut ChatRoom, origin: &ConnectionId, is_typing: bool) -> Vec<Delivery> {
    let Some(identity) = room.registry.get(origin) else {
        return Vec::new();
    };
    room.typing.set_typing(identity, is_typing);
    vec![Delivery::broadcast(OutboundEvent::TypingUsers(
        room.typing.list(),
    ))]
}

fn mark_read(room: &mut ChatRoom, origin: &ConnectionId, message_id: MessageId) -> Vec<Delivery> {
    if !room.store.mark_read(message_id, origin) {
        return Vec::new();
    }
    vec![Delivery::broadcast(OutboundEvent::MessageRead(ReadReceipt {
        message_id,
        user_id: origin.clone(),
    }))]
}

fn add_reaction(
    room: &mut ChatRoom,
    origin: &ConnectionId,
    message_id: MessageId,
    symbol: String,
) -> Vec<Delivery> {
    let symbol = ReactionSymbol::new(symbol);
    if !room.store.add_reaction(message_id, &symbol, origin) {
        return Vec::new();
    }
    vec![Delivery::broadcast(OutboundEvent::ReactionAdded(
        ReactionChange {
            message_id,
            symbol,
            user_id: origin.clone(),
        },
    ))]
}

fn remove_reaction(
    room: &mut ChatRoom,
    origin: &ConnectionId,
    message_id: MessageId,
    symbol: String,
) -> Vec<Delivery> {
    let symbol = ReactionSymbol::new(symbol);
    if !room.store.remove_reaction(message_id, &symbol, origin) {
        return Vec::new();
    }
    vec![Delivery::broadcast(OutboundEvent::ReactionRemoved(
        ReactionChange {
            message_id,
            symbol,
            user_id: origin.clone(),
        },
    ))]
}

fn disconnect(room: &mut ChatRoom, origin: &ConnectionId) -> Vec<Delivery> {
    let Some(identity) = room.registry.leave(origin) else {
        return Vec::new();
    };
    room.typing.clear(origin);
    tracing::info!("{} left the chat", identity.username);

    vec![
        Delivery::broadcast(OutboundEvent::UserList(room.registry.list())),
        Delivery::broadcast(OutboundEvent::TypingUsers(room.typing.list())),
        Delivery::broadcast(OutboundEvent::UserLeft(identity)),
    ]
}

fn sender_name(room: &ChatRoom, origin: &ConnectionId) -> Username {
    room.registry
        .get(origin)
        .map(|identity| identity.username.clone())
        .unwrap_or_else(Username::anonymous)
}

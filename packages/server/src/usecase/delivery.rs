//! Routing plus fan-out, shared by the event and disconnect use cases.

use huddle_shared::time::Clock;

use crate::domain::{
    ChatRoom, ConnectionId, Delivery, InboundEvent, MessagePusher, Target, Timestamp, router,
};

/// Route `event` against `room` and push every resulting delivery.
///
/// The caller holds the room lock for the whole call, so deliveries leave in
/// the same order as the mutations that produced them.
pub(super) async fn route_and_deliver(
    room: &mut ChatRoom,
    pusher: &dyn MessagePusher,
    clock: &dyn Clock,
    origin: &ConnectionId,
    event: InboundEvent,
) -> Vec<Delivery> {
    tracing::debug!("Routing '{}' from '{}'", event.name(), origin);
    let now = Timestamp::new(clock.now_millis());
    let deliveries = router::dispatch(room, origin, event, now);
    deliver(pusher, &deliveries).await;
    deliveries
}

/// Push deliveries in order. Failures are logged and skipped.
pub(super) async fn deliver(pusher: &dyn MessagePusher, deliveries: &[Delivery]) {
    for delivery in deliveries {
        let result = match &delivery.target {
            Target::All => pusher.broadcast(&delivery.event).await,
            Target::Connection(client_id) => pusher.push_to(client_id, &delivery.event).await,
        };
        if let Err(e) = result {
            tracing::warn!("Dropped outbound event: {}", e);
        }
    }
}

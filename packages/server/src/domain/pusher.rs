//! MessagePusher trait 定義
//!
//! ドメイン層が必要とする「接続への送信」のインターフェースを定義します。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, OutboundEvent};

/// Channel feeding one connection's outbound writer task
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Outbound delivery to live connections.
///
/// Sends are fire-and-forget: a failure for one connection must never block
/// or fail delivery to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel);

    /// Forget a connection's outbound channel
    async fn unregister_client(&self, client_id: &ConnectionId);

    /// Push an event to one connection
    async fn push_to(
        &self,
        client_id: &ConnectionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// Push an event to every registered connection, tolerating individual failures
    async fn broadcast(&self, event: &OutboundEvent) -> Result<(), MessagePushError>;
}

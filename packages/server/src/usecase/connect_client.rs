//! UseCase: クライアント接続処理
//!
//! 新しいトランスポート接続を MessagePusher に登録し、
//! 自分自身の接続 ID を知らせる `connected` イベントを送信します。
//! 参加（join）は接続後にクライアントが明示的に行います。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, OutboundEvent, PusherChannel};

use super::error::ConnectError;

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - サーバーが払い出した接続 ID
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Errors
    ///
    /// `connected` イベントを送信できなかった場合は登録を取り消して `ConnectError` を返す
    pub async fn execute(
        &self,
        client_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), ConnectError> {
        self.message_pusher
            .register_client(client_id.clone(), sender)
            .await;

        let greeting = OutboundEvent::Connected {
            connection_id: client_id.clone(),
        };
        if let Err(source) = self.message_pusher.push_to(&client_id, &greeting).await {
            self.message_pusher.unregister_client(&client_id).await;
            return Err(ConnectError::GreetingFailed {
                client_id: client_id.into_string(),
                source,
            });
        }

        Ok(())
    }
}

//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 切断時の登録解除、roster / 入力中リスト / user_left のブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：join 済みの接続の切断
//! - エッジケース：join せずに切断した接続（何も通知しない）

use std::sync::Arc;

use huddle_shared::time::Clock;

use crate::domain::{ConnectionId, Delivery, InboundEvent, MessagePusher, SharedChatRoom};

use super::delivery::route_and_deliver;

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// チャットルームの状態（単一ライター）
    room: SharedChatRoom,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 時刻の取得元
    clock: Arc<dyn Clock>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        room: SharedChatRoom,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            room,
            message_pusher,
            clock,
        }
    }

    /// クライアント切断を実行
    ///
    /// 切断した接続を先に MessagePusher から外してから、残りの接続に通知する。
    ///
    /// # Returns
    ///
    /// 送信した配信の一覧（join していなかった接続では空）
    pub async fn execute(&self, client_id: &ConnectionId) -> Vec<Delivery> {
        let mut room = self.room.lock().await;
        self.message_pusher.unregister_client(client_id).await;
        route_and_deliver(
            &mut room,
            self.message_pusher.as_ref(),
            self.clock.as_ref(),
            client_id,
            InboundEvent::Disconnect,
        )
        .await
    }
}

//! UseCase: 受信イベントの処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DispatchEventUseCase::execute() メソッド
//! - ルーティング結果が正しい宛先（本人・相手・全員）に送信されること
//!
//! ### なぜこのテストが必要か
//! - 状態の変更と送信が 1 つのロックの中で順序通りに行われることを保証する
//! - 一部の送信失敗が他の宛先への送信を妨げないことを確認する

use std::sync::Arc;

use huddle_shared::time::Clock;

use crate::domain::{ConnectionId, Delivery, InboundEvent, MessagePusher, SharedChatRoom};

use super::delivery::route_and_deliver;

/// 受信イベント処理のユースケース
pub struct DispatchEventUseCase {
    /// チャットルームの状態（単一ライター）
    room: SharedChatRoom,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 時刻の取得元
    clock: Arc<dyn Clock>,
}

impl DispatchEventUseCase {
    /// 新しい DispatchEventUseCase を作成
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

    /// 受信イベントを処理
    ///
    /// # Arguments
    ///
    /// * `origin` - イベントを送ってきた接続の ID
    /// * `event` - 受信イベント（Domain Model）
    ///
    /// # Returns
    ///
    /// 送信した配信の一覧。無効な入力や存在しない対象への操作では空になる。
    pub async fn execute(&self, origin: &ConnectionId, event: InboundEvent) -> Vec<Delivery> {
        let mut room = self.room.lock().await;
        route_and_deliver(
            &mut room,
            self.message_pusher.as_ref(),
            self.clock.as_ref(),
            origin,
            event,
        )
        .await
    }
}

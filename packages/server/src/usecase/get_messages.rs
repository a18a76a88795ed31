//! UseCase: メッセージ履歴の取得（後から参加したクライアント向けのスナップショット）

use crate::domain::{ChatMessage, SharedChatRoom};

/// メッセージ履歴取得のユースケース
pub struct GetMessagesUseCase {
    room: SharedChatRoom,
}

impl GetMessagesUseCase {
    pub fn new(room: SharedChatRoom) -> Self {
        Self { room }
    }

    /// 古い順のメッセージ履歴を返す
    pub async fn execute(&self) -> Vec<ChatMessage> {
        self.room.lock().await.store.list()
    }
}

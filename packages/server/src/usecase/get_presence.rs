//! UseCase: 参加者一覧・入力中ユーザーの取得

use crate::domain::{Identity, SharedChatRoom, Username};

/// 参加者一覧取得のユースケース
pub struct GetUsersUseCase {
    room: SharedChatRoom,
}

impl GetUsersUseCase {
    pub fn new(room: SharedChatRoom) -> Self {
        Self { room }
    }

    /// 現在の roster を返す（順序は保証しない）
    pub async fn execute(&self) -> Vec<Identity> {
        self.room.lock().await.registry.list()
    }
}

/// 入力中ユーザー取得のユースケース
pub struct GetTypingUsersUseCase {
    room: SharedChatRoom,
}

impl GetTypingUsersUseCase {
    pub fn new(room: SharedChatRoom) -> Self {
        Self { room }
    }

    pub async fn execute(&self) -> Vec<Username> {
        self.room.lock().await.typing.list()
    }
}

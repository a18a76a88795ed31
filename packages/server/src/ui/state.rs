//! Server state shared by handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, DispatchEventUseCase, GetMessagesUseCase,
    GetTypingUsersUseCase, GetUsersUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectClientUseCase（接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DispatchEventUseCase（受信イベント処理のユースケース）
    pub dispatch_event_usecase: Arc<DispatchEventUseCase>,
    /// DisconnectClientUseCase（切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// GetMessagesUseCase（履歴取得のユースケース）
    pub get_messages_usecase: Arc<GetMessagesUseCase>,
    /// GetUsersUseCase（参加者一覧取得のユースケース）
    pub get_users_usecase: Arc<GetUsersUseCase>,
    /// GetTypingUsersUseCase（入力中ユーザー取得のユースケース）
    pub get_typing_users_usecase: Arc<GetTypingUsersUseCase>,
}

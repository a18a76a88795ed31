//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_client;
mod delivery;
pub mod disconnect_client;
pub mod dispatch_event;
pub mod error;
pub mod get_messages;
pub mod get_presence;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use dispatch_event::DispatchEventUseCase;
pub use error::ConnectError;
pub use get_messages::GetMessagesUseCase;
pub use get_presence::{GetTypingUsersUseCase, GetUsersUseCase};

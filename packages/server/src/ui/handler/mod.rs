//! HTTP and WebSocket handlers.

mod http;
mod websocket;

pub use http::{get_messages, get_typing_users, get_users, health_check, root};
pub use websocket::websocket_handler;

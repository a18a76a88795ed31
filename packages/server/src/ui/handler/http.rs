//! HTTP API endpoint handlers (read-side snapshots).

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::model::{IdentityDto, MessageDto},
    ui::state::AppState,
};

/// Plain-text banner
pub async fn root() -> &'static str {
    "Huddle chat server is running"
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Message history, oldest first
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDto>> {
    let messages = state.get_messages_usecase.execute().await;
    Json(messages.iter().map(MessageDto::from).collect())
}

/// Current roster
pub async fn get_users(State(state): State<Arc<AppState>>) -> Json<Vec<IdentityDto>> {
    let users = state.get_users_usecase.execute().await;
    Json(users.iter().map(IdentityDto::from).collect())
}

/// Names of users currently typing
pub async fn get_typing_users(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let typing = state.get_typing_users_usecase.execute().await;
    Json(typing.iter().map(|name| name.as_str().to_string()).collect())
}

//! JSON shapes of domain entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A present user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDto {
    pub id: String,
    pub username: String,
}

/// A chat message as seen by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub sender: String,
    pub sender_id: String,
    pub body: String,
    /// RFC 3339 (UTC)
    pub timestamp: String,
    pub is_private: bool,
    /// Reaction symbol to reactor connection ids
    pub reactions: BTreeMap<String, Vec<String>>,
    pub read_by: Vec<String>,
}

/// Payload of `reaction_added` / `reaction_removed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionDto {
    pub message_id: u64,
    pub symbol: String,
    pub user_id: String,
}

/// Payload of `message_read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadReceiptDto {
    pub message_id: u64,
    pub user_id: String,
}

/// Payload of `connected`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedDto {
    pub id: String,
}

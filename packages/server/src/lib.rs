//! Real-time chat hub library.
//!
//! Tracks connected identities, typing state and a bounded message history,
//! and fans events out to the right WebSocket connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;

//! Data Transfer Objects (DTOs) for the chat hub.
//!
//! DTOs are organized by concern:
//! - `model`: JSON shapes of domain entities, shared by WebSocket and HTTP
//! - `websocket`: WebSocket event envelopes
//! - `conversion`: mapping between DTOs and domain types

pub mod conversion;
pub mod model;
pub mod websocket;

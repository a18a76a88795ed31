//! Infrastructure layer: wire formats and transport-facing implementations of domain traits.

pub mod dto;
pub mod message_pusher;

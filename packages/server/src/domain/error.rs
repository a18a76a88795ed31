//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// ConnectionId too long error
    #[error("ConnectionId cannot exceed {max} characters (got {actual})")]
    ConnectionIdTooLong { max: usize, actual: usize },

    /// MessageBody validation error (empty or whitespace only)
    #[error("MessageBody cannot be blank")]
    MessageBodyBlank,
}

/// Errors raised while pushing outbound events to connections
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagePushError {
    /// Target connection is not registered
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// The connection's channel is closed
    #[error("Push failed: {0}")]
    PushFailed(String),

    /// The event could not be encoded for the wire
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

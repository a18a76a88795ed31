//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::MessagePushError;

/// Errors from [`super::ConnectClientUseCase`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The greeting could not be delivered to the new connection
    #[error("Failed to greet connection '{client_id}': {source}")]
    GreetingFailed {
        client_id: String,
        #[source]
        source: MessagePushError,
    },
}

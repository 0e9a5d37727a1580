//! Error types for the transport layer.

use pendu_core::MessageId;

/// Errors that can occur delivering messages to a room.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The platform answered "too many requests". Retryable.
    #[error("rate limited by the chat platform")]
    RateLimited,

    /// The message to edit no longer exists (deleted, or never posted).
    #[error("message {0} not found")]
    UnknownMessage(MessageId),

    /// Any other platform rejection. Not retryable.
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

impl TransportError {
    /// Whether re-attempting the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

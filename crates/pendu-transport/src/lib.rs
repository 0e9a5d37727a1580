//! Chat delivery seam.
//!
//! The game never talks to the chat platform directly. It goes through
//! [`ChatTransport`], which can post a message to a room and edit one it
//! posted earlier. The platform integration implements this trait; tests
//! and demos use [`MemoryTransport`].
//!
//! Rate limiting is handled by wrapping any transport in [`Retrying`],
//! which backs off and re-attempts on [`TransportError::RateLimited`].

#![allow(async_fn_in_trait)]

mod error;
mod memory;
mod retry;

pub use error::TransportError;
pub use memory::{MemoryTransport, SentMessage};
pub use retry::{RetryPolicy, Retrying};

use pendu_core::{MessageId, RoomId};

/// Outbound message delivery to chat rooms.
///
/// Implementations perform one attempt per call; retry policy is layered
/// on top (see [`Retrying`]).
pub trait ChatTransport: Send + Sync {
    /// Posts `content` to `room`, returning a handle for later edits.
    fn send(
        &self,
        room: RoomId,
        content: &str,
    ) -> impl std::future::Future<Output = Result<MessageId, TransportError>> + Send;

    /// Replaces the content of a previously posted message.
    fn edit(
        &self,
        room: RoomId,
        message: MessageId,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}

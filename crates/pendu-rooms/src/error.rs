//! Error types for the session layer.

use pendu_core::RoomId;

/// Errors that can occur starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    /// The room already hosts an active game. Surfaced to the player;
    /// the existing session is left untouched.
    #[error("a game is already running in {0}")]
    AlreadyInProgress(RoomId),
}

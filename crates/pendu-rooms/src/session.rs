//! Session types: one running game bound to a room.

use std::time::Instant;

use pendu_core::{MessageId, PlayerId, RoomId};
use pendu_game::Hangman;
use serde::{Deserialize, Serialize};

/// Who is allowed to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Only the player who started the game may guess.
    Solo,
    /// Any room member may guess.
    Multi,
}

/// One game instance bound to a room.
///
/// Created by [`SessionManager::start`](crate::SessionManager::start),
/// mutated by accepted guesses, destroyed on win, loss, or inactivity.
#[derive(Debug)]
pub struct GameSession {
    pub room: RoomId,
    /// The player who started the game. Gates guesses in solo mode.
    pub owner: PlayerId,
    pub mode: GameMode,
    pub game: Hangman,
    /// The posted board, once the transport has delivered it. Later
    /// accepted guesses edit this message instead of reposting.
    pub board_message: Option<MessageId>,
    /// Refreshed on every accepted guess; drives the inactivity sweep.
    pub last_activity: Instant,
}

impl GameSession {
    pub(crate) fn new(
        room: RoomId,
        owner: PlayerId,
        mode: GameMode,
        game: Hangman,
        now: Instant,
    ) -> Self {
        Self {
            room,
            owner,
            mode,
            game,
            board_message: None,
            last_activity: now,
        }
    }

    /// Whether `player` may guess in this session. Multi mode admits
    /// everyone; solo mode admits only the owner.
    pub fn may_guess(&self, player: PlayerId) -> bool {
        self.mode == GameMode::Multi || player == self.owner
    }
}

//! Session manager: creates, tracks, and routes guesses to sessions.

use std::collections::HashMap;
use std::time::Instant;

use pendu_core::{MessageId, PlayerId, RoomId, normalize};
use pendu_game::{GameStatus, GuessError, GuessOutcome, Hangman, board_text};
use pendu_words::{WordEntry, fallback};

use crate::{GameMode, GameSession, SessionConfig, StartError};

/// The answer to a submitted chat message.
#[derive(Debug)]
pub enum GuessReply {
    /// Not game input: no session in the room, not exactly one alphabetic
    /// character, or a non-owner in solo mode. Callers stay silent, since
    /// unrelated chat must not draw error messages.
    Ignored,

    /// The letter was already tried. Surfaced to the player.
    AlreadyGuessed(char),

    /// The guess was accepted and the session mutated.
    Accepted {
        outcome: GuessOutcome,
        /// Freshly rendered board, ready for the transport.
        board: String,
        /// Board message to edit, when one was posted.
        board_message: Option<MessageId>,
        /// Present when this guess ended the game. The session has
        /// already been removed from the manager.
        finished: Option<FinishedGame>,
    },
}

/// Terminal result of a session, returned alongside the final board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedGame {
    pub status: GameStatus,
    /// The revealed word, for the win/lose notice.
    pub display_word: String,
}

/// A session removed by the inactivity sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredSession {
    pub room: RoomId,
    pub display_word: String,
    pub board_message: Option<MessageId>,
}

/// Maintains the room → session mapping and enforces one game per room.
pub struct SessionManager {
    sessions: HashMap<RoomId, GameSession>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Creates a session for `room` from an already-fetched word.
    ///
    /// Rejects with [`StartError::AlreadyInProgress`] when the room has a
    /// session, leaving it untouched. Candidates shorter than the
    /// configured minimum (normalized) are replaced from the fallback
    /// list, so the session always starts with a playable word.
    pub fn start(
        &mut self,
        room: RoomId,
        owner: PlayerId,
        mode: GameMode,
        entry: WordEntry,
        now: Instant,
    ) -> Result<&GameSession, StartError> {
        if self.sessions.contains_key(&room) {
            return Err(StartError::AlreadyInProgress(room));
        }

        let entry = if normalize(&entry.display).chars().count()
            < self.config.min_word_len
        {
            tracing::warn!(
                %room,
                word = %entry.display,
                "candidate word too short, drawing from fallback list"
            );
            fallback::fallback_entry()
        } else {
            entry
        };

        let game =
            Hangman::new(entry.display, entry.hint, self.config.max_mistakes);
        tracing::info!(%room, %owner, ?mode, "game started");
        Ok(self
            .sessions
            .entry(room)
            .or_insert(GameSession::new(room, owner, mode, game, now)))
    }

    /// Routes one chat message to the room's session, if any.
    ///
    /// Input that is not a guess, or a guess from a non-owner in solo
    /// mode, comes back as [`GuessReply::Ignored`]. Accepted guesses
    /// refresh the activity timestamp; duplicates do not. A terminal
    /// outcome removes the session before returning.
    pub fn submit_guess(
        &mut self,
        room: RoomId,
        player: PlayerId,
        input: &str,
        now: Instant,
    ) -> GuessReply {
        let Some(session) = self.sessions.get_mut(&room) else {
            return GuessReply::Ignored;
        };
        if !session.may_guess(player) {
            tracing::trace!(%room, %player, "guess from non-owner ignored");
            return GuessReply::Ignored;
        }
        let Some(letter) = single_letter(input) else {
            return GuessReply::Ignored;
        };

        match session.game.guess(letter) {
            Err(GuessError::AlreadyGuessed(letter)) => {
                GuessReply::AlreadyGuessed(letter)
            }
            // Terminal sessions are removed on the guess that ended them,
            // and the letter filter precedes normalization, so neither
            // error can reach a live session. Treat them as noise.
            Err(GuessError::GameOver | GuessError::NotALetter(_)) => {
                GuessReply::Ignored
            }
            Ok(outcome) => {
                session.last_activity = now;
                let board = board_text(&session.game);
                let board_message = session.board_message;
                let finished = outcome.is_terminal().then(|| FinishedGame {
                    status: session.game.status(),
                    display_word: session.game.display_word().to_string(),
                });
                if finished.is_some() {
                    self.sessions.remove(&room);
                    tracing::info!(%room, ?outcome, "game finished");
                }
                GuessReply::Accepted {
                    outcome,
                    board,
                    board_message,
                    finished,
                }
            }
        }
    }

    /// Removes and returns every session quiet for longer than the
    /// inactivity timeout. Pure bookkeeping: the caller owns the timer
    /// and delivers the timeout notices.
    pub fn sweep_inactive(&mut self, now: Instant) -> Vec<ExpiredSession> {
        let timeout = self.config.inactivity_timeout;
        let stale: Vec<RoomId> = self
            .sessions
            .iter()
            .filter(|(_, s)| now.duration_since(s.last_activity) > timeout)
            .map(|(room, _)| *room)
            .collect();

        stale
            .into_iter()
            .filter_map(|room| {
                self.sessions.remove(&room).map(|s| {
                    tracing::info!(%room, "session expired after inactivity");
                    ExpiredSession {
                        room,
                        display_word: s.game.display_word().to_string(),
                        board_message: s.board_message,
                    }
                })
            })
            .collect()
    }

    /// Records the posted board message for later edits.
    pub fn set_board_message(&mut self, room: RoomId, message: MessageId) {
        if let Some(session) = self.sessions.get_mut(&room) {
            session.board_message = Some(message);
        }
    }

    pub fn get(&self, room: RoomId) -> Option<&GameSession> {
        self.sessions.get(&room)
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.sessions.contains_key(&room)
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Rooms currently hosting a game.
    pub fn active_rooms(&self) -> Vec<RoomId> {
        self.sessions.keys().copied().collect()
    }
}

/// Extracts the guess from a chat message: exactly one alphabetic
/// character after trimming, or nothing.
fn single_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_accepts_trimmed_alphabetic_char() {
        assert_eq!(single_letter("k"), Some('k'));
        assert_eq!(single_letter("  é "), Some('é'));
    }

    #[test]
    fn test_single_letter_rejects_everything_else() {
        assert_eq!(single_letter(""), None);
        assert_eq!(single_letter("ab"), None);
        assert_eq!(single_letter("3"), None);
        assert_eq!(single_letter("!"), None);
        assert_eq!(single_letter("nice play"), None);
    }
}

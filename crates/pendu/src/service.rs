//! The game service: wires sessions, words, and delivery together.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pendu_core::{PlayerId, RoomId};
use pendu_game::{GameStatus, board_text};
use pendu_rooms::{
    GameMode, GuessReply, SessionConfig, SessionManager, StartError,
};
use pendu_transport::{ChatTransport, RetryPolicy, Retrying};
use pendu_words::{WordSource, fallback};
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

/// Service-level settings.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub sessions: SessionConfig,
    /// Backoff policy applied to every transport call.
    pub retry: RetryPolicy,
    /// Cadence of the inactivity sweep.
    pub sweep_interval: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sessions: SessionConfig::default(),
            retry: RetryPolicy::default(),
            sweep_interval: Duration::from_secs(30),
        }
    }
}

/// Result of a start command, for the host layer's bookkeeping. The
/// player-facing rejection notice has already been posted either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyInProgress,
}

const ALREADY_RUNNING: &str = "❌ A game is already running in this room.";

struct Inner<S, T> {
    sessions: Mutex<SessionManager>,
    words: S,
    transport: Retrying<T>,
    sweep_interval: Duration,
}

/// Orchestrates games across rooms.
///
/// Cheap to clone (shared state behind an `Arc`); hand clones to the
/// message-dispatch layer and to the sweeper task.
///
/// All session mutation happens under one async mutex, so operations
/// behave as if on a single logical thread: guesses are processed in
/// arrival order per room, and a `start_game` that is still fetching its
/// word already holds the lock, so a concurrent second start blocks and
/// then observes the session.
pub struct GameService<S, T> {
    inner: Arc<Inner<S, T>>,
}

impl<S, T> Clone for GameService<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, T> GameService<S, T>
where
    S: WordSource,
    T: ChatTransport,
{
    /// Creates a service with default configuration.
    pub fn new(words: S, transport: T) -> Self {
        Self::with_config(words, transport, ServiceConfig::default())
    }

    pub fn with_config(words: S, transport: T, config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                sessions: Mutex::new(SessionManager::new(config.sessions)),
                words,
                transport: Retrying::with_policy(transport, config.retry),
                sweep_interval: config.sweep_interval,
            }),
        }
    }

    /// The underlying transport, behind its retry wrapper.
    pub fn transport(&self) -> &Retrying<T> {
        &self.inner.transport
    }

    /// Starts a solo game in `room`, owned by `player`.
    pub async fn start_game(
        &self,
        room: RoomId,
        player: PlayerId,
    ) -> StartOutcome {
        self.start_game_in_mode(room, player, GameMode::Solo).await
    }

    /// Starts a game in the given mode.
    ///
    /// Fetches a word (falling back to the fixed list on lookup failure),
    /// creates the session, and posts the opening board. A room with a
    /// running game gets a visible rejection instead.
    pub async fn start_game_in_mode(
        &self,
        room: RoomId,
        player: PlayerId,
        mode: GameMode,
    ) -> StartOutcome {
        let mut sessions = self.inner.sessions.lock().await;
        if sessions.contains(room) {
            self.post_notice(room, ALREADY_RUNNING).await;
            return StartOutcome::AlreadyInProgress;
        }

        // The lock is held across this await on purpose: no session exists
        // for the room yet, and any competing start is parked on the mutex
        // until ours is inserted.
        let entry = match self.inner.words.random_word().await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(
                    %room,
                    error = %e,
                    "word lookup failed, drawing from fallback list"
                );
                fallback::fallback_entry()
            }
        };

        let board =
            match sessions.start(room, player, mode, entry, Instant::now()) {
                Ok(session) => board_text(&session.game),
                Err(StartError::AlreadyInProgress(_)) => {
                    // Unreachable while the lock is held; kept as a guard.
                    self.post_notice(room, ALREADY_RUNNING).await;
                    return StartOutcome::AlreadyInProgress;
                }
            };

        match self.inner.transport.send(room, &board).await {
            Ok(id) => sessions.set_board_message(room, id),
            Err(e) => {
                // The game stands; the next accepted guess reposts a board.
                tracing::error!(%room, error = %e, "failed to post board");
            }
        }
        StartOutcome::Started
    }

    /// Feeds one chat message through the guess pipeline.
    ///
    /// Messages that are not guesses are ignored without a reply, so
    /// normal conversation can continue around a running game.
    pub async fn handle_chat_message(
        &self,
        room: RoomId,
        player: PlayerId,
        content: &str,
    ) {
        let mut sessions = self.inner.sessions.lock().await;
        match sessions.submit_guess(room, player, content, Instant::now()) {
            GuessReply::Ignored => {}
            GuessReply::AlreadyGuessed(letter) => {
                self.post_notice(
                    room,
                    &format!("❌ Letter `{letter}` was already tried."),
                )
                .await;
            }
            GuessReply::Accepted {
                board,
                board_message,
                finished,
                ..
            } => {
                match board_message {
                    Some(id) => {
                        if let Err(e) =
                            self.inner.transport.edit(room, id, &board).await
                        {
                            tracing::error!(
                                %room, error = %e, "failed to edit board"
                            );
                        }
                    }
                    // The opening post failed earlier; repost instead.
                    None => match self.inner.transport.send(room, &board).await
                    {
                        Ok(id) => sessions.set_board_message(room, id),
                        Err(e) => tracing::error!(
                            %room, error = %e, "failed to repost board"
                        ),
                    },
                }

                if let Some(finished) = finished {
                    let notice = if finished.status == GameStatus::Won {
                        format!(
                            "🎉 {player} found it! The word was {}.",
                            finished.display_word
                        )
                    } else {
                        format!(
                            "💀 Out of guesses! The word was {}.",
                            finished.display_word
                        )
                    };
                    self.post_notice(room, &notice).await;
                }
            }
        }
    }

    /// Runs one inactivity sweep, posting a timeout notice per expired
    /// session. Returns the rooms that were cleaned up.
    pub async fn sweep_once(&self) -> Vec<RoomId> {
        let expired = {
            let mut sessions = self.inner.sessions.lock().await;
            sessions.sweep_inactive(Instant::now())
        };

        let mut rooms = Vec::with_capacity(expired.len());
        for session in expired {
            self.post_notice(
                session.room,
                &format!(
                    "⏰ Game closed after inactivity. The word was {}.",
                    session.display_word
                ),
            )
            .await;
            rooms.push(session.room);
        }
        rooms
    }

    /// Drives [`sweep_once`](Self::sweep_once) on the configured interval,
    /// forever. Spawn this on a clone of the service.
    pub async fn run_sweeper(self) {
        let mut ticker = tokio::time::interval(self.inner.sweep_interval);
        // Skip missed ticks rather than bursting to catch up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let swept = self.sweep_once().await;
            if !swept.is_empty() {
                tracing::debug!(rooms = swept.len(), "inactivity sweep");
            }
        }
    }

    /// Number of rooms with a running game.
    pub async fn session_count(&self) -> usize {
        self.inner.sessions.lock().await.len()
    }

    async fn post_notice(&self, room: RoomId, content: &str) {
        if let Err(e) = self.inner.transport.send(room, content).await {
            tracing::error!(%room, error = %e, "failed to post notice");
        }
    }
}

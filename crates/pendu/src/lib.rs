//! # pendu
//!
//! A chat-room hangman engine. One game per room, single-letter guesses
//! from chat messages, a card database as the word source, and an
//! inactivity sweep that closes abandoned games.
//!
//! The host chat integration drives [`GameService`] with exactly two
//! calls: [`GameService::start_game`] when a player invokes the start
//! command, and [`GameService::handle_chat_message`] for every message in
//! a room. Everything else (word lookup with fallback, board rendering,
//! rate-limited delivery, session expiry) happens behind those calls.
//!
//! ```rust,no_run
//! use pendu::{FallbackWords, GameService, MemoryTransport, PlayerId, RoomId};
//!
//! # async fn run() {
//! let service = GameService::new(FallbackWords, MemoryTransport::new());
//! tokio::spawn(service.clone().run_sweeper());
//!
//! service.start_game(RoomId(1), PlayerId(42)).await;
//! service.handle_chat_message(RoomId(1), PlayerId(42), "e").await;
//! # }
//! ```

mod service;

pub use service::{GameService, ServiceConfig, StartOutcome};

pub use pendu_core::{MessageId, PlayerId, RoomId};
pub use pendu_game::{GameStatus, GuessOutcome, board_text};
pub use pendu_rooms::{GameMode, SessionConfig, SessionManager};
pub use pendu_transport::{
    ChatTransport, MemoryTransport, RetryPolicy, Retrying, TransportError,
};
pub use pendu_words::{
    CardWordSource, FallbackWords, WordEntry, WordError, WordSource,
};

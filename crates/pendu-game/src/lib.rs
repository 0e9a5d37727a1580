//! The hangman state machine.
//!
//! A [`Hangman`] owns one word-guessing game: the secret word (normalized
//! for comparison), the original-case display word, the disjoint sets of
//! correct and wrong letters, and the forward-only
//! `InProgress → Won | Lost` status.
//!
//! This crate is pure: no I/O, no clocks, no room bookkeeping. Who may
//! guess, when a game expires, and where the board goes are decided by the
//! layers above.

mod error;
mod game;
mod render;

pub use error::GuessError;
pub use game::{DEFAULT_MAX_MISTAKES, GameStatus, GuessOutcome, Hangman, MASK};
pub use render::{board_text, gallows_stage};

//! Shared foundation types for the pendu stack.
//!
//! This crate defines the identifiers that every other layer speaks
//! (rooms, players, and messages on the host chat platform), plus the one
//! text normalization function used for accent-insensitive letter
//! comparison.
//!
//! Normalization lives here, and only here, so that secret words, display
//! words, and guesses all go through the exact same folding. A second,
//! subtly different implementation anywhere else would let the displayed
//! word and the compared word drift apart.

mod ids;
mod normalize;

pub use ids::{MessageId, PlayerId, RoomId};
pub use normalize::{normalize, normalize_letter};

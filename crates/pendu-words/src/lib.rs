//! Word sources: where the secret words come from.
//!
//! The production source draws a random card from the card database and
//! turns its name into the secret word, with the card's type line as the
//! hint. The lookup is a single HTTP attempt; when anything about it
//! fails, callers recover from the fixed [`fallback`] list instead of
//! surfacing an error to players.

#![allow(async_fn_in_trait)]

mod card;
pub mod fallback;
mod source;

pub use card::CardWordSource;
pub use fallback::{FALLBACK_WORDS, FallbackWords};
pub use source::{WordEntry, WordError, WordSource};

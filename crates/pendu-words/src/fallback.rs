//! Fixed fallback word list.
//!
//! Used whenever the card lookup fails or yields an unusable name. Every
//! entry is a well-known card with a name of at least three normalized
//! characters, so the fallback never needs validating.

use rand::Rng;

use crate::{WordEntry, WordSource};

/// The five (word, hint) pairs the game can always draw from.
pub const FALLBACK_WORDS: [(&str, &str); 5] = [
    ("Dragon Blanc aux Yeux Bleus", "Monstre / LUMIÈRE"),
    ("Magicien Sombre", "Magicien / TÉNÈBRES"),
    ("Kuriboh", "Monstre / TÉNÈBRES"),
    ("Pot de Cupidité", "Magie"),
    ("Force de Miroir", "Piège"),
];

/// Picks a random entry from [`FALLBACK_WORDS`].
pub fn fallback_entry() -> WordEntry {
    let idx = rand::rng().random_range(0..FALLBACK_WORDS.len());
    let (display, hint) = FALLBACK_WORDS[idx];
    WordEntry::new(display, Some(hint.to_string()))
}

/// A [`WordSource`] that only ever serves the fallback list. Handy for
/// offline use and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackWords;

impl WordSource for FallbackWords {
    async fn random_word(&self) -> Result<WordEntry, crate::WordError> {
        Ok(fallback_entry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_entries_are_long_enough_to_play() {
        for (word, _) in FALLBACK_WORDS {
            assert!(word.chars().count() >= 3, "{word} is too short");
        }
    }

    #[test]
    fn test_fallback_entry_always_carries_a_hint() {
        for _ in 0..20 {
            let entry = fallback_entry();
            assert!(entry.hint.is_some());
            assert!(!entry.display.is_empty());
        }
    }

    #[tokio::test]
    async fn test_fallback_source_never_fails() {
        let source = FallbackWords;
        let entry = source.random_word().await.expect("infallible");
        assert!(FALLBACK_WORDS.iter().any(|(w, _)| *w == entry.display));
    }
}

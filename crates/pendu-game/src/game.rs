//! Game state and guess evaluation.

use std::collections::BTreeSet;

use pendu_core::{normalize, normalize_letter};
use serde::{Deserialize, Serialize};

use crate::GuessError;

/// Wrong guesses allowed before the game is lost.
pub const DEFAULT_MAX_MISTAKES: usize = 7;

/// Placeholder glyph for letters not yet revealed.
pub const MASK: char = '★';

/// Characters that pass through the mask unhidden and never need to be
/// guessed: word separators in multi-word card names.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '\'')
}

// ---------------------------------------------------------------------------
// Status and outcome
// ---------------------------------------------------------------------------

/// Lifecycle state of a game.
///
/// Transitions only forward: `InProgress → Won` or `InProgress → Lost`.
/// A terminal game never reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Returns `true` once the game has been won or lost.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Letter is in the word; game continues.
    Hit,
    /// Letter is not in the word; game continues.
    Miss,
    /// Letter completed the word.
    Won,
    /// Letter was the final allowed mistake.
    Lost,
}

impl GuessOutcome {
    /// Returns `true` if this guess ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

// ---------------------------------------------------------------------------
// Hangman
// ---------------------------------------------------------------------------

/// One word-guessing game.
///
/// The secret is the normalized form of the display word; every guess is
/// normalized the same way before comparison, so `e` matches `é` and the
/// board still shows the accented original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hangman {
    /// Original-case word shown to players.
    display_word: String,
    /// Normalized (diacritics stripped, lowercased) comparison target.
    secret: String,
    /// Optional descriptive hint shown on the board.
    hint: Option<String>,
    /// Normalized letters confirmed present in the secret.
    found: BTreeSet<char>,
    /// Normalized letters confirmed absent from the secret.
    missed: BTreeSet<char>,
    status: GameStatus,
    max_mistakes: usize,
}

impl Hangman {
    /// Creates a game for `display_word`, deriving the secret from it.
    pub fn new(
        display_word: impl Into<String>,
        hint: Option<String>,
        max_mistakes: usize,
    ) -> Self {
        let display_word = display_word.into();
        let secret = normalize(&display_word);
        Self {
            display_word,
            secret,
            hint,
            found: BTreeSet::new(),
            missed: BTreeSet::new(),
            status: GameStatus::InProgress,
            max_mistakes,
        }
    }

    /// Evaluates one guessed character.
    ///
    /// The character is normalized before comparison. Duplicates are
    /// rejected with [`GuessError::AlreadyGuessed`] and leave both guess
    /// sets untouched; guesses against a terminal game are rejected with
    /// [`GuessError::GameOver`].
    pub fn guess(&mut self, raw: char) -> Result<GuessOutcome, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }
        let letter =
            normalize_letter(raw).ok_or(GuessError::NotALetter(raw))?;
        if self.found.contains(&letter) || self.missed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let hit = self.secret.contains(letter);
        if hit {
            self.found.insert(letter);
        } else {
            self.missed.insert(letter);
        }

        if self.all_letters_found() {
            self.status = GameStatus::Won;
            Ok(GuessOutcome::Won)
        } else if self.missed.len() >= self.max_mistakes {
            self.status = GameStatus::Lost;
            Ok(GuessOutcome::Lost)
        } else if hit {
            Ok(GuessOutcome::Hit)
        } else {
            Ok(GuessOutcome::Miss)
        }
    }

    /// Every alphabetic character of the secret is in `found`.
    /// Separators and digits never need to be guessed.
    fn all_letters_found(&self) -> bool {
        self.secret
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.found.contains(&c))
    }

    /// The display word with unguessed letters masked.
    ///
    /// Separators pass through; any other character is revealed in its
    /// original form once its normalized form has been found.
    pub fn masked_word(&self) -> String {
        self.display_word
            .chars()
            .map(|c| {
                if is_separator(c) {
                    c
                } else {
                    match normalize_letter(c) {
                        Some(n) if self.found.contains(&n) => c,
                        _ => MASK,
                    }
                }
            })
            .collect()
    }

    /// All letters tried so far, ascending.
    pub fn attempted_letters(&self) -> Vec<char> {
        self.found.union(&self.missed).copied().collect()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of wrong guesses so far.
    pub fn mistakes(&self) -> usize {
        self.missed.len()
    }

    pub fn max_mistakes(&self) -> usize {
        self.max_mistakes
    }

    pub fn display_word(&self) -> &str {
        &self.display_word
    }

    /// The normalized comparison target.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

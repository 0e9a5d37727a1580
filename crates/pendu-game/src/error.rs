//! Error types for the game layer.

/// Errors a guess can produce.
///
/// `AlreadyGuessed` is the only variant surfaced to players; the others
/// guard the state machine against misuse by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// The letter is already in one of the two guess sets. Carries the
    /// normalized letter so the notice can echo it back.
    #[error("letter `{0}` was already tried")]
    AlreadyGuessed(char),

    /// The game has reached `Won` or `Lost`; terminal states never accept
    /// further guesses.
    #[error("the game is already over")]
    GameOver,

    /// The character folds away entirely under normalization (a lone
    /// combining mark), so there is nothing to compare.
    #[error("`{0}` does not normalize to a letter")]
    NotALetter(char),
}

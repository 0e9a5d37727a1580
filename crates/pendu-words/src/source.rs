//! The `WordSource` trait and its data types.

/// A candidate secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Original-case word as shown to players.
    pub display: String,
    /// Optional hint line shown on the board.
    pub hint: Option<String>,
}

impl WordEntry {
    pub fn new(display: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            display: display.into(),
            hint,
        }
    }
}

/// Errors a word lookup can produce.
///
/// None of these reach players: the session layer falls back to the fixed
/// word list whenever a lookup fails.
#[derive(Debug, thiserror::Error)]
pub enum WordError {
    /// The HTTP request failed (network, status, or body decode).
    #[error("card lookup failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup succeeded but returned no cards to pick from.
    #[error("card catalogue returned no entries")]
    EmptyCatalogue,
}

/// Supplies random secret words.
///
/// One underlying attempt per call; retry and fallback policy belong to
/// the caller. `Send + Sync` so a source can be shared by the service
/// across tasks.
pub trait WordSource: Send + Sync {
    /// Fetches one random word.
    fn random_word(
        &self,
    ) -> impl std::future::Future<Output = Result<WordEntry, WordError>> + Send;
}

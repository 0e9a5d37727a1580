//! Session management configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for session lifecycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Wrong guesses allowed before a game is lost.
    pub max_mistakes: usize,

    /// Minimum normalized length of an acceptable secret word. Shorter
    /// candidates are replaced from the fallback list.
    pub min_word_len: usize,

    /// How long a session may go without an accepted guess before the
    /// sweep removes it.
    pub inactivity_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_mistakes: pendu_game::DEFAULT_MAX_MISTAKES,
            min_word_len: 3,
            inactivity_timeout: Duration::from_secs(180),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.max_mistakes, 7);
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.inactivity_timeout, Duration::from_secs(180));
    }
}

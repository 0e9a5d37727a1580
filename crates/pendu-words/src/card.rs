//! Card-database-backed word source.

use rand::Rng;
use serde::Deserialize;

use crate::{WordEntry, WordError, WordSource};

/// Random-card lookup against the French card catalogue.
const DEFAULT_ENDPOINT: &str =
    "https://db.ygoprodeck.com/api/v7/cardinfo.php?language=fr";

/// Draws a random card and offers its name as the secret word, with a hint
/// assembled from the card's type line.
///
/// One HTTP attempt per call, no retry: a failed lookup is reported as a
/// [`WordError`] and the caller recovers from the fallback list.
#[derive(Debug, Clone)]
pub struct CardWordSource {
    client: reqwest::Client,
    endpoint: String,
}

/// The handful of response fields the hint needs. Everything else in the
/// card payload is ignored.
#[derive(Debug, Deserialize)]
struct Card {
    name: String,
    #[serde(rename = "type")]
    card_type: Option<String>,
    attribute: Option<String>,
    archetype: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardPage {
    #[serde(default)]
    data: Vec<Card>,
}

impl CardWordSource {
    /// Creates a source against the default catalogue endpoint.
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DEFAULT_ENDPOINT)
    }

    /// Creates a source against a custom endpoint (tests, mirrors).
    pub fn with_endpoint(
        client: reqwest::Client,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl WordSource for CardWordSource {
    async fn random_word(&self) -> Result<WordEntry, WordError> {
        let page: CardPage = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if page.data.is_empty() {
            return Err(WordError::EmptyCatalogue);
        }
        let idx = rand::rng().random_range(0..page.data.len());
        let card = &page.data[idx];

        tracing::debug!(card = %card.name, "picked random card");
        Ok(WordEntry::new(card.name.trim(), hint_line(card)))
    }
}

/// Builds the hint from the card's type, attribute, and archetype,
/// joined with ` / ` in that order, skipping absent fields.
fn hint_line(card: &Card) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(card_type) = &card.card_type {
        parts.push(card_type.as_str());
    }
    if let Some(attribute) = &card.attribute {
        parts.push(attribute.as_str());
    }
    if let Some(archetype) = &card.archetype {
        parts.push(archetype.as_str());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}

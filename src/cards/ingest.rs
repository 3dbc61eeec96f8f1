//! Catalog ingestion from the REST API's JSON payloads.
//!
//! Ingestion is the only place that reads rules text. Keywords the engine
//! cares about are turned into flags here (`Card::is_rally`), so the
//! engine never parses free text.

use serde_json::Error as JsonError;
use thiserror::Error;

use super::card::{Card, CardId};
use super::registry::CardRegistry;
use crate::formats::Format;

/// Marker in rules text identifying the Rally keyword.
pub const RALLY_MARKER: &str = "Rally.";

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Malformed catalog data: {0}")]
    Json(#[from] JsonError),

    #[error("Card with ID {0} already registered")]
    DuplicateCard(CardId),
}

/// Set keyword flags derived from rules text.
///
/// A flag already present in the data is kept.
pub fn tag_keywords(card: &mut Card) {
    if let Some(text) = &card.text {
        card.is_rally |= text.contains(RALLY_MARKER);
    }
}

/// Build a registry from a JSON array of card records.
pub fn catalog_from_json(json: &str) -> Result<CardRegistry, IngestError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    catalog_from_cards(cards)
}

/// Build a registry from already-decoded cards, tagging keywords.
pub fn catalog_from_cards(cards: impl IntoIterator<Item = Card>) -> Result<CardRegistry, IngestError> {
    let mut registry = CardRegistry::new();
    for mut card in cards {
        tag_keywords(&mut card);
        registry.try_register(card)?;
    }
    Ok(registry)
}

/// Decode a JSON array of formats.
pub fn formats_from_json(json: &str) -> Result<Vec<Format>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

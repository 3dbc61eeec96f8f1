//! Card registry (the catalog) for card lookup.
//!
//! The `CardRegistry` stores every card known to the deck builder.
//! It provides fast lookup by `CardId` and supports iteration.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, CardType, Side};
use super::ingest::IngestError;

/// Registry of catalog cards.
///
/// Cards are stored behind `Arc` so that deck statistics can hand them out
/// without copying card data.
///
/// ## Example
///
/// ```
/// use l5r_deckcheck::cards::{Card, CardId, CardRegistry, CardType, Side};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new("banzai", "Banzai!", Side::Conflict, CardType::Event, "neutral"));
///
/// let found = registry.get(&CardId::new("banzai")).unwrap();
/// assert_eq!(found.name, "Banzai!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<Card>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if let Err(err) = self.try_register(card) {
            panic!("{err}");
        }
    }

    /// Register a card, reporting a duplicate ID as an error.
    pub fn try_register(&mut self, card: Card) -> Result<(), IngestError> {
        if self.cards.contains_key(&card.id) {
            return Err(IngestError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id.clone(), Arc::new(card));
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values()
    }

    /// Find cards by printed type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }

    /// Find cards by deck side.
    pub fn find_by_side(&self, side: Side) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values().filter(move |c| c.side == side)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl FromIterator<Card> for CardRegistry {
    /// Collect cards into a registry. Later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let cards = iter
            .into_iter()
            .map(|card| (card.id.clone(), Arc::new(card)))
            .collect();
        Self { cards }
    }
}

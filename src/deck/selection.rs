//! Deck selection - the card quantity map owned by the editor.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Mapping from card to copies in the deck.
///
/// Backed by a persistent ordered map: cloning is O(1), which lets the
/// editor keep undo snapshots, and iteration is always sorted by card id,
/// which keeps every derived list in a stable order.
///
/// `set` never stores a zero quantity; zeros arriving through
/// deserialization are ignored by the partitioner.
///
/// ## Example
///
/// ```
/// use l5r_deckcheck::cards::CardId;
/// use l5r_deckcheck::deck::DeckSelection;
///
/// let mut deck = DeckSelection::new();
/// deck.set("banzai", 3);
/// deck.set("banzai", 0);
///
/// assert!(deck.is_empty());
/// assert_eq!(deck.quantity(&CardId::new("banzai")), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckSelection {
    cards: OrdMap<CardId, u32>,
}

impl DeckSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity of a card. Zero removes it.
    pub fn set(&mut self, card: impl Into<CardId>, quantity: u32) {
        let card = card.into();
        if quantity == 0 {
            self.cards.remove(&card);
        } else {
            self.cards.insert(card, quantity);
        }
    }

    /// Set a quantity (builder pattern).
    #[must_use]
    pub fn with(mut self, card: impl Into<CardId>, quantity: u32) -> Self {
        self.set(card, quantity);
        self
    }

    /// Add copies of a card.
    pub fn add(&mut self, card: impl Into<CardId>, copies: u32) {
        let card = card.into();
        let quantity = self.quantity(&card).saturating_add(copies);
        self.set(card, quantity);
    }

    /// Remove every copy of a card, returning the old quantity.
    pub fn remove(&mut self, card: &CardId) -> u32 {
        self.cards.remove(card).unwrap_or(0)
    }

    /// Copies of a card in the deck (0 if absent).
    #[must_use]
    pub fn quantity(&self, card: &CardId) -> u32 {
        self.cards.get(card).copied().unwrap_or(0)
    }

    /// Iterate over `(card, quantity)` pairs, sorted by card id.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, u32)> {
        self.cards.iter().map(|(id, qty)| (id, *qty))
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total copies across all cards, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.cards.values().fold(0, |total, qty| total.saturating_add(*qty))
    }
}

impl<C: Into<CardId>> FromIterator<(C, u32)> for DeckSelection {
    /// Collect pairs into a selection. Repeated cards accumulate.
    fn from_iter<I: IntoIterator<Item = (C, u32)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (card, quantity) in iter {
            selection.add(card, quantity);
        }
        selection
    }
}

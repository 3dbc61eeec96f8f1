//! Card pool partitioning and category splitting.
//!
//! `partition` resolves a selection against the catalog and buckets the
//! cards by type (stronghold, role, province) and side (dynasty,
//! conflict). `split_dynasty` / `split_conflict` break those buckets down
//! by card type and total their copies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRegistry, CardType, Side};

use super::selection::DeckSelection;

/// A selected card with its quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Arc<Card>,
    pub quantity: u32,
}

impl DeckEntry {
    #[must_use]
    pub fn new(card: Arc<Card>, quantity: u32) -> Self {
        Self { card, quantity }
    }

    /// Display name of the card.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Quantity as a signed multiplier for influence and skill totals,
    /// clamped to `i32::MAX`.
    #[must_use]
    pub fn copies(&self) -> i32 {
        i32::try_from(self.quantity).unwrap_or(i32::MAX)
    }
}

/// Sum of quantities over entries, saturating at `u32::MAX`.
#[must_use]
pub fn total_quantity(entries: &[DeckEntry]) -> u32 {
    entries.iter().fold(0, |total, e| total.saturating_add(e.quantity))
}

/// Selected cards bucketed by role in the deck.
///
/// Every list is ordered by card id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardPool {
    pub strongholds: Vec<DeckEntry>,
    pub roles: Vec<DeckEntry>,
    pub provinces: Vec<DeckEntry>,
    pub dynasty: Vec<DeckEntry>,
    pub conflict: Vec<DeckEntry>,
    /// Every selected card.
    pub all: Vec<DeckEntry>,
}

/// Resolve a selection against the catalog and bucket the cards.
///
/// Unknown card ids and zero quantities are skipped.
#[must_use]
pub fn partition(selection: &DeckSelection, catalog: &CardRegistry) -> CardPool {
    let mut pool = CardPool::default();

    for (id, quantity) in selection.iter() {
        if quantity == 0 {
            continue;
        }
        let Some(card) = catalog.get(id) else {
            continue;
        };
        let entry = DeckEntry::new(Arc::clone(card), quantity);

        match card.card_type {
            CardType::Stronghold => pool.strongholds.push(entry.clone()),
            CardType::Province => pool.provinces.push(entry.clone()),
            CardType::Role => pool.roles.push(entry.clone()),
            _ => {}
        }
        match card.side {
            Side::Conflict => pool.conflict.push(entry.clone()),
            Side::Dynasty => pool.dynasty.push(entry.clone()),
            _ => {}
        }
        pool.all.push(entry);
    }

    pool
}

/// Dynasty deck split by card type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DynastyBreakdown {
    pub characters: Vec<DeckEntry>,
    pub events: Vec<DeckEntry>,
    pub holdings: Vec<DeckEntry>,
    /// Copies across the three categories.
    pub size: u32,
}

/// Conflict deck split by card type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictBreakdown {
    pub characters: Vec<DeckEntry>,
    pub events: Vec<DeckEntry>,
    pub attachments: Vec<DeckEntry>,
    /// Copies across the three categories.
    pub size: u32,
}

/// Split dynasty cards into characters, events, and holdings.
///
/// Cards of any other type are left out.
#[must_use]
pub fn split_dynasty(dynasty: &[DeckEntry]) -> DynastyBreakdown {
    let mut breakdown = DynastyBreakdown::default();
    for entry in dynasty {
        let bucket = match entry.card.card_type {
            CardType::Character => &mut breakdown.characters,
            CardType::Event => &mut breakdown.events,
            CardType::Holding => &mut breakdown.holdings,
            _ => continue,
        };
        bucket.push(entry.clone());
        breakdown.size = breakdown.size.saturating_add(entry.quantity);
    }
    breakdown
}

/// Split conflict cards into characters, events, and attachments.
///
/// Cards of any other type are left out.
#[must_use]
pub fn split_conflict(conflict: &[DeckEntry]) -> ConflictBreakdown {
    let mut breakdown = ConflictBreakdown::default();
    for entry in conflict {
        let bucket = match entry.card.card_type {
            CardType::Character => &mut breakdown.characters,
            CardType::Event => &mut breakdown.events,
            CardType::Attachment => &mut breakdown.attachments,
            _ => continue,
        };
        bucket.push(entry.clone());
        breakdown.size = breakdown.size.saturating_add(entry.quantity);
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn catalog() -> CardRegistry {
        [
            Card::new("castle", "Castle", Side::Province, CardType::Stronghold, "crab"),
            Card::new("keeper-of-air", "Keeper of Air", Side::Role, CardType::Role, "neutral"),
            Card::new("wall", "Wall", Side::Province, CardType::Province, "crab"),
            Card::new("bushi", "Bushi", Side::Dynasty, CardType::Character, "crab"),
            Card::new("farm", "Farm", Side::Dynasty, CardType::Holding, "neutral"),
            Card::new("rite", "Rite", Side::Dynasty, CardType::Event, "crab"),
            Card::new("sword", "Sword", Side::Conflict, CardType::Attachment, "neutral"),
            Card::new("ronin", "Ronin", Side::Conflict, CardType::Character, "neutral"),
            Card::new("banzai", "Banzai!", Side::Conflict, CardType::Event, "neutral"),
            Card::new("oddity", "Oddity", Side::Conflict, CardType::Holding, "neutral"),
            Card::new("treaty", "Treaty", Side::Treaty, CardType::Treaty, "neutral"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_partition_buckets() {
        let selection: DeckSelection = [
            ("castle", 1),
            ("keeper-of-air", 1),
            ("wall", 1),
            ("bushi", 3),
            ("farm", 2),
            ("sword", 2),
            ("banzai", 3),
        ]
        .into_iter()
        .collect();

        let pool = partition(&selection, &catalog());

        assert_eq!(pool.strongholds.len(), 1);
        assert_eq!(pool.roles.len(), 1);
        assert_eq!(pool.provinces.len(), 1);
        assert_eq!(pool.dynasty.len(), 2);
        assert_eq!(pool.conflict.len(), 2);
        assert_eq!(pool.all.len(), 7);
        assert_eq!(total_quantity(&pool.all), 13);
    }

    #[test]
    fn test_unknown_ids_dropped() {
        let selection = DeckSelection::new().with("bushi", 2).with("renamed-card", 3);
        let pool = partition(&selection, &catalog());

        assert_eq!(pool.all.len(), 1);
        assert_eq!(pool.all[0].card.id, CardId::new("bushi"));
    }

    #[test]
    fn test_treaty_in_no_bucket() {
        let selection = DeckSelection::new().with("treaty", 1);
        let pool = partition(&selection, &catalog());

        assert_eq!(pool.all.len(), 1);
        assert!(pool.dynasty.is_empty());
        assert!(pool.conflict.is_empty());
        assert!(pool.provinces.is_empty());
    }

    #[test]
    fn test_split_dynasty() {
        let selection = DeckSelection::new().with("bushi", 3).with("farm", 2).with("rite", 1);
        let pool = partition(&selection, &catalog());
        let dynasty = split_dynasty(&pool.dynasty);

        assert_eq!(dynasty.characters.len(), 1);
        assert_eq!(dynasty.holdings.len(), 1);
        assert_eq!(dynasty.events.len(), 1);
        assert_eq!(dynasty.size, 6);
    }

    #[test]
    fn test_split_conflict_skips_unknown_types() {
        let selection = DeckSelection::new()
            .with("sword", 2)
            .with("ronin", 1)
            .with("banzai", 3)
            .with("oddity", 2);
        let pool = partition(&selection, &catalog());
        let conflict = split_conflict(&pool.conflict);

        assert_eq!(conflict.attachments.len(), 1);
        assert_eq!(conflict.characters.len(), 1);
        assert_eq!(conflict.events.len(), 1);
        assert_eq!(conflict.size, 6);
    }

    #[test]
    fn test_sizes_saturate() {
        let selection = DeckSelection::new().with("sword", u32::MAX).with("banzai", 3);
        let pool = partition(&selection, &catalog());

        assert_eq!(split_conflict(&pool.conflict).size, u32::MAX);
        assert_eq!(total_quantity(&pool.conflict), u32::MAX);
        assert_eq!(pool.conflict[1].copies(), i32::MAX);
    }
}

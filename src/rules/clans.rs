//! Primary and secondary clan resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Faction;
use crate::deck::DeckEntry;

/// The deck's clan and the clan it splashes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clans {
    pub primary: Option<Faction>,
    pub secondary: Option<Faction>,
}

/// Resolve the deck's clans.
///
/// The primary clan is the stronghold's faction. Decks without a
/// stronghold take the clan with the most dynasty copies. The secondary
/// clan is the splashed clan with the most influence spent, then the most
/// copies. Ties go to the lowest faction id.
#[must_use]
pub fn resolve_clans(stronghold: Option<&DeckEntry>, dynasty: &[DeckEntry], conflict: &[DeckEntry]) -> Clans {
    let primary = match stronghold {
        Some(entry) => Some(entry.card.faction.clone()),
        None => dominant_dynasty_clan(dynasty),
    };

    let mut splash: BTreeMap<&Faction, (i32, u32)> = BTreeMap::new();
    for entry in conflict {
        let faction = &entry.card.faction;
        if !faction.is_clan() || Some(faction) == primary.as_ref() {
            continue;
        }
        let score = splash.entry(faction).or_default();
        let spent = entry.card.influence_cost.unwrap_or(0).saturating_mul(entry.copies());
        score.0 = score.0.saturating_add(spent);
        score.1 = score.1.saturating_add(entry.quantity);
    }

    let secondary = best(splash).cloned();
    Clans { primary, secondary }
}

fn dominant_dynasty_clan(dynasty: &[DeckEntry]) -> Option<Faction> {
    let mut copies: BTreeMap<&Faction, u32> = BTreeMap::new();
    for entry in dynasty.iter().filter(|e| e.card.faction.is_clan()) {
        let count = copies.entry(&entry.card.faction).or_default();
        *count = count.saturating_add(entry.quantity);
    }
    best(copies).cloned()
}

/// Highest-scoring key; the first (lowest) key wins ties.
fn best<K, S: Ord>(scores: BTreeMap<K, S>) -> Option<K> {
    let mut winner: Option<(K, S)> = None;
    for (key, score) in scores {
        if winner.as_ref().map_or(true, |(_, top)| score > *top) {
            winner = Some((key, score));
        }
    }
    winner.map(|(key, _)| key)
}

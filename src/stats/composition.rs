//! Composition statistics for the statistics panel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardType, TraitId};
use crate::deck::DeckEntry;

/// Cost curves, trait distribution, and skill totals.
///
/// All counts are weighted by quantity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    /// Cost → copies for dynasty cards with a printed cost.
    pub dynasty_cost_curve: BTreeMap<i32, u32>,
    /// Cost → copies for conflict cards with a printed cost.
    pub conflict_cost_curve: BTreeMap<i32, u32>,
    /// Trait → copies across the dynasty and conflict decks.
    pub traits: BTreeMap<TraitId, u32>,
    pub average_dynasty_cost: f64,
    pub average_conflict_cost: f64,
    /// Printed military skill summed over characters.
    pub military_total: i32,
    /// Printed political skill summed over characters.
    pub political_total: i32,
    /// Characters with a dash for military skill.
    pub military_dashes: u32,
    /// Characters with a dash for political skill.
    pub political_dashes: u32,
}

impl CompositionStats {
    /// Compute statistics for the dynasty and conflict decks.
    #[must_use]
    pub fn compute(dynasty: &[DeckEntry], conflict: &[DeckEntry]) -> Self {
        let mut stats = Self {
            dynasty_cost_curve: cost_curve(dynasty),
            conflict_cost_curve: cost_curve(conflict),
            ..Self::default()
        };
        stats.average_dynasty_cost = average(&stats.dynasty_cost_curve);
        stats.average_conflict_cost = average(&stats.conflict_cost_curve);

        for entry in dynasty.iter().chain(conflict) {
            for t in &entry.card.traits {
                let count = stats.traits.entry(t.clone()).or_default();
                *count = count.saturating_add(entry.quantity);
            }

            if entry.card.card_type != CardType::Character {
                continue;
            }
            let copies = entry.copies();
            match entry.card.military {
                Some(skill) => {
                    stats.military_total = stats.military_total.saturating_add(skill.saturating_mul(copies));
                }
                None => stats.military_dashes = stats.military_dashes.saturating_add(entry.quantity),
            }
            match entry.card.political {
                Some(skill) => {
                    stats.political_total = stats.political_total.saturating_add(skill.saturating_mul(copies));
                }
                None => stats.political_dashes = stats.political_dashes.saturating_add(entry.quantity),
            }
        }

        stats
    }
}

fn cost_curve(entries: &[DeckEntry]) -> BTreeMap<i32, u32> {
    let mut curve = BTreeMap::new();
    for entry in entries {
        if let Some(cost) = entry.card.cost {
            let count: &mut u32 = curve.entry(cost).or_default();
            *count = count.saturating_add(entry.quantity);
        }
    }
    curve
}

/// Mean cost over a curve; 0.0 for an empty curve.
fn average(curve: &BTreeMap<i32, u32>) -> f64 {
    let copies: f64 = curve.values().map(|n| f64::from(*n)).sum();
    if copies == 0.0 {
        return 0.0;
    }
    let total: f64 = curve.iter().map(|(cost, n)| f64::from(*cost) * f64::from(*n)).sum();
    total / copies
}

//! Influence budget.
//!
//! Maximum influence = base + role bonus + card modifiers, where the base
//! is either fixed by the format or the stronghold's influence pool.
//! Used influence is paid by conflict cards outside the primary clan.

use serde::{Deserialize, Serialize};

use crate::cards::Faction;
use crate::deck::DeckEntry;
use crate::formats::{FormatPolicy, InfluenceRules};

/// Influence capacity and spend for one deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceBudget {
    pub maximum: i32,
    pub used: i32,
}

impl InfluenceBudget {
    /// Influence left to spend (negative when over budget).
    #[must_use]
    pub fn remaining(&self) -> i32 {
        self.maximum.saturating_sub(self.used)
    }

    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.used > self.maximum
    }
}

/// Compute the maximum influence a deck may spend.
///
/// `cards` is every selected card; only those in the modifier table count.
#[must_use]
pub fn max_influence(
    policy: &FormatPolicy,
    rules: &InfluenceRules,
    stronghold: Option<&DeckEntry>,
    role: Option<&DeckEntry>,
    cards: &[DeckEntry],
) -> i32 {
    let base = match policy.fixed_influence {
        Some(fixed) => fixed,
        None => stronghold
            .and_then(|s| s.card.influence_pool)
            .unwrap_or(0),
    };
    let role_bonus = role.map_or(0, |r| rules.role_bonus(&r.card.id));
    let modifiers: i32 = cards
        .iter()
        .filter_map(|e| {
            rules
                .modifiers
                .get(&e.card.id)
                .map(|m| m.saturating_mul(e.copies()))
        })
        .fold(0, i32::saturating_add);

    base.saturating_add(role_bonus).saturating_add(modifiers)
}

/// Influence spent on conflict cards outside the primary clan.
///
/// Cards of the primary clan never cost influence, whatever their printed
/// influence cost.
#[must_use]
pub fn used_influence(conflict: &[DeckEntry], primary_clan: Option<&Faction>) -> i32 {
    conflict
        .iter()
        .filter(|e| Some(&e.card.faction) != primary_clan)
        .map(|e| e.card.influence_cost.unwrap_or(0).saturating_mul(e.copies()))
        .fold(0, i32::saturating_add)
}

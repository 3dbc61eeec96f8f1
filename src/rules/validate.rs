//! Validation aggregator.
//!
//! Evaluates the deck-construction rules in a fixed order and collects
//! the violations. The order is part of the output contract: the editor
//! shows violations in this order and tests pin it.
//!
//! 1. Role restrictions
//! 2. Number of factions
//! 3. Banned cards
//! 4. Restricted cards
//! 5. Cards outside the format (illegal packs / rotation)
//! 6. Cards the primary clan may not play
//! 7. Dynasty deck size
//! 8. Conflict deck size
//! 9. Influence
//! 10. Format rules: Rally cap, splash bans, setup cards, element coverage
//! 11. Per-card deck limits

use std::collections::BTreeSet;

use crate::cards::Faction;
use crate::deck::{total_quantity, CardPool, DeckEntry};
use crate::formats::{DeckSizeBounds, FormatPolicy, SetupRules};

use super::clans::Clans;
use super::influence::InfluenceBudget;
use super::legality::LegalityReport;
use super::provinces::{covers_elements, RoleContext};
use super::violation::Violation;

/// Everything the aggregator needs, computed upstream.
#[derive(Clone, Copy, Debug)]
pub struct ValidationInput<'a> {
    pub pool: &'a CardPool,
    pub dynasty_size: u32,
    pub conflict_size: u32,
    pub bounds: DeckSizeBounds,
    pub influence: InfluenceBudget,
    pub legality: &'a LegalityReport,
    pub clans: &'a Clans,
    pub role: RoleContext<'a>,
    pub rally_count: u32,
    pub policy: &'a FormatPolicy,
}

fn names(entries: &[DeckEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

/// Run every rule and return the violations in rule order.
#[must_use]
pub fn validate(input: &ValidationInput<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let pool = input.pool;
    let primary = input.clans.primary.as_ref();

    // 1. Role restrictions
    for entry in &pool.all {
        let restrictions = &entry.card.role_restrictions;
        if !restrictions.is_empty() && !restrictions.iter().any(|r| input.role.role_elements.contains(r)) {
            violations.push(Violation::RoleRestriction {
                card: entry.name().to_string(),
                required: restrictions.iter().map(|r| r.as_str().to_string()).collect(),
            });
        }
    }

    // 2. Factions. Shadowlands counts here, unlike in clan resolution.
    let clans: BTreeSet<&str> = pool
        .all
        .iter()
        .map(|e| e.card.faction.as_str())
        .filter(|f| *f != Faction::NEUTRAL)
        .collect();
    if clans.len() > 2 {
        violations.push(Violation::TooManyClans {
            clans: clans.into_iter().map(str::to_string).collect(),
        });
    }

    // 3-5. Card lists
    let legality = input.legality;
    if !legality.banned.is_empty() {
        violations.push(Violation::Banned { cards: names(&legality.banned) });
    }
    if legality.restricted.len() > 1 {
        violations.push(Violation::TooManyRestricted { cards: names(&legality.restricted) });
    }
    if !legality.rotated.is_empty() {
        violations.push(Violation::NotInFormat { cards: names(&legality.rotated) });
    }

    // 6. Clan permissions
    if let Some(clan) = primary {
        let disallowed: Vec<String> = pool
            .all
            .iter()
            .filter(|e| !e.card.allowed_clans.is_empty() && !e.card.allowed_clans.contains(clan))
            .map(|e| e.name().to_string())
            .collect();
        if !disallowed.is_empty() {
            violations.push(Violation::ClanNotAllowed {
                clan: clan.to_string(),
                cards: disallowed,
            });
        }
    }

    // 7-8. Deck sizes
    let bounds = input.bounds;
    if input.dynasty_size < bounds.dynasty_minimum || input.dynasty_size > bounds.maximum {
        violations.push(Violation::DynastySize {
            size: input.dynasty_size,
            minimum: bounds.dynasty_minimum,
            maximum: bounds.maximum,
        });
    }
    if input.conflict_size < bounds.conflict_minimum || input.conflict_size > bounds.maximum {
        violations.push(Violation::ConflictSize {
            size: input.conflict_size,
            minimum: bounds.conflict_minimum,
            maximum: bounds.maximum,
        });
    }

    // 9. Influence
    if input.influence.is_exceeded() {
        violations.push(Violation::InfluenceExceeded {
            used: input.influence.used,
            maximum: input.influence.maximum,
        });
    }

    // 10. Format rules
    format_rules(input, &mut violations);

    // 11. Deck limits
    for entry in &pool.all {
        if entry.quantity > u32::from(entry.card.deck_limit) {
            violations.push(Violation::DeckLimit {
                card: entry.name().to_string(),
                quantity: entry.quantity,
                limit: entry.card.deck_limit,
            });
        }
    }

    violations
}

fn format_rules(input: &ValidationInput<'_>, violations: &mut Vec<Violation>) {
    let policy = input.policy;
    let pool = input.pool;

    if let Some(cap) = policy.rally_cap {
        if input.rally_count > cap {
            violations.push(Violation::TooManyRally { count: input.rally_count, cap });
        }
    }

    if policy.enforce_splash_ban {
        let primary = input.clans.primary.as_ref();
        let off_clan: Vec<DeckEntry> = input
            .legality
            .splash_banned
            .iter()
            .filter(|e| e.card.faction.is_clan() && Some(&e.card.faction) != primary)
            .cloned()
            .collect();
        if !off_clan.is_empty() {
            violations.push(Violation::SplashBanned { cards: names(&off_clan) });
        }
    }

    match policy.setup {
        SetupRules::Skirmish => {
            if !pool.provinces.is_empty() {
                violations.push(Violation::ProvincesNotAllowed);
            }
            if !pool.strongholds.is_empty() {
                violations.push(Violation::StrongholdNotAllowed);
            }
            if !pool.roles.is_empty() {
                violations.push(Violation::RoleNotAllowed);
            }
        }
        SetupRules::Standard { provinces } => {
            let province_count = total_quantity(&pool.provinces);
            if province_count != provinces {
                violations.push(Violation::ProvinceCount {
                    count: province_count,
                    required: provinces,
                });
            }

            let strongholds = total_quantity(&pool.strongholds);
            if strongholds != 1 {
                violations.push(Violation::StrongholdCount { count: strongholds });
            }

            let roles = total_quantity(&pool.roles);
            if roles > 1 {
                violations.push(Violation::TooManyRoles { count: roles });
            }

            if province_count == provinces && !covers_elements(&pool.provinces, input.role) {
                violations.push(Violation::ElementCoverage);
            }
        }
    }
}

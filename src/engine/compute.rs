//! Deck statistics computation.
//!
//! `compute_deck_statistics` is the single entry point used by the editor,
//! the published-deck viewer, and the statistics panel. It is a pure
//! function of its inputs: no state is kept between calls.

use crate::cards::{CardRegistry, TraitId};
use crate::deck::{partition, split_conflict, split_dynasty, DeckSelection};
use crate::formats::{Format, FormatId, RulesConfig};
use crate::rules::{
    check_legality, max_influence, resolve_clans, used_influence, validate, InfluenceBudget, RoleContext,
    ValidationInput,
};
use crate::stats::{CompositionStats, DeckStatistics};

/// Compute statistics and violations with the default rules.
///
/// ## Example
///
/// ```
/// use l5r_deckcheck::cards::{Card, CardRegistry, CardType, Side};
/// use l5r_deckcheck::deck::DeckSelection;
/// use l5r_deckcheck::formats::{Format, FormatId};
/// use l5r_deckcheck::compute_deck_statistics;
///
/// let catalog: CardRegistry = [
///     Card::new("ronin", "Ronin", Side::Dynasty, CardType::Character, "neutral"),
/// ]
/// .into_iter()
/// .collect();
/// let formats = vec![Format::new("skirmish", "Skirmish")];
/// let deck = DeckSelection::new().with("ronin", 3);
///
/// let stats = compute_deck_statistics(&deck, &FormatId::new("skirmish"), &catalog, &formats);
/// assert_eq!(stats.dynasty.size, 3);
/// assert_eq!(stats.max_influence, 6);
/// assert!(!stats.is_legal());
/// ```
#[must_use]
pub fn compute_deck_statistics(
    cards: &DeckSelection,
    format_id: &FormatId,
    catalog: &CardRegistry,
    formats: &[Format],
) -> DeckStatistics {
    compute_with_rules(cards, format_id, catalog, formats, &RulesConfig::default())
}

/// Compute statistics and violations with injected rules.
#[must_use]
pub fn compute_with_rules(
    cards: &DeckSelection,
    format_id: &FormatId,
    catalog: &CardRegistry,
    formats: &[Format],
    rules: &RulesConfig,
) -> DeckStatistics {
    let policy = rules.policy(format_id);
    let format = formats.iter().find(|f| &f.id == format_id);

    let pool = partition(cards, catalog);
    let dynasty = split_dynasty(&pool.dynasty);
    let conflict = split_conflict(&pool.conflict);

    let stronghold = pool.strongholds.first().cloned();
    let role = pool.roles.first().cloned();
    let role_elements: Vec<TraitId> = role
        .as_ref()
        .map(|r| r.card.traits.clone())
        .unwrap_or_default();
    let is_seeker = role
        .as_ref()
        .is_some_and(|r| r.card.has_trait(&rules.seeker_trait));

    let clans = resolve_clans(stronghold.as_ref(), &pool.dynasty, &pool.conflict);
    let influence = InfluenceBudget {
        maximum: max_influence(policy, &rules.influence, stronghold.as_ref(), role.as_ref(), &pool.all),
        used: used_influence(&pool.conflict, clans.primary.as_ref()),
    };

    let rally_count: u32 = pool
        .dynasty
        .iter()
        .filter(|e| e.card.is_rally)
        .fold(0, |total, e| total.saturating_add(e.quantity));
    let bounds = policy.bounds(rally_count);

    let legality = check_legality(&pool.all, format_id, format, policy);

    let violations = validate(&ValidationInput {
        pool: &pool,
        dynasty_size: dynasty.size,
        conflict_size: conflict.size,
        bounds,
        influence,
        legality: &legality,
        clans: &clans,
        role: RoleContext {
            is_seeker,
            role_elements: &role_elements,
        },
        rally_count,
        policy,
    });

    let composition = CompositionStats::compute(&pool.dynasty, &pool.conflict);

    DeckStatistics {
        format: format_id.clone(),
        max_influence: influence.maximum,
        used_influence: influence.used,
        stronghold,
        role,
        strongholds: pool.strongholds,
        roles: pool.roles,
        provinces: pool.provinces,
        dynasty,
        conflict,
        banned: legality.banned,
        restricted: legality.restricted,
        rotated: legality.rotated,
        splash_banned: legality.splash_banned,
        is_seeker,
        role_elements,
        bounds,
        rally_count,
        primary_clan: clans.primary,
        secondary_clan: clans.secondary,
        composition,
        violations,
    }
}

/// A catalog, format list, and rules bundled together.
///
/// Holds no per-deck state; `statistics` is as pure as
/// `compute_with_rules`.
#[derive(Clone, Debug, Default)]
pub struct DeckEngine {
    catalog: CardRegistry,
    formats: Vec<Format>,
    rules: RulesConfig,
}

impl DeckEngine {
    /// Create an engine with the default rules.
    #[must_use]
    pub fn new(catalog: CardRegistry, formats: Vec<Format>) -> Self {
        Self {
            catalog,
            formats,
            rules: RulesConfig::default(),
        }
    }

    /// Replace the rules (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Compute statistics for a deck.
    #[must_use]
    pub fn statistics(&self, cards: &DeckSelection, format_id: &FormatId) -> DeckStatistics {
        compute_with_rules(cards, format_id, &self.catalog, &self.formats, &self.rules)
    }

    #[must_use]
    pub fn catalog(&self) -> &CardRegistry {
        &self.catalog
    }

    #[must_use]
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}

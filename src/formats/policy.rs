//! Rules configuration.
//!
//! Everything format-specific is data:
//! - `FormatPolicy`: Deck-size bounds and special rules for one format
//! - `InfluenceRules`: Role bonuses and the card modifier table
//! - `RulesConfig`: Policies keyed by format, plus influence rules
//!
//! The aggregator never branches on format names; it reads the policy
//! resolved for the format being validated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::format::FormatId;

/// Which setup cards (provinces, stronghold, role) a format uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupRules {
    /// Exactly `provinces` provinces, exactly one stronghold, at most one
    /// role, and the provinces must cover the five elements.
    Standard { provinces: u32 },
    /// No provinces, stronghold, or role at all.
    Skirmish,
}

/// Structured rules for one format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPolicy {
    /// Setup card requirements.
    pub setup: SetupRules,

    /// Fixed base influence. `None` uses the stronghold's influence pool.
    pub fixed_influence: Option<i32>,

    /// Minimum size of each of the dynasty and conflict decks.
    pub deck_minimum: u32,

    /// Maximum size of each of the dynasty and conflict decks.
    pub deck_maximum: u32,

    /// Rally cards raise the dynasty minimum by their count.
    pub rally_extends_dynasty_minimum: bool,

    /// Rally cards raise the deck maximum by their count.
    pub rally_extends_maximum: bool,

    /// Report illegal-pack cards and rotated cards as one list.
    /// Otherwise only illegal-pack cards are reported.
    pub merge_rotated_with_illegal: bool,

    /// Maximum number of Rally cards. `None` for unlimited.
    pub rally_cap: Option<u32>,

    /// Splash-banned cards may not be played out of clan.
    pub enforce_splash_ban: bool,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            setup: SetupRules::Standard { provinces: 5 },
            fixed_influence: None,
            deck_minimum: 40,
            deck_maximum: 45,
            rally_extends_dynasty_minimum: false,
            rally_extends_maximum: false,
            merge_rotated_with_illegal: false,
            rally_cap: None,
            enforce_splash_ban: false,
        }
    }
}

impl FormatPolicy {
    /// Emerald Legacy: rotation merged into legality, Rally capped at 5,
    /// splash bans enforced.
    #[must_use]
    pub fn emerald() -> Self {
        Self {
            rally_extends_dynasty_minimum: true,
            merge_rotated_with_illegal: true,
            rally_cap: Some(5),
            enforce_splash_ban: true,
            ..Self::default()
        }
    }

    /// Obsidian Heresy: Rally cards extend both dynasty bounds.
    #[must_use]
    pub fn obsidian() -> Self {
        Self {
            rally_extends_dynasty_minimum: true,
            rally_extends_maximum: true,
            ..Self::default()
        }
    }

    /// Skirmish: small decks, fixed influence, no setup cards.
    #[must_use]
    pub fn skirmish() -> Self {
        Self {
            setup: SetupRules::Skirmish,
            fixed_influence: Some(6),
            deck_minimum: 30,
            deck_maximum: 35,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rally_cap(mut self, cap: u32) -> Self {
        self.rally_cap = Some(cap);
        self
    }

    #[must_use]
    pub fn with_deck_bounds(mut self, minimum: u32, maximum: u32) -> Self {
        self.deck_minimum = minimum;
        self.deck_maximum = maximum;
        self
    }

    /// Deck-size bounds once `rally_count` Rally cards are in the deck.
    #[must_use]
    pub fn bounds(&self, rally_count: u32) -> DeckSizeBounds {
        let maximum = if self.rally_extends_maximum {
            self.deck_maximum.saturating_add(rally_count)
        } else {
            self.deck_maximum
        };
        let dynasty_minimum = if self.rally_extends_dynasty_minimum {
            self.deck_minimum.saturating_add(rally_count)
        } else {
            self.deck_minimum
        };

        DeckSizeBounds {
            dynasty_minimum,
            conflict_minimum: self.deck_minimum,
            maximum,
        }
    }
}

/// Resolved deck-size bounds for one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckSizeBounds {
    pub dynasty_minimum: u32,
    pub conflict_minimum: u32,
    pub maximum: u32,
}

/// Influence capacity rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluenceRules {
    /// Role ids containing this marker grant `support_bonus`.
    pub support_marker: String,
    pub support_bonus: i32,

    /// Role ids containing this marker grant `keeper_bonus`.
    pub keeper_marker: String,
    pub keeper_bonus: i32,

    /// Per-copy influence modifiers for cards that change capacity.
    pub modifiers: FxHashMap<CardId, i32>,
}

impl Default for InfluenceRules {
    fn default() -> Self {
        Self {
            support_marker: "support".to_string(),
            support_bonus: 8,
            keeper_marker: "keeper".to_string(),
            keeper_bonus: 3,
            modifiers: FxHashMap::default(),
        }
    }
}

impl InfluenceRules {
    /// Add a card modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, card: impl Into<CardId>, modifier: i32) -> Self {
        self.modifiers.insert(card.into(), modifier);
        self
    }

    /// Bonus granted by a role.
    #[must_use]
    pub fn role_bonus(&self, role: &CardId) -> i32 {
        let id = role.as_str();
        if id.contains(&self.support_marker) {
            self.support_bonus
        } else if id.contains(&self.keeper_marker) {
            self.keeper_bonus
        } else {
            0
        }
    }
}

/// Complete rules configuration, injected into the engine.
///
/// ## Example
///
/// ```
/// use l5r_deckcheck::formats::{FormatId, FormatPolicy, RulesConfig, SetupRules};
///
/// let config = RulesConfig::default()
///     .with_policy("jade", FormatPolicy::default().with_rally_cap(3));
///
/// assert_eq!(config.policy(&FormatId::new("jade")).rally_cap, Some(3));
/// assert_eq!(config.policy(&FormatId::new("skirmish")).setup, SetupRules::Skirmish);
/// assert_eq!(config.policy(&FormatId::new("unknown")).deck_maximum, 45);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Policies by format.
    pub policies: FxHashMap<FormatId, FormatPolicy>,

    /// Policy for formats without an explicit entry.
    pub fallback: FormatPolicy,

    /// Influence rules shared by all formats.
    pub influence: InfluenceRules,

    /// Role trait that unlocks the seeker province exception.
    pub seeker_trait: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let mut policies = FxHashMap::default();
        policies.insert(FormatId::new(FormatId::EMERALD), FormatPolicy::emerald());
        policies.insert(FormatId::new(FormatId::OBSIDIAN), FormatPolicy::obsidian());
        policies.insert(FormatId::new(FormatId::SKIRMISH), FormatPolicy::skirmish());

        Self {
            policies,
            fallback: FormatPolicy::default(),
            influence: InfluenceRules::default(),
            seeker_trait: "seeker".to_string(),
        }
    }
}

impl RulesConfig {
    /// Create an empty config: every format uses the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policies: FxHashMap::default(),
            ..Self::default()
        }
    }

    /// Set the policy for a format (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, format: impl Into<FormatId>, policy: FormatPolicy) -> Self {
        self.policies.insert(format.into(), policy);
        self
    }

    /// Replace the influence rules (builder pattern).
    #[must_use]
    pub fn with_influence(mut self, influence: InfluenceRules) -> Self {
        self.influence = influence;
        self
    }

    /// Get the policy for a format, falling back to the default policy.
    #[must_use]
    pub fn policy(&self, format: &FormatId) -> &FormatPolicy {
        self.policies.get(format).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = FormatPolicy::default().bounds(3);
        assert_eq!(bounds.dynasty_minimum, 40);
        assert_eq!(bounds.conflict_minimum, 40);
        assert_eq!(bounds.maximum, 45);
    }

    #[test]
    fn test_emerald_bounds() {
        let bounds = FormatPolicy::emerald().bounds(3);
        assert_eq!(bounds.dynasty_minimum, 43);
        assert_eq!(bounds.conflict_minimum, 40);
        assert_eq!(bounds.maximum, 45);
    }

    #[test]
    fn test_obsidian_bounds() {
        let bounds = FormatPolicy::obsidian().bounds(2);
        assert_eq!(bounds.dynasty_minimum, 42);
        assert_eq!(bounds.conflict_minimum, 40);
        assert_eq!(bounds.maximum, 47);
    }

    #[test]
    fn test_skirmish_bounds() {
        let policy = FormatPolicy::skirmish();
        let bounds = policy.bounds(4);
        assert_eq!(bounds.dynasty_minimum, 30);
        assert_eq!(bounds.maximum, 35);
        assert_eq!(policy.fixed_influence, Some(6));
    }

    #[test]
    fn test_role_bonus() {
        let rules = InfluenceRules::default();
        assert_eq!(rules.role_bonus(&CardId::new("support-of-the-crab")), 8);
        assert_eq!(rules.role_bonus(&CardId::new("keeper-of-air")), 3);
        assert_eq!(rules.role_bonus(&CardId::new("seeker-of-fire")), 0);
    }

    #[test]
    fn test_policy_fallback() {
        let config = RulesConfig::new();
        assert_eq!(config.policy(&FormatId::new("emerald")), &FormatPolicy::default());

        let config = RulesConfig::default();
        assert!(config.policy(&FormatId::new("emerald")).merge_rotated_with_illegal);
        assert!(!config.policy(&FormatId::new("stronghold")).merge_rotated_with_illegal);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default()
            .with_influence(InfluenceRules::default().with_modifier("some-card", 2));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

//! Deck statistics - the engine's output record.

use serde::{Deserialize, Serialize};

use crate::cards::{Faction, TraitId};
use crate::deck::{ConflictBreakdown, DeckEntry, DynastyBreakdown};
use crate::formats::{DeckSizeBounds, FormatId};
use crate::rules::Violation;

use super::composition::CompositionStats;

/// Everything the editor, deck viewer, and statistics panel show about a
/// deck, computed fresh on every call.
///
/// Every list is ordered by card id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStatistics {
    /// Format the deck was validated against.
    pub format: FormatId,

    pub max_influence: i32,
    pub used_influence: i32,

    /// Resolved stronghold (the first one, if several are selected).
    pub stronghold: Option<DeckEntry>,
    /// Resolved role (the first one, if several are selected).
    pub role: Option<DeckEntry>,
    pub strongholds: Vec<DeckEntry>,
    pub roles: Vec<DeckEntry>,
    pub provinces: Vec<DeckEntry>,

    pub dynasty: DynastyBreakdown,
    pub conflict: ConflictBreakdown,

    pub banned: Vec<DeckEntry>,
    pub restricted: Vec<DeckEntry>,
    /// Cards outside the format's packs (and rotated cards, for formats
    /// that merge the two).
    pub rotated: Vec<DeckEntry>,
    pub splash_banned: Vec<DeckEntry>,

    /// The role grants the seeker province exception.
    pub is_seeker: bool,
    /// Traits of the resolved role.
    pub role_elements: Vec<TraitId>,

    pub bounds: DeckSizeBounds,
    pub rally_count: u32,

    pub primary_clan: Option<Faction>,
    pub secondary_clan: Option<Faction>,

    pub composition: CompositionStats,

    /// Broken rules, in evaluation order.
    pub violations: Vec<Violation>,
}

impl DeckStatistics {
    /// The deck breaks no rule.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }

    /// Player-facing violation messages, in evaluation order.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Influence left to spend (negative when over budget).
    #[must_use]
    pub fn influence_left(&self) -> i32 {
        self.max_influence.saturating_sub(self.used_influence)
    }

    /// Copies in the dynasty and conflict decks together.
    #[must_use]
    pub fn draw_deck_size(&self) -> u32 {
        self.dynasty.size.saturating_add(self.conflict.size)
    }
}

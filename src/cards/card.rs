//! Card entities - immutable catalog entries.
//!
//! A `Card` holds everything the deck engine needs to know about a card:
//! which half of the deck it belongs to, its faction, its printings, and the
//! per-format ban lists. Stat fields use `Option` so that a dash printed on
//! the card (no value) stays distinct from a zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::formats::{FormatId, PackId};

/// Unique identifier for a card (e.g. `"kyuden-kakita"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait identifier (`"bushi"`, `"keeper"`, `"air"`, ...).
///
/// Roles carry their element and seeker/keeper status as traits, so role
/// restrictions and role elements are both expressed in trait ids.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub String);

impl TraitId {
    /// Create a new trait ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TraitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owning faction of a card: one of the great clans, `neutral`, or
/// `shadowlands`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(pub String);

impl Faction {
    /// Faction of cards any clan can play.
    pub const NEUTRAL: &'static str = "neutral";
    /// Non-clan faction; never a primary or secondary clan.
    pub const SHADOWLANDS: &'static str = "shadowlands";

    /// Create a new faction.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The neutral faction.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(Self::NEUTRAL)
    }

    /// Get the raw faction id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this faction a clan (not neutral, not shadowlands)?
    #[must_use]
    pub fn is_clan(&self) -> bool {
        self.0 != Self::NEUTRAL && self.0 != Self::SHADOWLANDS
    }
}

impl From<&str> for Faction {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Faction {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which part of a deck a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Dynasty,
    Conflict,
    Province,
    Role,
    Treaty,
}

/// Printed card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Character,
    Event,
    Holding,
    Attachment,
    Stronghold,
    Province,
    Role,
    Warlord,
    Treaty,
}

/// The five classical elements a province can provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Air,
    Earth,
    Fire,
    Water,
    Void,
}

impl Element {
    /// All five elements, in canonical order.
    pub const ALL: [Element; 5] = [
        Element::Air,
        Element::Earth,
        Element::Fire,
        Element::Water,
        Element::Void,
    ];

    /// Lowercase name, matching the trait id used on roles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Void => "void",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single printing of a card in a pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printing {
    /// Pack the card was printed in.
    pub pack_id: PackId,
    /// This printing has rotated out of the card pool.
    #[serde(default)]
    pub rotated: bool,
}

impl Printing {
    /// Create a non-rotated printing.
    #[must_use]
    pub fn new(pack_id: impl Into<PackId>) -> Self {
        Self {
            pack_id: pack_id.into(),
            rotated: false,
        }
    }

    /// Create a rotated printing.
    #[must_use]
    pub fn rotated(pack_id: impl Into<PackId>) -> Self {
        Self {
            pack_id: pack_id.into(),
            rotated: true,
        }
    }
}

fn default_deck_limit() -> u8 {
    3
}

/// Immutable catalog entry.
///
/// ## Example
///
/// ```
/// use l5r_deckcheck::cards::{Card, CardType, Side};
///
/// let card = Card::new("banzai", "Banzai!", Side::Conflict, CardType::Event, "neutral")
///     .with_cost(0)
///     .with_influence_cost(0);
///
/// assert!(card.is_conflict());
/// assert_eq!(card.deck_limit, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub faction: Faction,

    // Stats. `None` is a printed dash.
    #[serde(default)]
    pub cost: Option<i32>,
    #[serde(default)]
    pub military: Option<i32>,
    #[serde(default)]
    pub political: Option<i32>,
    #[serde(default)]
    pub glory: Option<i32>,
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub strength_bonus: Option<String>,
    #[serde(default)]
    pub military_bonus: Option<String>,
    #[serde(default)]
    pub political_bonus: Option<String>,
    #[serde(default)]
    pub influence_cost: Option<i32>,
    #[serde(default)]
    pub influence_pool: Option<i32>,
    #[serde(default)]
    pub fate: Option<i32>,
    #[serde(default)]
    pub honor: Option<i32>,

    /// Rules text. Only read at ingestion time.
    #[serde(default)]
    pub text: Option<String>,

    /// Rally keyword, set at ingestion time.
    #[serde(default)]
    pub is_rally: bool,

    #[serde(default)]
    pub traits: Vec<TraitId>,
    #[serde(default)]
    pub role_restrictions: Vec<TraitId>,
    #[serde(default)]
    pub elements: SmallVec<[Element; 2]>,
    #[serde(default)]
    pub allowed_clans: Vec<Faction>,

    #[serde(default)]
    pub banned_in: Vec<FormatId>,
    #[serde(default)]
    pub restricted_in: Vec<FormatId>,
    #[serde(default)]
    pub splash_banned_in: Vec<FormatId>,

    /// Maximum copies per deck.
    #[serde(default = "default_deck_limit")]
    pub deck_limit: u8,

    #[serde(default, alias = "versions")]
    pub printings: SmallVec<[Printing; 2]>,
}

impl Card {
    /// Create a card with no stats, no printings and a deck limit of 3.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        side: Side,
        card_type: CardType,
        faction: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            side,
            card_type,
            faction: Faction::new(faction),
            cost: None,
            military: None,
            political: None,
            glory: None,
            strength: None,
            strength_bonus: None,
            military_bonus: None,
            political_bonus: None,
            influence_cost: None,
            influence_pool: None,
            fate: None,
            honor: None,
            text: None,
            is_rally: false,
            traits: Vec::new(),
            role_restrictions: Vec::new(),
            elements: SmallVec::new(),
            allowed_clans: Vec::new(),
            banned_in: Vec::new(),
            restricted_in: Vec::new(),
            splash_banned_in: Vec::new(),
            deck_limit: default_deck_limit(),
            printings: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_skills(mut self, military: Option<i32>, political: Option<i32>) -> Self {
        self.military = military;
        self.political = political;
        self
    }

    #[must_use]
    pub fn with_influence_cost(mut self, cost: i32) -> Self {
        self.influence_cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_influence_pool(mut self, pool: i32) -> Self {
        self.influence_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Mark the card as a Rally card.
    #[must_use]
    pub fn rally(mut self) -> Self {
        self.is_rally = true;
        self
    }

    #[must_use]
    pub fn with_traits<I, T>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TraitId>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_role_restrictions<I, T>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TraitId>,
    {
        self.role_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_allowed_clans<I, T>(mut self, clans: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Faction>,
    {
        self.allowed_clans = clans.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn banned_in(mut self, format: impl Into<FormatId>) -> Self {
        self.banned_in.push(format.into());
        self
    }

    #[must_use]
    pub fn restricted_in(mut self, format: impl Into<FormatId>) -> Self {
        self.restricted_in.push(format.into());
        self
    }

    #[must_use]
    pub fn splash_banned_in(mut self, format: impl Into<FormatId>) -> Self {
        self.splash_banned_in.push(format.into());
        self
    }

    #[must_use]
    pub fn with_deck_limit(mut self, limit: u8) -> Self {
        self.deck_limit = limit;
        self
    }

    #[must_use]
    pub fn with_printing(mut self, printing: Printing) -> Self {
        self.printings.push(printing);
        self
    }

    // === Queries ===

    #[must_use]
    pub fn is_dynasty(&self) -> bool {
        self.side == Side::Dynasty
    }

    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.side == Side::Conflict
    }

    /// Does the card carry the given trait?
    #[must_use]
    pub fn has_trait(&self, id: &str) -> bool {
        self.traits.iter().any(|t| t.as_str() == id)
    }

    #[must_use]
    pub fn is_banned_in(&self, format: &FormatId) -> bool {
        self.banned_in.contains(format)
    }

    #[must_use]
    pub fn is_restricted_in(&self, format: &FormatId) -> bool {
        self.restricted_in.contains(format)
    }

    #[must_use]
    pub fn is_splash_banned_in(&self, format: &FormatId) -> bool {
        self.splash_banned_in.contains(format)
    }

    /// Every printing is rotated, i.e. no live printing exists.
    ///
    /// A card without printings counts as rotated.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.printings.iter().all(|p| p.rotated)
    }

    /// At least one printing comes from a pack in `legal_packs`.
    ///
    /// An empty `legal_packs` legalizes every pack.
    #[must_use]
    pub fn is_in_packs(&self, legal_packs: &[PackId]) -> bool {
        legal_packs.is_empty()
            || self
                .printings
                .iter()
                .any(|p| legal_packs.contains(&p.pack_id))
    }
}

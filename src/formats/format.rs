//! Formats and pack identifiers.

use serde::{Deserialize, Deserializer, Serialize};

/// Format identifier (`"emerald"`, `"obsidian"`, `"skirmish"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatId(pub String);

impl FormatId {
    /// Emerald Legacy.
    pub const EMERALD: &'static str = "emerald";
    /// Obsidian Heresy.
    pub const OBSIDIAN: &'static str = "obsidian";
    /// Skirmish (small decks, no setup cards).
    pub const SKIRMISH: &'static str = "skirmish";

    /// Create a new format ID.
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

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FormatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pack identifier (`"core"`, `"tears-of-amaterasu"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackId(pub String);

impl PackId {
    /// Create a new pack ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A named ruleset a deck is validated against.
///
/// Only `legal_packs` is read by the engine; the deck-size and
/// format-specific rules live in the matching `FormatPolicy`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub id: FormatId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Packs whose printings are legal. Empty means every pack is legal.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub legal_packs: Vec<PackId>,
}

impl Format {
    /// Create a format in which every pack is legal.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: FormatId::new(id),
            name: name.into(),
            legal_packs: Vec::new(),
        }
    }

    /// Restrict the format to the given packs.
    #[must_use]
    pub fn with_legal_packs<I, P>(mut self, packs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PackId>,
    {
        self.legal_packs = packs.into_iter().map(Into::into).collect();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PackId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PackId>>::deserialize(deserializer)?.unwrap_or_default())
}

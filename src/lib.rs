//! # l5r-deckcheck
//!
//! Deck legality and statistics engine for a Legend of the Five Rings
//! deck builder.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `compute_deck_statistics` is a function of the selection,
//!    the format id, the catalog, and the format list. No I/O, no hidden
//!    state, same input → same output.
//!
//! 2. **Report, Don't Reject**: Broken rules become `Violation`s in the
//!    output. Malformed decks still get full statistics; unknown card ids
//!    are skipped.
//!
//! 3. **Configuration Over Convention**: Format-specific rules live in
//!    `FormatPolicy` values and influence modifiers in `InfluenceRules`,
//!    both injected through `RulesConfig`.
//!
//! ## Modules
//!
//! - `cards`: Card entities, catalog registry, JSON ingestion
//! - `formats`: Formats, per-format policies, rules configuration
//! - `deck`: Deck selection, partitioning, category splits
//! - `rules`: Influence, clans, legality, province coverage, validation
//! - `stats`: `DeckStatistics` and composition statistics
//! - `engine`: Entry points and memoization

pub mod cards;
pub mod formats;
pub mod deck;
pub mod rules;
pub mod stats;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{
    Card, CardId, CardRegistry, CardType, Element, Faction, IngestError, Printing, Side, TraitId,
};

pub use crate::formats::{DeckSizeBounds, Format, FormatId, FormatPolicy, InfluenceRules, PackId, RulesConfig, SetupRules};

pub use crate::deck::{DeckEntry, DeckSelection};

pub use crate::rules::Violation;

pub use crate::stats::{CompositionStats, DeckStatistics};

pub use crate::engine::{compute_deck_statistics, compute_with_rules, DeckEngine, StatisticsCache};

//! Formats and the per-format rules configuration.
//!
//! ## Key Types
//!
//! - `Format`: Format data from the REST API (only `legal_packs` matters here)
//! - `FormatPolicy`: Deck-size bounds and format-specific rules, as data
//! - `RulesConfig`: Policies by format plus influence rules, injected into the engine
//!
//! Unknown formats fall back to `RulesConfig::fallback`.

pub mod format;
pub mod policy;

pub use format::{Format, FormatId, PackId};
pub use policy::{DeckSizeBounds, FormatPolicy, InfluenceRules, RulesConfig, SetupRules};

//! Engine entry points.
//!
//! ## Key Types
//!
//! - `compute_deck_statistics`: The pure top-level function (default rules)
//! - `compute_with_rules`: Same, with an injected `RulesConfig`
//! - `DeckEngine`: Catalog + formats + rules bundled for repeated calls
//! - `StatisticsCache`: Optional memoization over `DeckEngine`

pub mod cache;
pub mod compute;

pub use cache::StatisticsCache;
pub use compute::{compute_deck_statistics, compute_with_rules, DeckEngine};

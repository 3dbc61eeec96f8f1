//! Engine output types.
//!
//! ## Key Types
//!
//! - `DeckStatistics`: Influence, card breakdowns, legality lists, bounds, and violations
//! - `CompositionStats`: Cost curves, trait distribution, and skill totals

pub mod composition;
pub mod statistics;

pub use composition::CompositionStats;
pub use statistics::DeckStatistics;

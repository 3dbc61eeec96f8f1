//! Deck selection and card pool partitioning.
//!
//! ## Key Types
//!
//! - `DeckSelection`: Card → quantity map (persistent, sorted)
//! - `DeckEntry`: A resolved catalog card with its quantity
//! - `CardPool`: Selected cards bucketed into stronghold/role/province/dynasty/conflict
//! - `DynastyBreakdown`, `ConflictBreakdown`: Per-type splits with copy counts

pub mod partition;
pub mod selection;

pub use partition::{
    partition, split_conflict, split_dynasty, total_quantity, CardPool, ConflictBreakdown, DeckEntry,
    DynastyBreakdown,
};
pub use selection::DeckSelection;

//! Deck-construction rules.
//!
//! Each rule family is a pure function over the partitioned card pool:
//! - `influence`: Influence capacity and spend
//! - `clans`: Primary/secondary clan resolution
//! - `legality`: Banned, restricted, rotated, and splash-banned cards
//! - `provinces`: Province element coverage
//! - `validate`: Ordered aggregation into `Violation`s

pub mod clans;
pub mod influence;
pub mod legality;
pub mod provinces;
pub mod validate;
pub mod violation;

pub use clans::{resolve_clans, Clans};
pub use influence::{max_influence, used_influence, InfluenceBudget};
pub use legality::{check_legality, LegalityReport};
pub use provinces::{covers_elements, element_permutations, is_legal_assignment, RoleContext};
pub use validate::{validate, ValidationInput};
pub use violation::Violation;

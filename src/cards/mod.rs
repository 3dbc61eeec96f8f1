//! Card system: catalog entries, registry, and ingestion.
//!
//! ## Key Types
//!
//! - `CardId`, `TraitId`, `Faction`: String-backed identifiers from the card data
//! - `Card`: Immutable catalog entry (side, type, stats, legality lists, printings)
//! - `CardRegistry`: Card lookup by ID
//! - `IngestError`: Failures while decoding catalog JSON
//!
//! ## Keywords
//!
//! Keywords are resolved once, at ingestion time. The engine reads
//! `Card::is_rally`, never the rules text.

pub mod card;
pub mod ingest;
pub mod registry;

pub use card::{Card, CardId, CardType, Element, Faction, Printing, Side, TraitId};
pub use ingest::{catalog_from_cards, catalog_from_json, formats_from_json, tag_keywords, IngestError};
pub use registry::CardRegistry;

//! Card content: scenario and response records and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier unique within a catalog list
//! - `ScenarioCard`: The shared prompt for a round
//! - `ResponseCard`: A card dealt to players, optionally custom
//! - `CardCatalog`: The full ordered lists, validated for unique ids

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, CatalogError};
pub use definition::{CardId, ResponseCard, ScenarioCard};

//! Cards: element data loading and card minting.
//!
//! - `Card` / `CardId`: the value that moves between zones
//! - `CardCatalog`: the parsed element table (injected data source)
//! - `CardFactory`: catalog plus the process-unique id allocator

mod card;
mod catalog;
mod factory;

pub use card::{Card, CardId};
pub use catalog::{CardCatalog, CatalogError, ElementRecord, ELEMENTS_AMOUNT};
pub use factory::CardFactory;

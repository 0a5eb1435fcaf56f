//! Operations over the alias catalogs and item records in `itemlore-core`:
//! resolve-or-fail lookups against the host catalog, display-name rendering,
//! and the structural item-equivalence comparator.

pub mod catalog;
pub mod error;
pub mod similar;

pub use catalog::{
    ItemCatalog, effect_display_name, enchant_display_name, find_effect, find_enchantment,
};
pub use error::CatalogError;
pub use similar::SimilarityOptions;

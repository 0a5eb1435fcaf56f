//! Name resolution against the host item/effect catalog.
//!
//! The alias tables translate freely and never fail; this module is where
//! the strict tier lives. A caller asking for an effect or enchantment by
//! name intends to use the handle immediately, so an unresolvable name is
//! surfaced as [`CatalogError::NotFound`] instead of being passed along.

use itemlore_core::alias::{AliasTable, EFFECT_ALIASES, ENCHANT_ALIASES, normalize_key};

use crate::error::CatalogError;

/// Where valid status-effect names are documented.
pub const EFFECT_NAME_GUIDANCE: &str = "see the host's status effect type reference for valid names";

/// Where valid enchantment names are documented.
pub const ENCHANT_NAME_GUIDANCE: &str = "see the host's enchantment type reference for valid names";

/// The host-catalog seam.
///
/// Handles are opaque to this library; the host hands back whatever it
/// uses to represent a registered effect or enchantment. Lookups take a
/// legacy-scheme identifier — translation from current-scheme names is
/// this module's job, not the host's.
pub trait ItemCatalog {
    type Effect;
    type Enchant;

    fn effect_by_name(&self, legacy_name: &str) -> Option<Self::Effect>;

    fn enchant_by_name(&self, legacy_name: &str) -> Option<Self::Enchant>;
}

/// Resolve a status-effect name to a host handle, failing if the catalog
/// has no such effect.
///
/// The name may be in either scheme, any case, with spaces or underscores.
pub fn find_effect<C: ItemCatalog>(
    catalog: &C,
    name: impl AsRef<str>,
) -> Result<C::Effect, CatalogError> {
    resolve(&EFFECT_ALIASES, name.as_ref(), EFFECT_NAME_GUIDANCE, |legacy| {
        catalog.effect_by_name(legacy)
    })
}

/// Resolve an enchantment name to a host handle, failing if the catalog
/// has no such enchantment.
///
/// The name may be in either scheme, any case, with spaces or underscores.
pub fn find_enchantment<C: ItemCatalog>(
    catalog: &C,
    name: impl AsRef<str>,
) -> Result<C::Enchant, CatalogError> {
    resolve(&ENCHANT_ALIASES, name.as_ref(), ENCHANT_NAME_GUIDANCE, |legacy| {
        catalog.enchant_by_name(legacy)
    })
}

fn resolve<T>(
    table: &AliasTable,
    query: &str,
    guidance: &'static str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, CatalogError> {
    let legacy = table.to_legacy(query);

    if legacy != normalize_key(query) {
        log::debug!("translated {} name '{query}' to legacy '{legacy}'", table.name());
    }

    lookup(&legacy).ok_or(CatalogError::NotFound {
        query: query.to_string(),
        guidance,
    })
}

/// Render any status-effect name (either scheme) as its human phrase.
pub fn effect_display_name(name: impl AsRef<str>) -> String {
    EFFECT_ALIASES.display_name(&EFFECT_ALIASES.to_legacy(name.as_ref()))
}

/// Render any enchantment name (either scheme) as its human phrase.
pub fn enchant_display_name(name: impl AsRef<str>) -> String {
    ENCHANT_ALIASES.display_name(&ENCHANT_ALIASES.to_legacy(name.as_ref()))
}

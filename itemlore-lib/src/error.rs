use thiserror::Error;

/// Errors from resolving names against the host catalog.
///
/// This is the only failure surface in the library. Alias-table lookups
/// degrade silently (an untranslated name is the common case, not an
/// error), but a catalog miss means the caller is about to use a handle
/// that does not exist, so it fails loudly with the original query.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The translated name has no entry in the host catalog.
    #[error("no catalog entry for '{query}' ({guidance})")]
    NotFound {
        /// The caller's original, untranslated query.
        query: String,
        /// Pointer to where valid names are documented.
        guidance: &'static str,
    },
}

//! Structural item equivalence.
//!
//! Decides whether two item records are the same item for gameplay
//! purposes: type, metadata shape, display name, lore, and this
//! installation's identity tags all have to agree. Damage, stack count,
//! and decorative flags never participate.

use serde::{Deserialize, Serialize};

use itemlore_core::{ItemRecord, strip_color_codes};

/// Compare-time options, built once at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityOptions {
    /// Whether legacy sub-type semantics are active. Computed once by the
    /// host's version detection (true when the host predates the naming
    /// cutover) and passed in here; the comparator itself never probes
    /// versions.
    pub legacy_sub_types: bool,

    /// Installation identity key. The comparator checks the tag under this
    /// key and under `{install_key}_Item` on both items.
    pub install_key: String,

    /// Type ids whose sub-type value is mechanically generated and carries
    /// no identity, so it is excluded from the sub-type check.
    pub sub_type_exempt: Vec<String>,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            legacy_sub_types: false,
            install_key: String::new(),
            sub_type_exempt: vec!["BOW".to_string()],
        }
    }
}

impl SimilarityOptions {
    pub fn new(install_key: impl Into<String>) -> Self {
        Self {
            install_key: install_key.into(),
            ..Self::default()
        }
    }

    pub fn legacy_sub_types(mut self, legacy: bool) -> Self {
        self.legacy_sub_types = legacy;
        self
    }

    pub fn exempt_sub_type(mut self, type_id: impl Into<String>) -> Self {
        self.sub_type_exempt.push(type_id.into());
        self
    }

    /// Compare two item references for structural sameness.
    ///
    /// Checks run cheapest-first and short-circuit: presence, type id,
    /// metadata flag, the version-gated sub-type, normalized display
    /// names, lore, and finally the two installation tags. A missing
    /// reference on either side is a valid outcome (an empty slot), not
    /// an error, and compares as not similar. Never raises; symmetric
    /// in its arguments.
    pub fn is_similar(&self, a: Option<&ItemRecord>, b: Option<&ItemRecord>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };

        if a.type_id != b.type_id || a.has_metadata != b.has_metadata {
            return false;
        }

        if self.legacy_sub_types
            && !self.is_sub_type_exempt(&a.type_id)
            && a.legacy_sub_type != b.legacy_sub_type
        {
            return false;
        }

        if normalized_name(a) != normalized_name(b) {
            return false;
        }

        // Element-wise including length; no lore and empty lore are
        // distinct values.
        if a.lore != b.lore {
            return false;
        }

        let item_key = format!("{}_Item", self.install_key);
        tag_matches(&self.install_key, a, b) && tag_matches(&item_key, a, b)
    }

    fn is_sub_type_exempt(&self, type_id: &str) -> bool {
        self.sub_type_exempt.iter().any(|t| t == type_id)
    }
}

/// Display name with color markup stripped and case folded; absent names
/// compare as the empty string.
fn normalized_name(item: &ItemRecord) -> String {
    strip_color_codes(item.display_name.as_deref().unwrap_or("")).to_lowercase()
}

/// Tag check for one key: both absent is a match, one-sided presence is
/// not, both present compares the values exactly.
fn tag_matches(key: &str, a: &ItemRecord, b: &ItemRecord) -> bool {
    match (a.tag(key), b.tag(key)) {
        (None, None) => true,
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/similar_tests.rs"]
mod tests;

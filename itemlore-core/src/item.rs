//! Read-only item record snapshots consumed by the comparator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of one item as reported by the host catalog.
///
/// This is identity data only — damage, stack count, and decorative flags
/// are deliberately absent because they never participate in equivalence.
/// Nothing here is mutated after construction; all mutation happens in the
/// host catalog this was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    /// Catalog type identifier (e.g., `BOW`, `DIAMOND_SWORD`).
    pub type_id: String,

    /// Secondary numeric discriminator, meaningful only under legacy
    /// semantics.
    pub legacy_sub_type: Option<i32>,

    /// Whether the host attached metadata (display name, lore, ...) to
    /// this item.
    pub has_metadata: bool,

    /// Custom display name, possibly containing color markup.
    pub display_name: Option<String>,

    /// Lore lines, in display order. `None` (no lore attached) and
    /// `Some(vec![])` (an attached but empty list) are distinct values.
    pub lore: Option<Vec<String>>,

    /// Opaque string tags attached by external systems. Read, never
    /// interpreted.
    pub tags: BTreeMap<String, String>,
}

impl ItemRecord {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_type(mut self, sub_type: i32) -> Self {
        self.legacy_sub_type = Some(sub_type);
        self
    }

    pub fn with_metadata(mut self, has_metadata: bool) -> Self {
        self.has_metadata = has_metadata;
        self
    }

    /// Set a display name. Implies `has_metadata`.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self.has_metadata = true;
        self
    }

    /// Set lore lines. Implies `has_metadata`.
    pub fn with_lore(mut self, lore: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.lore = Some(lore.into_iter().map(Into::into).collect());
        self.has_metadata = true;
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value by key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Whether a tag key is present, regardless of its value.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

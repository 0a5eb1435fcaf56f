//! Alias catalogs bridging the current naming scheme and the legacy one.
//!
//! The host kept its internal identifiers when the naming cutover happened,
//! so a handful of status effects and about two dozen enchantments answer
//! to two names: the current/human one and the legacy one the catalog still
//! understands. These tables cover exactly that differing subset — every
//! other name is identical in both schemes, which is why lookups fall
//! through to the query itself instead of failing.
//!
//! Both tables are closed sets, built as consts and scanned linearly; at
//! well under thirty entries each there is nothing to index.

use crate::text::title_case;

/// One row in an alias catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry {
    /// Current-scheme name (unique within its table).
    pub canonical: &'static str,
    /// Legacy identifier the host catalog understands (unique within its table).
    pub legacy: &'static str,
    /// Human display override. Falls back to the legacy name when absent.
    pub display: Option<&'static str>,
}

impl AliasEntry {
    const fn new(canonical: &'static str, legacy: &'static str) -> Self {
        Self {
            canonical,
            legacy,
            display: None,
        }
    }

    const fn with_display(
        canonical: &'static str,
        legacy: &'static str,
        display: &'static str,
    ) -> Self {
        Self {
            canonical,
            legacy,
            display: Some(display),
        }
    }

    /// The label shown to humans: the display override, or the legacy name.
    pub fn display_label(&self) -> &'static str {
        match self.display {
            Some(display) => display,
            None => self.legacy,
        }
    }
}

/// An immutable, ordered alias catalog for one kind of named constant.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    name: &'static str,
    entries: &'static [AliasEntry],
}

/// Status effects whose current name differs from the legacy identifier.
pub const EFFECT_ALIASES: AliasTable = AliasTable {
    name: "status effect",
    entries: &[
        AliasEntry::with_display("SLOW", "SLOW", "Slowness"),
        AliasEntry::new("STRENGTH", "INCREASE_DAMAGE"),
        AliasEntry::new("JUMP_BOOST", "JUMP"),
        AliasEntry::new("INSTANT_HEAL", "INSTANT_HEALTH"),
        AliasEntry::new("REGEN", "REGENERATION"),
    ],
};

/// Enchantments whose current name differs from the legacy identifier.
///
/// Unlike effects, the current name here IS the human name, so every entry
/// carries an explicit display label.
pub const ENCHANT_ALIASES: AliasTable = AliasTable {
    name: "enchantment",
    entries: &[
        AliasEntry::with_display("PROTECTION", "PROTECTION_ENVIRONMENTAL", "Protection"),
        AliasEntry::with_display("FIRE_PROTECTION", "PROTECTION_FIRE", "Fire Protection"),
        AliasEntry::with_display("FEATHER_FALLING", "PROTECTION_FALL", "Feather Falling"),
        AliasEntry::with_display("BLAST_PROTECTION", "PROTECTION_EXPLOSIONS", "Blast Protection"),
        AliasEntry::with_display(
            "PROJECTILE_PROTECTION",
            "PROTECTION_PROJECTILE",
            "Projectile Protection",
        ),
        AliasEntry::with_display("RESPIRATION", "OXYGEN", "Respiration"),
        AliasEntry::with_display("AQUA_AFFINITY", "WATER_WORKER", "Aqua Affinity"),
        AliasEntry::with_display("THORN", "THORNS", "Thorn"),
        AliasEntry::with_display("CURSE_OF_VANISHING", "VANISHING_CURSE", "Curse Of Vanishing"),
        AliasEntry::with_display("CURSE_OF_BINDING", "BINDING_CURSE", "Curse Of Binding"),
        AliasEntry::with_display("SHARPNESS", "DAMAGE_ALL", "Sharpness"),
        AliasEntry::with_display("SMITE", "DAMAGE_UNDEAD", "Smite"),
        AliasEntry::with_display("BANE_OF_ARTHROPODS", "DAMAGE_ARTHROPODS", "Bane Of Arthropods"),
        AliasEntry::with_display("LOOTING", "LOOT_BONUS_MOBS", "Looting"),
        AliasEntry::with_display("SWEEPING_EDGE", "SWEEPING", "Sweeping Edge"),
        AliasEntry::with_display("EFFICIENCY", "DIG_SPEED", "Efficiency"),
        AliasEntry::with_display("UNBREAKING", "DURABILITY", "Unbreaking"),
        AliasEntry::with_display("FORTUNE", "LOOT_BONUS_BLOCKS", "Fortune"),
        AliasEntry::with_display("POWER", "ARROW_DAMAGE", "Power"),
        AliasEntry::with_display("PUNCH", "ARROW_KNOCKBACK", "Punch"),
        AliasEntry::with_display("FLAME", "ARROW_FIRE", "Flame"),
        AliasEntry::with_display("INFINITY", "ARROW_INFINITE", "Infinity"),
        AliasEntry::with_display("LUCK_OF_THE_SEA", "LUCK", "Luck Of The Sea"),
    ],
};

/// Normalize a free-form name into scheme-key form: trimmed, uppercased,
/// spaces turned into underscores.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

impl AliasTable {
    /// Human-readable name of this catalog (for logging/messages).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> &'static [AliasEntry] {
        self.entries
    }

    /// Translate any recognized name to its legacy identifier.
    ///
    /// The query is matched case-insensitively (spaces and underscores are
    /// interchangeable) against each entry's canonical and display names.
    /// An unmatched query comes back normalized but otherwise unchanged:
    /// most names are identical in both schemes and may already be
    /// legacy-form, so no match is not an error here. Callers that need an
    /// exact catalog hit layer their own failure policy on top.
    pub fn to_legacy(&self, query: &str) -> String {
        let key = normalize_key(query);

        for entry in self.entries {
            if normalize_key(entry.canonical) == key
                || entry
                    .display
                    .is_some_and(|display| normalize_key(display) == key)
            {
                return entry.legacy.to_string();
            }
        }

        key
    }

    /// Render a legacy identifier as its capitalized human display name.
    ///
    /// Matching is by legacy name, with the same normalization as
    /// [`to_legacy`](Self::to_legacy). An unmatched input is rendered
    /// directly (`SOME_NAME` → `Some Name`); this never fails.
    pub fn display_name(&self, legacy: &str) -> String {
        let key = normalize_key(legacy);

        for entry in self.entries {
            if normalize_key(entry.legacy) == key {
                return title_case(entry.display_label());
            }
        }

        title_case(&key)
    }
}

#[cfg(test)]
#[path = "tests/alias_tests.rs"]
mod tests;

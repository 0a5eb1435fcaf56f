pub mod alias;
pub mod item;
pub mod text;

pub use alias::{AliasEntry, AliasTable, EFFECT_ALIASES, ENCHANT_ALIASES};
pub use item::ItemRecord;
pub use text::{humanize, strip_color_codes, title_case};

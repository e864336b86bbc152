//! Items: slots, rarity tiers, templates, rolled instances, and loot.
//!
//! Templates are loaded once and shared read-only; each [`Item`] owns an
//! `Arc` to its template plus stats rolled for its [`Rarity`].

pub mod instance;
pub mod loot;
pub mod rarity;
pub mod slot;
pub mod template;

pub use instance::{ITEM_ARMOR_CAP, Item, rolled_value};
pub use loot::{generate_random_item, roll_rarity};
pub use rarity::{Rarity, RarityProfile};
pub use slot::EquipmentSlot;
pub use template::{ItemRecord, ItemTemplate};
pub(crate) use template::parse_stat_map;

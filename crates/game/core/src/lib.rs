//! Mech arena rules and data types.
//!
//! `mech-core` defines the stat model, items and loot, combatants, encounter
//! scaling, and the combat state machine as plain synchronous code. All tick
//! logic flows through [`engine::ArenaEngine`]; threads, locking, and I/O
//! live in the runtime and content crates, which depend on the types
//! re-exported here.
pub mod catalog;
pub mod config;
pub mod encounter;
pub mod engine;
pub mod equipment;
pub mod error;
pub mod item;
pub mod mech;
pub mod pilot;
pub mod state;
pub mod stats;

pub use catalog::{BossDefinition, BossRecord, Catalog};
pub use config::GameConfig;
pub use encounter::{EncounterDirector, FALLBACK_BOSS_NAME, Spawn};
pub use engine::{ArenaEngine, ArenaEvent, Side};
pub use equipment::{EquipOutcome, Equipment};
pub use error::{DataError, ErrorSeverity, GameError, InventoryError, ItemError};
pub use item::{
    EquipmentSlot, ITEM_ARMOR_CAP, Item, ItemRecord, ItemTemplate, Rarity, RarityProfile,
    generate_random_item, roll_rarity,
};
pub use mech::{ARMOR_MAX, ARMOR_MIN, DamageReport, EquipReceipt, Inventory, Mech};
pub use pilot::{ClassPassive, PilotArchetype, PilotClass};
pub use state::{ArenaState, CombatPhase, EventLog, Progress};
pub use stats::{SCALED_STAT_CAP, StatKind, StatLedger};

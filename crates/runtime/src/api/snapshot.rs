//! Read-only projection of the arena for presentation layers.

use std::collections::BTreeMap;

use mech_core::{ArenaState, CombatPhase, EquipmentSlot, Mech, Rarity, StatLedger};
use serde::{Deserialize, Serialize};

/// One combatant as seen from outside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub health: f64,
    pub max_health: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub total_stats: StatLedger,
    /// Slot to equipped item name.
    pub equipment: BTreeMap<EquipmentSlot, String>,
}

impl CombatantView {
    pub fn of(mech: &Mech) -> Self {
        Self {
            name: mech.name().to_string(),
            health: mech.current_health(),
            max_health: mech.max_health(),
            shield: mech.current_shield(),
            max_shield: mech.max_shield(),
            energy: mech.current_energy(),
            max_energy: mech.max_energy(),
            total_stats: mech.total_stats(),
            equipment: mech
                .equipment()
                .iter()
                .map(|(slot, item)| (slot, item.name().to_string()))
                .collect(),
        }
    }
}

/// Inventory line, addressable by `index` for equip requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub index: usize,
    pub name: String,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub required_tech: u32,
    /// Whether the player's Technology meets `required_tech`.
    pub meets_requirement: bool,
}

/// Consistent copy of the arena, taken under one lock acquisition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub player: CombatantView,
    pub opponent: Option<CombatantView>,
    pub inventory: Vec<InventoryEntry>,
    pub floor: u32,
    pub defeated_on_floor: u32,
    pub opponent_is_boss: bool,
    pub phase: CombatPhase,
    /// Oldest first.
    pub log: Vec<String>,
    /// Log entries pushed so far, including ones already evicted.
    pub log_total: u64,
}

impl ArenaSnapshot {
    pub fn capture(state: &ArenaState) -> Self {
        let player = &state.player;
        Self {
            player: CombatantView::of(player),
            opponent: state.opponent.as_ref().map(CombatantView::of),
            inventory: player
                .inventory()
                .iter()
                .enumerate()
                .map(|(index, item)| InventoryEntry {
                    index,
                    name: item.name().to_string(),
                    slot: item.slot(),
                    rarity: item.rarity(),
                    required_tech: item.required_tech(),
                    meets_requirement: player.can_equip(item),
                })
                .collect(),
            floor: state.progress.floor,
            defeated_on_floor: state.progress.defeated,
            opponent_is_boss: state.progress.opponent_is_boss,
            phase: state.phase,
            log: state.log.iter().map(str::to_string).collect(),
            log_total: state.log.total_pushed(),
        }
    }
}

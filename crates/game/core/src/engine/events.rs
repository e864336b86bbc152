use crate::item::{EquipmentSlot, Rarity};

/// Which combatant acted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Player,
    Opponent,
}

/// Typed record of what happened during a tick or an equipment action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ArenaEvent {
    OpponentSpawned {
        name: String,
        floor: u32,
        is_boss: bool,
    },
    CombatStarted {
        opponent: String,
        first: Side,
    },
    AttackResolved {
        attacker: Side,
        damage: f64,
        shield_absorbed: f64,
        health_lost: f64,
        defender_health: f64,
    },
    OpponentDefeated {
        name: String,
        was_boss: bool,
    },
    LootAwarded {
        name: String,
        rarity: Rarity,
        slot: EquipmentSlot,
    },
    FloorAdvanced {
        floor: u32,
    },
    PlayerRevived,
    EquipmentChanged {
        slot: EquipmentSlot,
        equipped: Option<String>,
        removed: Option<String>,
    },
}

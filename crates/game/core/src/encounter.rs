//! Opponent spawning and floor scaling.

use crate::catalog::Catalog;
use crate::mech::Mech;
use crate::stats::{SCALED_STAT_CAP, StatKind, StatLedger};

pub const FALLBACK_BOSS_NAME: &str = "Overcharged Grunt";

/// A freshly spawned opponent and whether it is the floor boss.
#[derive(Clone, Debug, PartialEq)]
pub struct Spawn {
    pub mech: Mech,
    pub is_boss: bool,
}

/// Decides which opponent comes next and how strong it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterDirector {
    enemies_per_floor: u32,
}

impl EncounterDirector {
    /// A quota of zero is treated as one.
    pub fn new(enemies_per_floor: u32) -> Self {
        Self {
            enemies_per_floor: enemies_per_floor.max(1),
        }
    }

    pub fn enemies_per_floor(&self) -> u32 {
        self.enemies_per_floor
    }

    pub fn boss_due(&self, defeated: u32) -> bool {
        defeated >= self.enemies_per_floor
    }

    /// Boss once the quota is met, otherwise a regular opponent.
    pub fn spawn(&self, floor: u32, defeated: u32, catalog: &Catalog) -> Spawn {
        if self.boss_due(defeated) {
            Spawn {
                mech: self.spawn_boss(floor, catalog),
                is_boss: true,
            }
        } else {
            Spawn {
                mech: self.spawn_next_enemy(floor, defeated),
                is_boss: false,
            }
        }
    }

    pub fn spawn_next_enemy(&self, floor: u32, defeated: u32) -> Mech {
        let name = format!("Grunt Mech Mk.{floor}-{}", u64::from(defeated) + 1);
        Mech::new(name, regular_stats(floor, defeated))
    }

    /// Catalog boss for `floor`, or the synthetic fallback. Never fails.
    pub fn spawn_boss(&self, floor: u32, catalog: &Catalog) -> Mech {
        match catalog.boss(floor) {
            Some(boss) => Mech::new(boss.name.clone(), boss.stats.clone()),
            None => Mech::new(FALLBACK_BOSS_NAME, fallback_boss_stats(floor)),
        }
    }
}

/// `base * growth^exponent`, capped at [`SCALED_STAT_CAP`].
fn scaled(base: f64, growth: f64, exponent: u32) -> f64 {
    (base * growth.powf(f64::from(exponent))).min(SCALED_STAT_CAP)
}

fn floor_index(floor: u32) -> u32 {
    floor.saturating_sub(1)
}

pub fn regular_stats(floor: u32, defeated: u32) -> StatLedger {
    let depth = floor_index(floor);
    let floor = f64::from(floor);
    StatLedger::from([
        (StatKind::Health, (scaled(50.0, 1.2, depth) * scaled(1.0, 1.05, defeated)).min(SCALED_STAT_CAP)),
        (StatKind::Attack, (scaled(10.0, 1.15, depth) * scaled(1.0, 1.03, defeated)).min(SCALED_STAT_CAP)),
        (StatKind::Armor, scaled(1.0, 1.1, depth).max(1.0)),
        (StatKind::EnergyShield, scaled(20.0, 1.1, depth)),
        (StatKind::Mobility, 5.0 + floor),
        (StatKind::AttackSpeed, 0.5 + floor * 0.05),
        (StatKind::Energy, 10.0),
        (StatKind::EnergyRecovery, 1.0),
        (StatKind::Technology, 1.0),
    ])
}

pub fn fallback_boss_stats(floor: u32) -> StatLedger {
    let depth = floor_index(floor);
    let floor = f64::from(floor);
    StatLedger::from([
        (StatKind::Health, scaled(200.0, 1.5, depth)),
        (StatKind::Attack, scaled(50.0, 1.4, depth)),
        (StatKind::Armor, scaled(2.0, 1.15, depth).max(1.0)),
        (StatKind::EnergyShield, scaled(100.0, 1.2, depth)),
        (StatKind::Mobility, 8.0 + floor),
        (StatKind::AttackSpeed, 0.6 + floor * 0.05),
        (StatKind::Energy, 10.0),
        (StatKind::EnergyRecovery, 1.0),
        (StatKind::Repair, 0.0),
        (StatKind::Technology, 1.0),
    ])
}

//! Combatant model.
//!
//! A [`Mech`] owns its base stats, an [`Equipment`] manager, an [`Inventory`],
//! and the live combat counters (health, shield, energy). Total stats are
//! always `base ⊕ equipment`.

mod inventory;

pub use inventory::Inventory;

use crate::equipment::{EquipOutcome, Equipment};
use crate::error::InventoryError;
use crate::item::{EquipmentSlot, Item};
use crate::stats::{StatKind, StatLedger};

/// Armor is clamped into this range before mitigation.
pub const ARMOR_MIN: f64 = 1.0;
pub const ARMOR_MAX: f64 = 9999.0;

/// What a single hit did to a mech.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageReport {
    pub shield_absorbed: f64,
    pub health_lost: f64,
}

/// Outcome of moving an inventory item into its equipment slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipReceipt {
    pub slot: EquipmentSlot,
    pub equipped: String,
    /// Name of the item bumped back into the inventory, if any.
    pub displaced: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mech {
    name: String,
    base_stats: StatLedger,
    equipment: Equipment,
    inventory: Inventory,
    health: f64,
    shield: f64,
    energy: f64,
}

impl Mech {
    /// Creates a mech with empty equipment and counters at their maxima.
    pub fn new(name: impl Into<String>, base_stats: StatLedger) -> Self {
        let mut mech = Self {
            name: name.into(),
            base_stats,
            equipment: Equipment::empty(),
            inventory: Inventory::empty(),
            health: 0.0,
            shield: 0.0,
            energy: 0.0,
        };
        mech.reset_combat_state();
        mech
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn base_stats(&self) -> &StatLedger {
        &self.base_stats
    }

    /// Replaces base stats. Counters are clamped, not refilled; call
    /// [`Mech::reset_combat_state`] to refill.
    pub fn set_base_stats(&mut self, base_stats: StatLedger) {
        self.base_stats = base_stats;
        self.clamp_to_maximums();
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    // ===== stats =====

    /// Base stats merged with equipment stats.
    pub fn total_stats(&self) -> StatLedger {
        StatLedger::merge(&self.base_stats, &self.equipment.total_stats())
    }

    pub fn stat(&self, kind: StatKind) -> f64 {
        self.base_stats.get(kind) + self.equipment.total_stats().get(kind)
    }

    pub fn max_health(&self) -> f64 {
        self.stat(StatKind::Health).max(0.0)
    }

    pub fn max_shield(&self) -> f64 {
        self.stat(StatKind::EnergyShield).max(0.0)
    }

    pub fn max_energy(&self) -> f64 {
        self.stat(StatKind::Energy).max(0.0)
    }

    pub fn current_health(&self) -> f64 {
        self.health
    }

    pub fn current_shield(&self) -> f64 {
        self.shield
    }

    pub fn current_energy(&self) -> f64 {
        self.energy
    }

    // ===== combat =====

    /// Refills health, shield, and energy to the current total-stat maxima.
    pub fn reset_combat_state(&mut self) {
        let totals = self.total_stats();
        self.health = totals.get(StatKind::Health).max(0.0);
        self.shield = totals.get(StatKind::EnergyShield).max(0.0);
        self.energy = totals.get(StatKind::Energy).max(0.0);
    }

    /// Applies a hit: shield absorbs first; armor mitigates only what reaches
    /// health, and only once the shield sits at exactly zero.
    pub fn take_damage(&mut self, amount: f64) -> DamageReport {
        if !(amount.is_finite() && amount > 0.0) || !self.is_alive() {
            return DamageReport::default();
        }

        let shield_absorbed = self.shield.min(amount);
        self.shield -= shield_absorbed;
        let remaining = amount - shield_absorbed;

        let mut mitigated = 0.0;
        if self.shield == 0.0 {
            let armor = self.stat(StatKind::Armor).clamp(ARMOR_MIN, ARMOR_MAX);
            mitigated = remaining * (1.0 - armor / ARMOR_MAX);
        }

        let before = self.health;
        self.health = (self.health - mitigated).max(0.0);

        DamageReport {
            shield_absorbed,
            health_lost: before - self.health,
        }
    }

    /// Applies Repair and EnergyRecovery over `delta_time` seconds, capped at
    /// the maxima. A destroyed mech without Repair stays down.
    pub fn regenerate(&mut self, delta_time: f64) {
        if !(delta_time.is_finite() && delta_time > 0.0) {
            return;
        }
        let totals = self.total_stats();
        let repair = totals.get(StatKind::Repair);
        if !self.is_alive() && repair <= 0.0 {
            return;
        }

        let max_health = totals.get(StatKind::Health).max(0.0);
        let repair_amount = repair * delta_time;
        if repair_amount > 0.0 && self.health < max_health {
            self.health = (self.health + repair_amount).min(max_health);
        }

        let max_energy = totals.get(StatKind::Energy).max(0.0);
        let energy_amount = totals.get(StatKind::EnergyRecovery) * delta_time;
        if energy_amount > 0.0 && self.energy < max_energy {
            self.energy = (self.energy + energy_amount).min(max_energy);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Damage dealt by one attack: the total Attack stat.
    pub fn calculate_attack_damage(&self) -> f64 {
        self.stat(StatKind::Attack)
    }

    /// Seconds between attacks, from AttackSpeed floored at 0.1.
    pub fn attack_delay(&self) -> f64 {
        1.0 / self.stat(StatKind::AttackSpeed).max(0.1)
    }

    /// Whether the pilot's Technology meets the item's requirement.
    pub fn can_equip(&self, item: &Item) -> bool {
        self.stat(StatKind::Technology) >= f64::from(item.required_tech())
    }

    // ===== inventory & equipment =====

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn remove_from_inventory(&mut self, index: usize) -> Result<Item, InventoryError> {
        self.inventory.remove(index)
    }

    pub fn inventory_item(&self, index: usize) -> Option<&Item> {
        self.inventory.get(index)
    }

    /// Equips `item` directly; counters are clamped to the new maxima.
    pub fn equip(&mut self, item: Item) -> EquipOutcome {
        let outcome = self.equipment.equip(item);
        self.clamp_to_maximums();
        outcome
    }

    /// Moves the inventory item at `index` into its slot. A displaced item
    /// goes back to the inventory; a slotless item is restored where it was.
    pub fn equip_from_inventory(&mut self, index: usize) -> Result<EquipReceipt, InventoryError> {
        let item = self.inventory.remove(index)?;
        let slot = item.slot();
        let equipped = item.name().to_string();

        match self.equip(item) {
            EquipOutcome::Equipped { previous } => {
                let displaced = previous.map(|previous| {
                    let name = previous.name().to_string();
                    self.inventory.push(previous);
                    name
                });
                Ok(EquipReceipt {
                    slot,
                    equipped,
                    displaced,
                })
            }
            EquipOutcome::Rejected(item) => {
                self.inventory.restore(index, item);
                Err(InventoryError::NoEquipmentSlot { name: equipped })
            }
        }
    }

    /// Moves the item in `slot` back to the inventory, returning its name.
    pub fn unequip_to_inventory(&mut self, slot: EquipmentSlot) -> Result<String, InventoryError> {
        let item = self
            .equipment
            .unequip(slot)
            .ok_or(InventoryError::SlotEmpty { slot })?;
        let name = item.name().to_string();
        self.inventory.push(item);
        self.clamp_to_maximums();
        Ok(name)
    }

    /// Pulls counters down to the current maxima without refilling them.
    pub fn clamp_to_maximums(&mut self) {
        self.health = self.health.clamp(0.0, self.max_health());
        self.shield = self.shield.clamp(0.0, self.max_shield());
        self.energy = self.energy.clamp(0.0, self.max_energy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemTemplate, Rarity};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn frame(health: f64, shield: f64, armor: f64) -> Mech {
        Mech::new(
            "Frame",
            StatLedger::from([
                (StatKind::Health, health),
                (StatKind::EnergyShield, shield),
                (StatKind::Armor, armor),
                (StatKind::Attack, 7.0),
                (StatKind::Energy, 10.0),
                (StatKind::EnergyRecovery, 2.0),
                (StatKind::Technology, 2.0),
            ]),
        )
    }

    fn item(id: &str, slot: EquipmentSlot, stats: StatLedger) -> Item {
        let template = ItemTemplate::new(id, id, slot, stats);
        Item::roll(Arc::new(template), Rarity::Common, &mut StdRng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn new_mech_starts_at_maxima() {
        let mech = frame(100.0, 20.0, 1.0);
        assert_eq!(mech.current_health(), 100.0);
        assert_eq!(mech.current_shield(), 20.0);
        assert_eq!(mech.current_energy(), 10.0);
    }

    #[test]
    fn shield_absorbs_whole_hit() {
        let mut mech = frame(100.0, 20.0, 1.0);
        let report = mech.take_damage(15.0);
        assert_eq!(mech.current_shield(), 5.0);
        assert_eq!(mech.current_health(), 100.0);
        assert_eq!(report.health_lost, 0.0);
    }

    #[test]
    fn hit_draining_shield_exactly_reaches_armor_step() {
        let mut mech = frame(100.0, 20.0, 1.0);
        mech.take_damage(30.0);
        assert_eq!(mech.current_shield(), 0.0);
        let expected = 100.0 - 10.0 * (1.0 - 1.0 / 9999.0);
        assert!((mech.current_health() - expected).abs() < 1e-9);
    }

    #[test]
    fn armor_is_clamped_into_range() {
        let mut soft = frame(100.0, 0.0, -50.0);
        soft.take_damage(10.0);
        let expected = 100.0 - 10.0 * (1.0 - 1.0 / 9999.0);
        assert!((soft.current_health() - expected).abs() < 1e-9);

        let mut hard = frame(100.0, 0.0, 50_000.0);
        let report = hard.take_damage(10.0);
        assert_eq!(report.health_lost, 0.0);
        assert_eq!(hard.current_health(), 100.0);
    }

    #[test]
    fn health_floors_at_zero() {
        let mut mech = frame(5.0, 0.0, 1.0);
        mech.take_damage(1_000.0);
        assert_eq!(mech.current_health(), 0.0);
        assert!(!mech.is_alive());

        let report = mech.take_damage(10.0);
        assert_eq!(report, DamageReport::default());
    }

    #[test]
    fn non_positive_damage_is_ignored() {
        let mut mech = frame(50.0, 10.0, 1.0);
        mech.take_damage(0.0);
        mech.take_damage(-4.0);
        mech.take_damage(f64::NAN);
        assert_eq!(mech.current_shield(), 10.0);
        assert_eq!(mech.current_health(), 50.0);
    }

    #[test]
    fn regenerate_caps_at_maxima() {
        let mut mech = frame(100.0, 0.0, 1.0);
        mech.set_base_stats(mech.base_stats().clone().with(StatKind::Repair, 10.0));
        mech.take_damage(30.0);
        mech.regenerate(1.0);
        assert!(mech.current_health() > 70.0);
        mech.regenerate(60.0);
        assert_eq!(mech.current_health(), 100.0);
        assert_eq!(mech.current_energy(), 10.0);
    }

    #[test]
    fn destroyed_mech_without_repair_stays_down() {
        let mut mech = frame(10.0, 0.0, 1.0);
        mech.take_damage(100.0);
        mech.regenerate(10.0);
        assert_eq!(mech.current_health(), 0.0);
    }

    #[test]
    fn attack_damage_reads_total_attack() {
        let mut mech = frame(10.0, 0.0, 1.0);
        assert_eq!(mech.calculate_attack_damage(), 7.0);
        mech.equip(item("blade", EquipmentSlot::RightArmWeapon, StatLedger::from([(StatKind::Attack, 3.0)])));
        let bonus = mech.equipment().total_stats().get(StatKind::Attack);
        assert_eq!(mech.calculate_attack_damage(), 7.0 + bonus);
    }

    #[test]
    fn attack_delay_floors_speed() {
        let mech = frame(10.0, 0.0, 1.0);
        assert_eq!(mech.attack_delay(), 10.0);
    }

    #[test]
    fn equip_from_inventory_bumps_previous_item() {
        let mut mech = frame(100.0, 0.0, 1.0);
        mech.add_to_inventory(item("helm_a", EquipmentSlot::Head, StatLedger::new()));
        mech.add_to_inventory(item("helm_b", EquipmentSlot::Head, StatLedger::new()));

        let first = mech.equip_from_inventory(0).unwrap();
        assert_eq!(first.displaced, None);
        assert_eq!(mech.inventory().len(), 1);

        let second = mech.equip_from_inventory(0).unwrap();
        assert_eq!(second.equipped, "helm_b");
        assert_eq!(second.displaced.as_deref(), Some("helm_a"));
        assert_eq!(mech.inventory_item(0).map(Item::id), Some("helm_a"));
    }

    #[test]
    fn equip_from_inventory_reports_missing_index() {
        let mut mech = frame(100.0, 0.0, 1.0);
        assert_eq!(
            mech.equip_from_inventory(2),
            Err(InventoryError::NotFound { index: 2, len: 0 })
        );
        assert_eq!(
            mech.remove_from_inventory(0),
            Err(InventoryError::NotFound { index: 0, len: 0 })
        );
    }

    #[test]
    fn slotless_item_returns_to_its_index() {
        let mut mech = frame(100.0, 0.0, 1.0);
        mech.add_to_inventory(item("a", EquipmentSlot::Legs, StatLedger::new()));
        mech.add_to_inventory(item("chip", EquipmentSlot::None, StatLedger::new()));
        mech.add_to_inventory(item("c", EquipmentSlot::Arms, StatLedger::new()));

        let error = mech.equip_from_inventory(1).unwrap_err();

        assert!(matches!(error, InventoryError::NoEquipmentSlot { .. }));
        assert_eq!(mech.inventory_item(1).map(Item::id), Some("chip"));
        assert!(mech.equipment().is_empty());
    }

    #[test]
    fn unequip_clamps_counters() {
        let mut mech = frame(100.0, 0.0, 1.0);
        mech.add_to_inventory(item("plating", EquipmentSlot::Chest, StatLedger::from([(StatKind::Health, 50.0)])));
        mech.equip_from_inventory(0).unwrap();
        mech.reset_combat_state();
        assert!(mech.current_health() > 100.0);

        let name = mech.unequip_to_inventory(EquipmentSlot::Chest).unwrap();

        assert_eq!(name, "plating");
        assert_eq!(mech.current_health(), 100.0);
        assert_eq!(
            mech.unequip_to_inventory(EquipmentSlot::Chest),
            Err(InventoryError::SlotEmpty { slot: EquipmentSlot::Chest })
        );
    }

    #[test]
    fn technology_gates_items() {
        let mech = frame(100.0, 0.0, 1.0);
        let template = ItemTemplate::new("railgun", "Railgun", EquipmentSlot::RightShoulderWeapon, StatLedger::new())
            .with_required_tech(3);
        let railgun = Item::roll(Arc::new(template), Rarity::Common, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(!mech.can_equip(&railgun));
        assert!(mech.can_equip(&item("visor", EquipmentSlot::Head, StatLedger::new())));
    }

    #[test]
    fn counters_stay_within_bounds_over_mixed_sequence() {
        let mut mech = frame(80.0, 15.0, 3.0);
        mech.set_base_stats(mech.base_stats().clone().with(StatKind::Repair, 4.0));
        for step in 0..200 {
            mech.take_damage(f64::from(step % 13));
            mech.regenerate(0.25);
            assert!(mech.current_health() >= 0.0 && mech.current_health() <= mech.max_health());
            assert!(mech.current_shield() >= 0.0 && mech.current_shield() <= mech.max_shield());
            assert!(mech.current_energy() >= 0.0 && mech.current_energy() <= mech.max_energy());
        }
    }
}

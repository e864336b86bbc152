//! Equipment system for mechs.
//!
//! Holds at most one item per [`EquipmentSlot`] and aggregates the rolled
//! stats of everything equipped. Mutations touch only the slot map; callers
//! are responsible for logging.

use std::collections::BTreeMap;

use crate::item::{EquipmentSlot, Item};
use crate::stats::StatLedger;

/// Result of an [`Equipment::equip`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum EquipOutcome {
    /// The item now occupies its slot; `previous` is whatever it evicted.
    Equipped { previous: Option<Item> },
    /// The item has no equipment slot and is handed back unchanged.
    Rejected(Item),
}

/// Equipment state for a mech.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, Item>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips `item` into its slot, evicting the previous occupant.
    ///
    /// Items whose slot is [`EquipmentSlot::None`] are rejected and returned.
    pub fn equip(&mut self, item: Item) -> EquipOutcome {
        let slot = item.slot();
        if !slot.is_equippable() {
            return EquipOutcome::Rejected(item);
        }
        EquipOutcome::Equipped {
            previous: self.slots.insert(slot, item),
        }
    }

    /// Removes and returns the occupant of `slot`, if any.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Equipped items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> + '_ {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of every equipped item's instance stats.
    pub fn total_stats(&self) -> StatLedger {
        let mut total = StatLedger::new();
        for item in self.slots.values() {
            total.absorb(item.stats());
        }
        total
    }
}

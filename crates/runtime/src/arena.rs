//! Arena state shared between the loop thread and external callers.
//!
//! Every operation takes the single state lock for its whole duration and
//! releases it before publishing events.

use std::sync::{Mutex, MutexGuard};

use mech_core::{ArenaEngine, ArenaEvent, ArenaState, Catalog, EquipReceipt, EquipmentSlot, GameConfig, InventoryError};
use tracing::{debug, info};

use crate::api::{ArenaSnapshot, Result, RuntimeError};
use crate::events::{Event, EventBus};

pub(crate) struct SharedArena {
    state: Mutex<ArenaState>,
    catalog: Catalog,
    config: GameConfig,
    events: EventBus,
}

impl SharedArena {
    pub(crate) fn new(state: ArenaState, catalog: Catalog, config: GameConfig, events: EventBus) -> Self {
        Self {
            state: Mutex::new(state),
            catalog,
            config,
            events,
        }
    }

    pub(crate) fn events(&self) -> &EventBus {
        &self.events
    }

    fn lock(&self) -> Result<MutexGuard<'_, ArenaState>> {
        self.state.lock().map_err(|_| RuntimeError::StatePoisoned)
    }

    /// Panics while holding the state lock on a scratch thread.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let _ = scope
                .spawn(|| {
                    let _guard = self.state.lock();
                    panic!("poisoning arena state");
                })
                .join();
        });
    }

    /// Runs one engine tick under the lock.
    pub(crate) fn step(&self, delta_time: f64) -> Result<Vec<ArenaEvent>> {
        let events = {
            let mut state = self.lock()?;
            let mut rng = rand::thread_rng();
            ArenaEngine::new(&mut state, &self.catalog, &self.config).tick(delta_time, &mut rng)
        };

        for event in &events {
            debug!(target: "runtime::arena", event = ?event, "Arena event");
            self.events.publish(Event::Arena(event.clone()));
        }
        Ok(events)
    }

    pub(crate) fn snapshot(&self) -> Result<ArenaSnapshot> {
        let state = self.lock()?;
        Ok(ArenaSnapshot::capture(&state))
    }

    pub(crate) fn equip_from_inventory(&self, index: usize) -> Result<EquipReceipt> {
        let receipt = {
            let mut state = self.lock()?;
            let receipt = state.player.equip_from_inventory(index)?;
            let message = match &receipt.displaced {
                Some(previous) => format!("Equipped {} (replaced {previous}).", receipt.equipped),
                None => format!("Equipped {}.", receipt.equipped),
            };
            state.log.push(message);
            receipt
        };

        info!(
            target: "runtime::arena",
            slot = %receipt.slot,
            item = %receipt.equipped,
            displaced = ?receipt.displaced,
            "Equipped from inventory"
        );
        self.events.publish(Event::Arena(ArenaEvent::EquipmentChanged {
            slot: receipt.slot,
            equipped: Some(receipt.equipped.clone()),
            removed: receipt.displaced.clone(),
        }));
        Ok(receipt)
    }

    pub(crate) fn unequip(&self, slot: EquipmentSlot) -> Result<String> {
        let name = {
            let mut state = self.lock()?;
            let name = state
                .player
                .unequip_to_inventory(slot)
                .map_err(|error| match error {
                    InventoryError::SlotEmpty { slot } => RuntimeError::NothingEquipped(slot),
                    other => RuntimeError::Inventory(other),
                })?;
            state.log.push(format!("Unequipped {name}."));
            name
        };

        info!(target: "runtime::arena", slot = %slot, item = %name, "Unequipped to inventory");
        self.events.publish(Event::Arena(ArenaEvent::EquipmentChanged {
            slot,
            equipped: None,
            removed: Some(name.clone()),
        }));
        Ok(name)
    }
}

//! Cloneable façade for reading and mutating the running arena.
//!
//! [`RuntimeHandle`] is `Send + Sync` and can be handed to any thread. Each
//! call takes the arena lock once and releases it before returning.
use std::collections::HashMap;
use std::sync::Arc;

use mech_core::{EquipReceipt, EquipmentSlot};
use tokio::sync::broadcast;

use super::errors::Result;
use super::snapshot::ArenaSnapshot;
use crate::arena::SharedArena;
use crate::events::{Event, Topic};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    arena: Arc<SharedArena>,
}

impl RuntimeHandle {
    pub(crate) fn new(arena: Arc<SharedArena>) -> Self {
        Self { arena }
    }

    pub(crate) fn arena(&self) -> &Arc<SharedArena> {
        &self.arena
    }

    /// Consistent copy of the whole arena.
    pub fn snapshot(&self) -> Result<ArenaSnapshot> {
        self.arena.snapshot()
    }

    /// Moves inventory item `index` into its slot; a displaced item returns
    /// to the inventory.
    ///
    /// Fails with `Inventory(NotFound)` for a bad index and
    /// `Inventory(NoEquipmentSlot)` for an item that cannot be worn.
    pub fn equip_from_inventory(&self, index: usize) -> Result<EquipReceipt> {
        self.arena.equip_from_inventory(index)
    }

    /// Moves the item in `slot` back to the inventory and returns its name.
    pub fn unequip(&self, slot: EquipmentSlot) -> Result<String> {
        self.arena.unequip(slot)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut combat = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat.blocking_recv() {
    ///     println!("{event:?}");
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.arena.events().subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.arena.events().subscribe_multiple(topics)
    }
}

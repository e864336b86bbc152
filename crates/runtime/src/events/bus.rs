//! Topic-based event bus implementation.

use std::collections::HashMap;

use mech_core::ArenaEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::runtime::LoopState;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::EnumIter)]
pub enum Topic {
    /// Spawns, combat starts, attacks, defeats, revives
    Combat,
    /// Loot drops and floor changes
    Progress,
    /// Equip and unequip actions
    Equipment,
    /// Simulation loop start/stop transitions
    Lifecycle,
}

/// Event wrapper that carries the typed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Arena(ArenaEvent),
    Lifecycle(LoopState),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Arena(event) => match event {
                ArenaEvent::OpponentSpawned { .. }
                | ArenaEvent::CombatStarted { .. }
                | ArenaEvent::AttackResolved { .. }
                | ArenaEvent::OpponentDefeated { .. }
                | ArenaEvent::PlayerRevived => Topic::Combat,
                ArenaEvent::LootAwarded { .. } | ArenaEvent::FloorAdvanced { .. } => {
                    Topic::Progress
                }
                ArenaEvent::EquipmentChanged { .. } => Topic::Equipment,
            },
            Event::Lifecycle(_) => Topic::Lifecycle,
        }
    }
}

/// Topic-based event bus
///
/// Channels are fixed at construction, so publishing never blocks and
/// cloning shares the same senders. Receivers that fall behind by more than
/// the capacity see `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    progress: broadcast::Sender<Event>,
    equipment: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            combat: broadcast::channel(capacity).0,
            progress: broadcast::channel(capacity).0,
            equipment: broadcast::channel(capacity).0,
            lifecycle: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Progress => &self.progress,
            Topic::Equipment => &self.equipment,
            Topic::Lifecycle => &self.lifecycle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

//! Runtime orchestration for the mech arena.
//!
//! This crate runs the [`mech_core::ArenaEngine`] on a background thread and
//! exposes the shared arena to other threads through [`RuntimeHandle`].
//! Consumers embed [`Runtime`] to start and stop the loop, read snapshots,
//! move gear between inventory and equipment, and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the lifecycle state machine and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the loop thread internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod arena;
mod workers;

pub use api::{ArenaSnapshot, CombatantView, InventoryEntry, Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, Topic};
pub use runtime::{LoopState, Runtime, RuntimeBuilder, RuntimeConfig};

//! Unified error types surfaced by the runtime API.
//!
//! Wraps lifecycle, locking, and inventory failures so clients can bubble
//! them up with consistent context.
use std::io;

use mech_core::{EquipmentSlot, GameError, InventoryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation loop is already running")]
    AlreadyRunning,

    #[error("failed to spawn simulation thread")]
    WorkerSpawn(#[source] io::Error),

    #[error("simulation thread panicked")]
    WorkerJoin,

    #[error("arena state lock poisoned by a panicked thread")]
    StatePoisoned,

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("nothing equipped in slot {0}")]
    NothingEquipped(EquipmentSlot),
}

impl RuntimeError {
    /// Whether the caller sent a bad request, as opposed to a runtime fault.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::AlreadyRunning | Self::NothingEquipped(_) => true,
            Self::Inventory(error) => !error.severity().is_internal(),
            Self::WorkerSpawn(_) | Self::WorkerJoin | Self::StatePoisoned => false,
        }
    }
}

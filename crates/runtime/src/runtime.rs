//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation thread and its lifecycle
//! (`Stopped → Starting → Running → Stopping → Stopped`), and exposes a
//! builder-based API for clients to set up the arena.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use mech_core::{ArenaEvent, ArenaState, Catalog, GameConfig, Mech, PilotArchetype, PilotClass};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::arena::SharedArena;
use crate::events::{Event, EventBus};
use crate::workers::SimulationWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Sleep between loop iterations.
    pub tick_interval: Duration,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            event_buffer_size: 100,
        }
    }
}

/// Simulation loop lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum LoopState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

struct Lifecycle {
    state: LoopState,
    worker: Option<JoinHandle<()>>,
}

/// Main runtime that owns the simulation loop
///
/// Design: Runtime owns the worker thread and its lifecycle.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    running: Arc<AtomicBool>,
    lifecycle: Mutex<Lifecycle>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across threads and outlives neither the
    /// arena nor the event bus.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        let mut lifecycle = match self.lifecycle.lock() {
            Ok(lifecycle) => lifecycle,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.reap_finished_worker(&mut lifecycle);
        lifecycle.state
    }

    /// Whether the loop thread is (still) iterating.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn lifecycle(&self) -> Result<MutexGuard<'_, Lifecycle>> {
        self.lifecycle.lock().map_err(|_| RuntimeError::StatePoisoned)
    }

    fn transition(&self, lifecycle: &mut Lifecycle, state: LoopState) {
        lifecycle.state = state;
        info!(target: "runtime::lifecycle", state = %state, "Loop state changed");
        self.handle.arena().events().publish(Event::Lifecycle(state));
    }

    /// Joins a worker that exited on its own (a failed tick) and moves the
    /// lifecycle back to `Stopped`.
    fn reap_finished_worker(&self, lifecycle: &mut Lifecycle) {
        if !lifecycle.worker.as_ref().is_some_and(JoinHandle::is_finished) {
            return;
        }
        if let Some(worker) = lifecycle.worker.take() {
            if worker.join().is_err() {
                warn!(target: "runtime::lifecycle", "Simulation thread panicked");
            }
        }
        self.running.store(false, Ordering::Release);
        self.transition(lifecycle, LoopState::Stopped);
    }

    /// Spawns the simulation thread.
    ///
    /// Fails with [`RuntimeError::AlreadyRunning`] unless the loop is
    /// stopped. If the thread cannot be spawned the runtime rolls back to
    /// `Stopped` so a retry is possible.
    pub fn start(&self) -> Result<()> {
        let mut lifecycle = self.lifecycle()?;
        self.reap_finished_worker(&mut lifecycle);
        if lifecycle.state != LoopState::Stopped {
            return Err(RuntimeError::AlreadyRunning);
        }
        self.transition(&mut lifecycle, LoopState::Starting);
        self.running.store(true, Ordering::Release);

        let worker = SimulationWorker::new(
            Arc::clone(self.handle.arena()),
            Arc::clone(&self.running),
            self.config.tick_interval,
        );
        let spawned = thread::Builder::new()
            .name("simulation".into())
            .spawn(move || worker.run());

        match spawned {
            Ok(worker) => {
                lifecycle.worker = Some(worker);
                self.transition(&mut lifecycle, LoopState::Running);
                Ok(())
            }
            Err(error) => {
                self.running.store(false, Ordering::Release);
                error!(target: "runtime::lifecycle", error = %error, "Failed to spawn simulation thread");
                self.transition(&mut lifecycle, LoopState::Stopped);
                Err(RuntimeError::WorkerSpawn(error))
            }
        }
    }

    /// Clears the running flag and joins the simulation thread.
    ///
    /// Stopping an already stopped runtime is a no-op.
    pub fn stop(&self) -> Result<()> {
        let worker = {
            let mut lifecycle = self.lifecycle()?;
            match lifecycle.worker.take() {
                Some(worker) => {
                    self.transition(&mut lifecycle, LoopState::Stopping);
                    worker
                }
                None => return Ok(()),
            }
        };

        self.running.store(false, Ordering::Release);
        let joined = worker.join();

        let mut lifecycle = self.lifecycle()?;
        self.transition(&mut lifecycle, LoopState::Stopped);
        joined.map_err(|_| RuntimeError::WorkerJoin)
    }

    /// Runs exactly one locked tick of `delta_time` seconds on the calling
    /// thread. The loop thread uses the same path.
    pub fn step(&self, delta_time: f64) -> Result<Vec<ArenaEvent>> {
        self.handle.arena().step(delta_time)
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        if let Err(error) = self.stop() {
            warn!(target: "runtime::lifecycle", error = %error, "Failed to stop simulation loop on drop");
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
    pilot_name: String,
    archetype: Option<PilotArchetype>,
    state: Option<ArenaState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            pilot_name: "Player".into(),
            archetype: None,
            state: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Item and boss catalog. Without one, no loot drops and every boss is
    /// the synthetic fallback.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn pilot_name(mut self, name: impl Into<String>) -> Self {
        self.pilot_name = name.into();
        self
    }

    /// Start from an archetype's kit instead of the default player stats.
    pub fn archetype(mut self, archetype: PilotArchetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    /// Provide initial arena state; overrides pilot name and archetype.
    pub fn initial_state(mut self, state: ArenaState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime. The loop is not started.
    pub fn build(self) -> Runtime {
        let game_config = self.config.game_config.clone();
        let state = self.state.unwrap_or_else(|| {
            let stats = match self.archetype {
                Some(archetype) => PilotClass::for_archetype(archetype).stats,
                None => PilotClass::default_player_stats(),
            };
            ArenaState::new(Mech::new(self.pilot_name, stats), &game_config)
        });

        let events = EventBus::with_capacity(self.config.event_buffer_size);
        let arena = SharedArena::new(
            state,
            self.catalog.unwrap_or_default(),
            game_config,
            events,
        );

        Runtime {
            handle: RuntimeHandle::new(Arc::new(arena)),
            config: self.config,
            running: Arc::new(AtomicBool::new(false)),
            lifecycle: Mutex::new(Lifecycle {
                state: LoopState::Stopped,
                worker: None,
            }),
        }
    }
}

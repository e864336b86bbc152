//! Fixed-cadence loop thread driving the shared arena.
//!
//! Each iteration measures wall-clock time since the previous one, runs one
//! locked tick, then sleeps. The running flag is only checked between
//! iterations, so a tick in progress always completes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::arena::SharedArena;

pub(crate) struct SimulationWorker {
    arena: Arc<SharedArena>,
    running: Arc<AtomicBool>,
    tick_interval: Duration,
}

impl SimulationWorker {
    pub(crate) fn new(
        arena: Arc<SharedArena>,
        running: Arc<AtomicBool>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            arena,
            running,
            tick_interval,
        }
    }

    /// Main worker loop.
    pub(crate) fn run(self) {
        info!(
            target: "runtime::worker",
            interval_ms = self.tick_interval.as_millis() as u64,
            "Simulation loop started"
        );

        let mut ticks: u64 = 0;
        let mut last = Instant::now();
        while self.running.load(Ordering::Acquire) {
            let now = Instant::now();
            let delta_time = now.duration_since(last).as_secs_f64();
            last = now;

            if let Err(error) = self.arena.step(delta_time) {
                error!(
                    target: "runtime::worker",
                    error = %error,
                    "Tick failed, stopping simulation loop"
                );
                self.running.store(false, Ordering::Release);
                break;
            }
            ticks += 1;

            thread::sleep(self.tick_interval);
        }

        info!(target: "runtime::worker", ticks, "Simulation loop stopped");
    }
}

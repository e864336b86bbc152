//! Worker threads that back the runtime orchestration.

mod simulation;

pub(crate) use simulation::SimulationWorker;

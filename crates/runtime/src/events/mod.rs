//! Topic-based event bus for runtime events.
//!
//! Every tick's [`mech_core::ArenaEvent`]s and lifecycle transitions are
//! published to a topic; consumers subscribe only to the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};

//! Authoritative arena state.
//!
//! One [`ArenaState`] holds the active combatant pair, floor progress, the
//! combat phase, and the rolling event log. Runtime layers read it directly
//! and mutate it through [`crate::engine::ArenaEngine`] or the player's
//! inventory and equipment methods.

mod log;

pub use log::EventLog;

use crate::config::GameConfig;
use crate::mech::Mech;

/// Combat state machine phase.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CombatPhase {
    #[default]
    Idle,
    PlayerTurn,
    EnemyTurn,
    /// Reserved; no transition enters it.
    BetweenTurns,
    EnemyDefeated,
}

impl CombatPhase {
    pub fn is_fighting(&self) -> bool {
        matches!(self, Self::PlayerTurn | Self::EnemyTurn)
    }
}

/// Floor progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Current floor, starting at 1.
    pub floor: u32,
    /// Opponents defeated on this floor.
    pub defeated: u32,
    pub opponent_is_boss: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            floor: 1,
            defeated: 0,
            opponent_is_boss: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaState {
    pub player: Mech,
    /// `None` until the first spawn.
    pub opponent: Option<Mech>,
    pub progress: Progress,
    pub phase: CombatPhase,
    /// Seconds accumulated toward the current attacker's next action.
    pub time_since_last_action: f64,
    pub log: EventLog,
}

impl ArenaState {
    pub fn new(player: Mech, config: &GameConfig) -> Self {
        Self {
            player,
            opponent: None,
            progress: Progress::default(),
            phase: CombatPhase::Idle,
            time_since_last_action: 0.0,
            log: EventLog::with_capacity(config.event_log_capacity),
        }
    }

    /// Starts with `opponent` already in the arena.
    pub fn with_opponent(mut self, opponent: Mech, is_boss: bool) -> Self {
        self.opponent = Some(opponent);
        self.progress.opponent_is_boss = is_boss;
        self
    }

    pub fn opponent_alive(&self) -> bool {
        self.opponent.as_ref().is_some_and(Mech::is_alive)
    }
}

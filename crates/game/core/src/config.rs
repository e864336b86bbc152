/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Regular opponents a floor yields before its boss appears.
    pub enemies_per_floor: u32,
    /// Capacity of the rolling event log; oldest entries are evicted first.
    pub event_log_capacity: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENEMIES_PER_FLOOR: u32 = 20;
    pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self {
            enemies_per_floor: Self::DEFAULT_ENEMIES_PER_FLOOR,
            event_log_capacity: Self::DEFAULT_EVENT_LOG_CAPACITY,
        }
    }

    pub fn with_enemies_per_floor(mut self, enemies_per_floor: u32) -> Self {
        self.enemies_per_floor = enemies_per_floor;
        self
    }

    pub fn with_event_log_capacity(mut self, event_log_capacity: usize) -> Self {
        self.event_log_capacity = event_log_capacity;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

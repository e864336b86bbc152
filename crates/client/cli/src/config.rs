//! Runner configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use mech_core::PilotArchetype;

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub pilot_name: String,
    pub archetype: Option<PilotArchetype>,
    pub run_for: Duration,
    pub report_every: Duration,
    pub tick_interval: Option<Duration>,
    pub auto_equip: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            pilot_name: "Player".into(),
            archetype: None,
            run_for: Duration::from_secs(30),
            report_every: Duration::from_secs(2),
            tick_interval: None,
            auto_equip: true,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MECH_DATA_DIR` - Directory with `config.toml`, `items.ron`, `bosses.ron` (default: `data`)
    /// - `MECH_PILOT_NAME` - Player mech name (default: `Player`)
    /// - `MECH_PILOT` - Archetype: `BULWARK`, `ACE`, or `TECHNOCRAT` (default: none)
    /// - `MECH_RUN_SECONDS` - How long to run before stopping (default: 30)
    /// - `MECH_REPORT_MS` - Milliseconds between status reports (default: 2000)
    /// - `MECH_TICK_MS` - Loop sleep between ticks (default: runtime default)
    /// - `MECH_AUTO_EQUIP` - Equip loot into empty slots (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MECH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("MECH_PILOT_NAME") {
            config.pilot_name = name;
        }
        if let Ok(value) = env::var("MECH_PILOT") {
            match value.parse::<PilotArchetype>() {
                Ok(archetype) => config.archetype = Some(archetype),
                Err(_) => tracing::warn!("Ignoring unknown MECH_PILOT `{}`", value),
            }
        }
        if let Some(seconds) = read_env::<u64>("MECH_RUN_SECONDS") {
            config.run_for = Duration::from_secs(seconds);
        }
        if let Some(ms) = read_env::<u64>("MECH_REPORT_MS") {
            config.report_every = Duration::from_millis(ms.max(1));
        }
        config.tick_interval = read_env::<u64>("MECH_TICK_MS").map(Duration::from_millis);
        if let Some(enable) = read_env::<bool>("MECH_AUTO_EQUIP") {
            config.auto_equip = enable;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! Game configuration loader.

use std::path::Path;

use mech_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enemies_per_floor = 5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.enemies_per_floor, 5);
        assert_eq!(config.event_log_capacity, GameConfig::DEFAULT_EVENT_LOG_CAPACITY);
    }

    #[test]
    fn missing_file_names_path() {
        let error = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/config.toml"));
    }
}

//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use mech_core::{Catalog, GameConfig};

use crate::loaders::{BossLoader, ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── bosses.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load and validate `items.ron` and `bosses.ron` into one catalog.
    ///
    /// Any invalid record fails the whole load.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let items = ItemLoader::load(&self.data_dir.join("items.ron"))?;
        let bosses = BossLoader::load(&self.data_dir.join("bosses.ron"))?;

        Catalog::from_records(items, bosses).map_err(|e| {
            anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e)
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::{EquipmentSlot, StatKind};
    use std::fs;

    const ITEMS: &str = r#"#![enable(implicit_some)]
(
    items: [
        (
            id: "servo_arms",
            name: "Servo Arms",
            description: "Faster actuators.",
            slot: "ARMS",
            base_stats: { "ATTACK_SPEED": 0.5 },
            required_tech: 1,
        ),
    ],
)"#;

    const BOSSES: &str = r#"#![enable(implicit_some)]
(
    bosses: {
        1: (name: "Scrapyard Tyrant", stats: { "HEALTH": 600.0, "ATTACK": 20.0 }),
    },
)"#;

    fn data_dir(items: &str, bosses: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("items.ron"), items).unwrap();
        fs::write(dir.path().join("bosses.ron"), bosses).unwrap();
        fs::write(dir.path().join("config.toml"), "enemies_per_floor = 3\n").unwrap();
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_full_catalog() {
        let dir = data_dir(ITEMS, BOSSES);
        let factory = ContentFactory::new(dir.path());

        let catalog = factory.load_catalog().unwrap();
        let config = factory.load_config().unwrap();

        let arms = catalog.item("servo_arms").unwrap();
        assert_eq!(arms.slot, EquipmentSlot::Arms);
        assert_eq!(arms.base_stats.get(StatKind::AttackSpeed), 0.5);
        assert_eq!(catalog.boss(1).map(|boss| boss.name.as_str()), Some("Scrapyard Tyrant"));
        assert_eq!(config.enemies_per_floor, 3);
    }

    #[test]
    fn unknown_slot_fails_whole_load() {
        let items = ITEMS.replace("\"ARMS\"", "\"TAIL\"");
        let dir = data_dir(&items, BOSSES);

        let error = ContentFactory::new(dir.path()).load_catalog().unwrap_err();

        assert!(error.to_string().contains("TAIL"));
    }

    #[test]
    fn missing_boss_file_fails() {
        let dir = data_dir(ITEMS, BOSSES);
        fs::remove_file(dir.path().join("bosses.ron")).unwrap();

        assert!(ContentFactory::new(dir.path()).load_catalog().is_err());
    }
}

//! Floor boss loader.

use std::collections::BTreeMap;
use std::path::Path;

use mech_core::BossRecord;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Boss table structure for RON files, keyed by floor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossTable {
    #[serde(default)]
    pub bosses: BTreeMap<u32, BossRecord>,
}

/// Loader for floor-indexed boss records.
pub struct BossLoader;

impl BossLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<u32, BossRecord>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<u32, BossRecord>> {
        let table: BossTable = ron::from_str(content)?;
        Ok(table.bosses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_floor_keys() {
        let bosses = BossLoader::parse(
            r#"#![enable(implicit_some)]
            (
                bosses: {
                    1: (name: "Scrapyard Tyrant", stats: { "HEALTH": 600.0 }),
                    5: (name: "Gatekeeper"),
                },
            )"#,
        )
        .unwrap();

        assert_eq!(bosses.len(), 2);
        assert_eq!(bosses[&1].name.as_deref(), Some("Scrapyard Tyrant"));
        assert!(bosses[&5].stats.is_none());
    }

    #[test]
    fn empty_table_is_allowed() {
        assert!(BossLoader::parse("()").unwrap().is_empty());
    }
}

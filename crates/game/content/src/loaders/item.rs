//! Item catalog loader.

use std::path::Path;

use mech_core::ItemRecord;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemRecord>,
}

/// Loader for item records from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load raw item records from a RON file.
    ///
    /// Records are not validated here; [`mech_core::Catalog::from_records`]
    /// does that once bosses are loaded too.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemRecord>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemRecord>> {
        let catalog: ItemCatalog = ron::from_str(content)?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_with_optional_fields() {
        let records = ItemLoader::parse(
            r#"#![enable(implicit_some)]
            (
                items: [
                    (
                        id: "visor",
                        name: "Targeting Visor",
                        slot: "HEAD",
                        base_stats: { "ATTACK": 2.0 },
                        required_tech: 2,
                    ),
                    (
                        id: "bare",
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slot.as_deref(), Some("HEAD"));
        assert_eq!(records[0].required_tech, Some(2));
        assert_eq!(records[1].name, None);
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(ItemLoader::parse("(items: [").is_err());
    }
}

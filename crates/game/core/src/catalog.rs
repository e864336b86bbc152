//! Read-only content catalog: item templates and floor-indexed bosses.
//!
//! Loaders hand over raw records; [`Catalog::from_records`] validates all of
//! them up front so the simulation never starts on a partial catalog.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rand::Rng;

use crate::error::{DataError, ItemError};
use crate::item::{self, Item, ItemRecord, ItemTemplate, parse_stat_map};
use crate::stats::StatLedger;

/// Predefined boss for one floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub name: String,
    pub stats: StatLedger,
}

/// Boss record as parsed by a loader, before validation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BossRecord {
    pub name: Option<String>,
    pub stats: Option<BTreeMap<String, f64>>,
}

impl BossRecord {
    fn into_definition(self, floor: u32) -> Result<BossDefinition, DataError> {
        let label = format!("boss for floor {floor}");
        if floor == 0 {
            return Err(DataError::InvalidValue {
                record: label,
                field: "floor",
                reason: "floors start at 1".into(),
            });
        }
        let name = self.name.ok_or_else(|| DataError::MissingField {
            record: label.clone(),
            field: "name",
        })?;
        let raw = self.stats.ok_or_else(|| DataError::MissingField {
            record: label.clone(),
            field: "stats",
        })?;
        Ok(BossDefinition {
            name,
            stats: parse_stat_map(&label, raw)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Arc<ItemTemplate>>,
    bosses: BTreeMap<u32, BossDefinition>,
}

impl Catalog {
    pub fn new(items: Vec<ItemTemplate>, bosses: BTreeMap<u32, BossDefinition>) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
            bosses,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates every record; the first failure aborts the whole load.
    pub fn from_records(
        items: Vec<ItemRecord>,
        bosses: BTreeMap<u32, BossRecord>,
    ) -> Result<Self, DataError> {
        let mut seen = BTreeSet::new();
        let mut templates = Vec::with_capacity(items.len());
        for record in items {
            let template = ItemTemplate::try_from(record)?;
            if !seen.insert(template.id.clone()) {
                return Err(DataError::InvalidValue {
                    record: format!("item `{}`", template.id),
                    field: "id",
                    reason: "duplicate id".into(),
                });
            }
            templates.push(template);
        }

        let bosses = bosses
            .into_iter()
            .map(|(floor, record)| Ok((floor, record.into_definition(floor)?)))
            .collect::<Result<BTreeMap<_, _>, DataError>>()?;

        Ok(Self::new(templates, bosses))
    }

    pub fn items(&self) -> &[Arc<ItemTemplate>] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Arc<ItemTemplate>> {
        self.items.iter().find(|template| template.id == id)
    }

    pub fn boss(&self, floor: u32) -> Option<&BossDefinition> {
        self.bosses.get(&floor)
    }

    pub fn boss_count(&self) -> usize {
        self.bosses.len()
    }

    /// Rolls one loot drop from this catalog's templates.
    pub fn generate_random_item<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Item>, ItemError> {
        item::generate_random_item(&self.items, rng)
    }
}

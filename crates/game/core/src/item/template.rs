//! Item templates and the raw records loaders hand over.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{DataError, ItemError};
use crate::stats::{SCALED_STAT_CAP, StatKind, StatLedger};

use super::EquipmentSlot;

/// Immutable item blueprint shared (via `Arc`) by every instance rolled from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slot: EquipmentSlot,
    pub base_stats: StatLedger,
    /// Minimum pilot Technology to field the item.
    pub required_tech: u32,
}

impl ItemTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slot: EquipmentSlot,
        base_stats: StatLedger,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            slot,
            base_stats,
            required_tech: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_required_tech(mut self, required_tech: u32) -> Self {
        self.required_tech = required_tech;
        self
    }

    /// Checks the invariants instance rolls rely on.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.id.trim().is_empty() {
            return Err(ItemError::InvalidTemplate {
                id: self.id.clone(),
                reason: "empty id",
            });
        }
        if !self.base_stats.is_finite() {
            return Err(ItemError::InvalidTemplate {
                id: self.id.clone(),
                reason: "non-finite base stat",
            });
        }
        if self.base_stats.iter().any(|(_, value)| value.abs() > SCALED_STAT_CAP) {
            return Err(ItemError::InvalidTemplate {
                id: self.id.clone(),
                reason: "base stat out of range",
            });
        }
        Ok(())
    }
}

/// Item record as parsed by a loader, before validation.
///
/// Enumerations arrive as their canonical strings and are resolved through
/// the same `FromStr` mapping the rest of the crate uses.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub slot: Option<String>,
    pub base_stats: Option<BTreeMap<String, f64>>,
    pub required_tech: Option<u32>,
}

impl TryFrom<ItemRecord> for ItemTemplate {
    type Error = DataError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or_else(|| DataError::MissingField {
            record: "item".into(),
            field: "id",
        })?;
        let label = format!("item `{id}`");
        let missing = |field: &'static str| DataError::MissingField {
            record: label.clone(),
            field,
        };

        let name = record.name.ok_or_else(|| missing("name"))?;
        let slot = record.slot.ok_or_else(|| missing("slot"))?;
        let raw_stats = record.base_stats.ok_or_else(|| missing("base_stats"))?;

        let slot = EquipmentSlot::from_str(&slot).map_err(|_| DataError::UnknownVariant {
            kind: "equipment slot",
            value: slot.clone(),
        })?;
        let base_stats = parse_stat_map(&label, raw_stats)?;

        let template = ItemTemplate {
            id,
            name,
            description: record.description.unwrap_or_default(),
            slot,
            base_stats,
            required_tech: record.required_tech.unwrap_or(0),
        };
        template.validate().map_err(|error| DataError::InvalidValue {
            record: label,
            field: "id",
            reason: error.to_string(),
        })?;
        Ok(template)
    }
}

/// Resolves a `STAT_NAME -> value` map into a [`StatLedger`].
pub(crate) fn parse_stat_map(
    label: &str,
    raw: BTreeMap<String, f64>,
) -> Result<StatLedger, DataError> {
    let mut ledger = StatLedger::new();
    for (name, value) in raw {
        let kind = StatKind::from_str(&name).map_err(|_| DataError::UnknownVariant {
            kind: "stat",
            value: name.clone(),
        })?;
        if !value.is_finite() {
            return Err(DataError::InvalidValue {
                record: label.to_string(),
                field: "base_stats",
                reason: format!("{kind} is not finite"),
            });
        }
        if value.abs() > SCALED_STAT_CAP {
            return Err(DataError::InvalidValue {
                record: label.to_string(),
                field: "base_stats",
                reason: format!("{kind} exceeds {SCALED_STAT_CAP:e}"),
            });
        }
        ledger.add(kind, value);
    }
    Ok(ledger)
}

//! Common error infrastructure for mech-core.
//!
//! Domain errors live next to the data they validate:
//! - [`ItemError`] for item instantiation
//! - [`DataError`] for catalog records handed over by loaders
//! - [`InventoryError`] for inventory and equip actions
//!
//! Transient gameplay conditions (player defeat, empty loot table, missing boss
//! definition) are not errors; the engine handles them in-band.

use crate::item::EquipmentSlot;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; retrying without changes fails again.
    ///
    /// Examples: inventory index out of range, item without an equipment slot
    Validation,

    /// Content or state that should never reach the core.
    ///
    /// Examples: catalog record missing a field, template with non-finite stats
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all mech-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while instantiating an item from its template.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ItemError {
    #[error("invalid item template `{id}`: {reason}")]
    InvalidTemplate { id: String, reason: &'static str },
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTemplate { .. } => "ITEM_INVALID_TEMPLATE",
        }
    }
}

/// Errors raised when a catalog record is incomplete or malformed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("{record} record is missing required field `{field}`")]
    MissingField {
        record: String,
        field: &'static str,
    },

    #[error("{record} record has invalid `{field}`: {reason}")]
    InvalidValue {
        record: String,
        field: &'static str,
        reason: String,
    },

    #[error("unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}

impl GameError for DataError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "DATA_MISSING_FIELD",
            Self::InvalidValue { .. } => "DATA_INVALID_VALUE",
            Self::UnknownVariant { .. } => "DATA_UNKNOWN_VARIANT",
        }
    }
}

/// Errors raised by inventory and equipment actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("no inventory item at index {index} (inventory holds {len})")]
    NotFound { index: usize, len: usize },

    #[error("item `{name}` has no equipment slot")]
    NoEquipmentSlot { name: String },

    #[error("nothing equipped in slot {slot}")]
    SlotEmpty { slot: EquipmentSlot },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "INVENTORY_NOT_FOUND",
            Self::NoEquipmentSlot { .. } => "INVENTORY_NO_EQUIPMENT_SLOT",
            Self::SlotEmpty { .. } => "INVENTORY_SLOT_EMPTY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_errors_are_validation() {
        let error = InventoryError::NotFound { index: 3, len: 1 };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "INVENTORY_NOT_FOUND");
        assert_eq!(
            error.to_string(),
            "no inventory item at index 3 (inventory holds 1)"
        );
    }

    #[test]
    fn data_errors_are_internal() {
        let error = DataError::MissingField {
            record: "item `laser_arm`".into(),
            field: "slot",
        };
        assert!(error.severity().is_internal());
        assert_eq!(
            error.to_string(),
            "item `laser_arm` record is missing required field `slot`"
        );
    }
}

//! Stat system: stat kinds and the additive ledger every layer builds on.
//!
//! Total stats are always `base ⊕ equipment`, where `⊕` is
//! [`StatLedger::merge`] (pointwise addition).

pub mod kind;
pub mod ledger;

pub use kind::StatKind;
pub use ledger::StatLedger;

/// Upper bound for scaled stats and for the magnitude of content base stats.
pub const SCALED_STAT_CAP: f64 = 1e12;

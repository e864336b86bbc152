//! Additive stat ledger.

use std::collections::BTreeMap;

use super::StatKind;

/// Mapping from [`StatKind`] to value; absent kinds read as `0.0`.
///
/// Non-finite inputs are dropped and overflowing sums saturate at
/// `±f64::MAX`, so a ledger never holds NaN or Infinity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatLedger {
    values: BTreeMap<StatKind, f64>,
}

impl StatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `kind`, or `0.0` if the ledger has no entry.
    pub fn get(&self, kind: StatKind) -> f64 {
        self.values.get(&kind).copied().unwrap_or(0.0)
    }

    /// Adds `delta` to `kind`, creating the entry if needed.
    ///
    /// A sum that overflows saturates at `f64::MAX` with the sign of the overflow.
    pub fn add(&mut self, kind: StatKind, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let entry = self.values.entry(kind).or_insert(0.0);
        let sum = *entry + delta;
        *entry = if sum.is_finite() {
            sum
        } else {
            f64::MAX.copysign(sum)
        };
    }

    /// Overwrites the entry for `kind`.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        if value.is_finite() {
            self.values.insert(kind, value);
        }
    }

    /// Builder-style [`StatLedger::set`].
    #[must_use]
    pub fn with(mut self, kind: StatKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    /// Pointwise sum over the union of keys. Neither input is modified.
    pub fn merge(a: &StatLedger, b: &StatLedger) -> StatLedger {
        let mut merged = a.clone();
        merged.absorb(b);
        merged
    }

    /// Adds every entry of `other` into `self`.
    pub fn absorb(&mut self, other: &StatLedger) {
        for (kind, value) in other.iter() {
            self.add(kind, value);
        }
    }

    pub fn contains(&self, kind: StatKind) -> bool {
        self.values.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Entries in [`StatKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.values.iter().map(|(kind, value)| (*kind, *value))
    }

    /// Returns true if every stored value is finite.
    pub fn is_finite(&self) -> bool {
        self.values.values().all(|value| value.is_finite())
    }
}

impl FromIterator<(StatKind, f64)> for StatLedger {
    fn from_iter<I: IntoIterator<Item = (StatKind, f64)>>(iter: I) -> Self {
        let mut ledger = StatLedger::new();
        for (kind, value) in iter {
            ledger.add(kind, value);
        }
        ledger
    }
}

impl<const N: usize> From<[(StatKind, f64); N]> for StatLedger {
    fn from(entries: [(StatKind, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

//! Closed set of stats a mech or item can carry.

/// Stat kinds.
///
/// The canonical string form (`HEALTH`, `ENERGY_SHIELD`, ...) is shared by
/// `Display`/`FromStr` and serde so catalogs and snapshots never drift apart.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StatKind {
    /// Maximum structure points.
    Health,
    /// Mitigation applied to health damage once the shield is down.
    Armor,
    /// Shield pool that absorbs damage before health.
    EnergyShield,
    /// Damage dealt per attack.
    Attack,
    /// Attacks per second.
    AttackSpeed,
    /// Decides who strikes first.
    Mobility,
    /// Maximum energy.
    Energy,
    /// Energy regained per second.
    EnergyRecovery,
    /// Health regained per second.
    Repair,
    /// Gates which items a pilot can field.
    Technology,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn canonical_names_round_trip() {
        assert_eq!(StatKind::EnergyShield.to_string(), "ENERGY_SHIELD");
        assert_eq!(StatKind::from_str("ATTACK_SPEED"), Ok(StatKind::AttackSpeed));
        assert_eq!(StatKind::from_str("energy_recovery"), Ok(StatKind::EnergyRecovery));
        assert!(StatKind::from_str("LUCK").is_err());
    }
}

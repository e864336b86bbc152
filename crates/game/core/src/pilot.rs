//! Pilot archetypes: starting stat kits plus a passive, keyed by tag.

use crate::stats::{StatKind, StatLedger};

/// Archetype tag. New archetypes are a table entry in [`PilotClass::for_archetype`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PilotArchetype {
    /// Heavy plating and shields.
    Bulwark,
    /// Fast, fragile, strikes first.
    Ace,
    /// Large energy pool and high Technology.
    Technocrat,
}

/// Passive ability descriptor carried by a pilot class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassPassive {
    pub id: String,
    pub description: String,
}

/// Archetype tag, starting stats, and passive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PilotClass {
    pub archetype: PilotArchetype,
    pub stats: StatLedger,
    pub passive: ClassPassive,
}

impl PilotClass {
    pub fn for_archetype(archetype: PilotArchetype) -> Self {
        let (stats, id, description) = match archetype {
            PilotArchetype::Bulwark => (
                [250.0, 10.0, 50.0, 2.0, 1.0, 1.0, 1.0, 1.0, 5.0, 1.0],
                "TANK MODE",
                "I AM TANKKKKK!!!!",
            ),
            PilotArchetype::Ace => (
                [160.0, 2.0, 30.0, 4.0, 4.0, 12.0, 8.0, 2.0, 1.0, 2.0],
                "AFTERBURNER",
                "Outpaces anything on the floor.",
            ),
            PilotArchetype::Technocrat => (
                [180.0, 4.0, 80.0, 3.0, 2.0, 4.0, 30.0, 4.0, 2.0, 5.0],
                "OVERCLOCK",
                "Runs hardware nobody else can power.",
            ),
        };

        Self {
            archetype,
            stats: kit(stats),
            passive: ClassPassive {
                id: id.to_string(),
                description: description.to_string(),
            },
        }
    }

    /// Stats of a pilot who picked no archetype.
    pub fn default_player_stats() -> StatLedger {
        kit([200.0, 1.0, 1.0, 1.0, 3.0, 1.0, 10.0, 1.0, 0.0, 1.0])
    }
}

/// Builds a ledger from values in [`KIT_ORDER`].
fn kit(values: [f64; 10]) -> StatLedger {
    KIT_ORDER.into_iter().zip(values).collect()
}

const KIT_ORDER: [StatKind; 10] = [
    StatKind::Health,
    StatKind::Armor,
    StatKind::EnergyShield,
    StatKind::Attack,
    StatKind::AttackSpeed,
    StatKind::Mobility,
    StatKind::Energy,
    StatKind::EnergyRecovery,
    StatKind::Repair,
    StatKind::Technology,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn bulwark_kit() {
        let class = PilotClass::for_archetype(PilotArchetype::Bulwark);
        assert_eq!(class.stats.get(StatKind::Health), 250.0);
        assert_eq!(class.stats.get(StatKind::Repair), 5.0);
        assert_eq!(class.passive.id, "TANK MODE");
    }

    #[test]
    fn every_archetype_has_complete_kit() {
        for archetype in PilotArchetype::iter() {
            let class = PilotClass::for_archetype(archetype);
            assert_eq!(class.archetype, archetype);
            assert_eq!(class.stats.len(), KIT_ORDER.len());
            assert!(class.stats.get(StatKind::Health) > 0.0);
        }
    }

    #[test]
    fn default_player_kit() {
        let stats = PilotClass::default_player_stats();
        assert_eq!(stats.get(StatKind::Health), 200.0);
        assert_eq!(stats.get(StatKind::AttackSpeed), 3.0);
        assert_eq!(stats.get(StatKind::Repair), 0.0);
    }

    #[test]
    fn archetype_parses_canonical_strings() {
        assert_eq!(PilotArchetype::from_str("TECHNOCRAT"), Ok(PilotArchetype::Technocrat));
        assert_eq!(PilotArchetype::from_str("ace"), Ok(PilotArchetype::Ace));
        assert!(PilotArchetype::from_str("sniper").is_err());
        assert_eq!(PilotArchetype::Bulwark.to_string(), "BULWARK");
    }
}

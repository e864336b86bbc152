//! Item rarity tiers and their roll parameters.

/// Ordered rarity tiers: `Common < Uncommon < Rare < Legendary`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Roll parameters attached to a rarity tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityProfile {
    /// Half-width of the uniform variation band, as a fraction of the base.
    pub variation: f64,
    /// Flat multiplier applied to the base before variation (skipped for Common).
    pub multiplier: f64,
}

impl Rarity {
    /// Drop thresholds on a `[0, 100)` roll, checked from rarest down.
    const LEGENDARY_BELOW: f64 = 5.0;
    const RARE_BELOW: f64 = 15.0;
    const UNCOMMON_BELOW: f64 = 40.0;

    pub const fn profile(&self) -> RarityProfile {
        match self {
            Self::Common => RarityProfile {
                variation: 0.10,
                multiplier: 1.00,
            },
            Self::Uncommon => RarityProfile {
                variation: 0.25,
                multiplier: 1.25,
            },
            Self::Rare => RarityProfile {
                variation: 0.50,
                multiplier: 1.75,
            },
            Self::Legendary => RarityProfile {
                variation: 1.00,
                multiplier: 2.25,
            },
        }
    }

    /// Maps a uniform roll in `[0, 100)` to a rarity tier.
    pub fn from_roll(roll: f64) -> Self {
        if roll < Self::LEGENDARY_BELOW {
            Self::Legendary
        } else if roll < Self::RARE_BELOW {
            Self::Rare
        } else if roll < Self::UNCOMMON_BELOW {
            Self::Uncommon
        } else {
            Self::Common
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Legendary);
    }

    #[test]
    fn roll_thresholds() {
        assert_eq!(Rarity::from_roll(0.0), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(4.99), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(5.0), Rarity::Rare);
        assert_eq!(Rarity::from_roll(14.99), Rarity::Rare);
        assert_eq!(Rarity::from_roll(15.0), Rarity::Uncommon);
        assert_eq!(Rarity::from_roll(39.99), Rarity::Uncommon);
        assert_eq!(Rarity::from_roll(40.0), Rarity::Common);
        assert_eq!(Rarity::from_roll(99.99), Rarity::Common);
    }

    #[test]
    fn profiles_match_tiers() {
        assert_eq!(Rarity::Common.profile().variation, 0.10);
        assert_eq!(Rarity::Uncommon.profile().multiplier, 1.25);
        assert_eq!(Rarity::Rare.profile().multiplier, 1.75);
        let legendary = Rarity::Legendary.profile();
        assert_eq!((legendary.variation, legendary.multiplier), (1.00, 2.25));
    }
}

//! Concrete item instances rolled from a template.

use std::sync::Arc;

use rand::Rng;

use crate::error::ItemError;
use crate::stats::{StatKind, StatLedger};

use super::{EquipmentSlot, ItemTemplate, Rarity};

/// Armor on a single item is capped to this fraction.
pub const ITEM_ARMOR_CAP: f64 = 0.9;

/// An item instance: shared template plus the stats rolled for its rarity.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    template: Arc<ItemTemplate>,
    rarity: Rarity,
    stats: StatLedger,
}

impl Item {
    /// Rolls an instance using the calling thread's generator.
    pub fn new(template: Arc<ItemTemplate>, rarity: Rarity) -> Result<Self, ItemError> {
        Self::roll(template, rarity, &mut rand::thread_rng())
    }

    /// Rolls an instance, drawing one variation per base stat from `rng`.
    pub fn roll<R: Rng + ?Sized>(
        template: Arc<ItemTemplate>,
        rarity: Rarity,
        rng: &mut R,
    ) -> Result<Self, ItemError> {
        template.validate()?;

        let variation = rarity.profile().variation;
        let stats = template
            .base_stats
            .iter()
            .map(|(kind, base)| {
                let draw = rng.gen_range(-variation..=variation);
                (kind, rolled_value(kind, base, rarity, draw))
            })
            .collect();

        Ok(Self {
            template,
            rarity,
            stats,
        })
    }

    pub fn id(&self) -> &str {
        &self.template.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn description(&self) -> &str {
        &self.template.description
    }

    pub fn slot(&self) -> EquipmentSlot {
        self.template.slot
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Rolled instance stats (not the template's base stats).
    pub fn stats(&self) -> &StatLedger {
        &self.stats
    }

    pub fn required_tech(&self) -> u32 {
        self.template.required_tech
    }

    pub fn template(&self) -> &Arc<ItemTemplate> {
        &self.template
    }
}

/// Final value of one stat given its base, the rarity, and a variation draw
/// already sampled from `[-variation, +variation]`.
pub fn rolled_value(kind: StatKind, base: f64, rarity: Rarity, draw: f64) -> f64 {
    let profile = rarity.profile();
    let modified_base = if rarity == Rarity::Common {
        base
    } else {
        base * profile.multiplier
    };

    let mut value = modified_base * (1.0 + draw);
    if base >= 0.0 && value < 0.0 {
        value = 0.0;
    }
    if kind == StatKind::Armor {
        value = value.clamp(0.0, ITEM_ARMOR_CAP);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn template(stats: StatLedger) -> Arc<ItemTemplate> {
        Arc::new(ItemTemplate::new("plate", "Plate", EquipmentSlot::Chest, stats))
    }

    #[test]
    fn legendary_roll_stays_in_band() {
        let base = template(StatLedger::from([
            (StatKind::Health, 10.0),
            (StatKind::Armor, 10.0),
        ]));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let item = Item::roll(base.clone(), Rarity::Legendary, &mut rng).unwrap();
            let health = item.stats().get(StatKind::Health);
            let armor = item.stats().get(StatKind::Armor);
            assert!((0.0..=45.0).contains(&health), "health {health}");
            assert!((0.0..=ITEM_ARMOR_CAP).contains(&armor), "armor {armor}");
        }
    }

    #[test]
    fn common_skips_multiplier() {
        assert_eq!(rolled_value(StatKind::Attack, 10.0, Rarity::Common, 0.1), 11.0);
        assert_eq!(rolled_value(StatKind::Attack, 10.0, Rarity::Rare, 0.0), 17.5);
    }

    #[test]
    fn non_negative_base_never_rolls_negative() {
        assert_eq!(rolled_value(StatKind::Attack, 4.0, Rarity::Legendary, -1.0), 0.0);
    }

    #[test]
    fn negative_base_may_stay_negative() {
        let value = rolled_value(StatKind::Mobility, -2.0, Rarity::Uncommon, 0.0);
        assert_eq!(value, -2.5);
    }

    #[test]
    fn armor_is_capped_regardless_of_sign() {
        assert_eq!(rolled_value(StatKind::Armor, -3.0, Rarity::Common, 0.0), 0.0);
        assert_eq!(rolled_value(StatKind::Armor, 0.5, Rarity::Legendary, 0.5), ITEM_ARMOR_CAP);
    }

    #[test]
    fn invalid_template_is_rejected() {
        let bad = Arc::new(ItemTemplate::new("", "Nameless", EquipmentSlot::Head, StatLedger::new()));
        let error = Item::roll(bad, Rarity::Common, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(error, ItemError::InvalidTemplate { .. }));
    }

    #[test]
    fn instance_keeps_template_identity() {
        let base = template(StatLedger::from([(StatKind::Health, 30.0)]));
        let item = Item::roll(base.clone(), Rarity::Uncommon, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(item.id(), "plate");
        assert_eq!(item.slot(), EquipmentSlot::Chest);
        assert_eq!(item.rarity(), Rarity::Uncommon);
        assert!(Arc::ptr_eq(item.template(), &base));
    }
}

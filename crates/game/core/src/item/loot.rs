//! Loot rolls.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ItemError;

use super::{Item, ItemTemplate, Rarity};

/// Rolls a rarity tier on a uniform `[0, 100)` draw.
pub fn roll_rarity<R: Rng + ?Sized>(rng: &mut R) -> Rarity {
    Rarity::from_roll(rng.gen_range(0.0..100.0))
}

/// Rolls a rarity, then picks a template uniformly and instantiates it.
///
/// An empty catalog yields `Ok(None)` (no drop).
pub fn generate_random_item<R: Rng + ?Sized>(
    templates: &[Arc<ItemTemplate>],
    rng: &mut R,
) -> Result<Option<Item>, ItemError> {
    let rarity = roll_rarity(rng);
    let Some(template) = templates.choose(rng) else {
        return Ok(None);
    };
    Item::roll(Arc::clone(template), rarity, rng).map(Some)
}

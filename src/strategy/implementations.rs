// src/strategy/implementations.rs

use crate::model::item::ItemId;
use crate::strategy::traits::{RentalIntent, SelectionPolicy};
use rand::{Rng, RngCore};
use std::ops::RangeInclusive;

/// Shared shape of the ranged policies: draw a count, bail if the shelf is too
/// short, then draw the nights. The items are always the front of the shelf.
fn front_of_shelf(
    inventory: &[ItemId],
    count: RangeInclusive<usize>,
    nights: RangeInclusive<u32>,
    rng: &mut dyn RngCore,
) -> Option<RentalIntent> {
    let count = rng.gen_range(count);
    if inventory.len() < count {
        return None;
    }
    let nights = rng.gen_range(nights);

    Some(RentalIntent {
        items: inventory[..count].to_vec(),
        nights,
    })
}

// =========================================================================
// 1. Breezy
// =========================================================================

/// Drops in for one or two titles, keeps them a night or two.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreezyPolicy;

impl BreezyPolicy {
    pub const ITEMS: RangeInclusive<usize> = 1..=2;
    pub const NIGHTS: RangeInclusive<u32> = 1..=2;
}

impl SelectionPolicy for BreezyPolicy {
    fn propose(
        &self,
        inventory: &[ItemId],
        _day: u32,
        rng: &mut dyn RngCore,
    ) -> Option<RentalIntent> {
        front_of_shelf(inventory, Self::ITEMS, Self::NIGHTS, rng)
    }
}

// =========================================================================
// 2. Hoarder
// =========================================================================

/// Always three titles for a week. Rents nothing if fewer than three are left.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoarderPolicy;

impl HoarderPolicy {
    pub const ITEMS: usize = 3;
    pub const NIGHTS: u32 = 7;
}

impl SelectionPolicy for HoarderPolicy {
    fn propose(
        &self,
        inventory: &[ItemId],
        _day: u32,
        _rng: &mut dyn RngCore,
    ) -> Option<RentalIntent> {
        if inventory.len() < Self::ITEMS {
            return None;
        }

        Some(RentalIntent {
            items: inventory[..Self::ITEMS].to_vec(),
            nights: Self::NIGHTS,
        })
    }
}

// =========================================================================
// 3. Regular
// =========================================================================

/// Up to three titles for three to five nights.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPolicy;

impl RegularPolicy {
    pub const ITEMS: RangeInclusive<usize> = 1..=3;
    pub const NIGHTS: RangeInclusive<u32> = 3..=5;
}

impl SelectionPolicy for RegularPolicy {
    fn propose(
        &self,
        inventory: &[ItemId],
        _day: u32,
        rng: &mut dyn RngCore,
    ) -> Option<RentalIntent> {
        front_of_shelf(inventory, Self::ITEMS, Self::NIGHTS, rng)
    }
}

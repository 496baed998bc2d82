// src/strategy/traits.rs

use crate::model::item::ItemId;
use rand::RngCore;
use std::fmt::Debug;

/// What a customer wants to take home, before the store books it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalIntent {
    pub items: Vec<ItemId>,
    pub nights: u32,
}

/// Defines how a customer archetype picks a rental.
///
/// We require `Debug` so a customer can be printed with its policy.
pub trait SelectionPolicy: Debug + Send + Sync {
    /// Proposes a rental from the current shelf, or `None` if this customer
    /// rents nothing today.
    ///
    /// # Arguments
    /// * `inventory` - Items on the shelf, in shelf order. Must not be changed;
    ///   the store removes the items once it accepts the proposal.
    /// * `day` - The simulated day the proposal is made on.
    /// * `rng` - The store's generator; every random draw goes through it.
    fn propose(&self, inventory: &[ItemId], day: u32, rng: &mut dyn RngCore)
        -> Option<RentalIntent>;
}

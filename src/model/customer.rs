// src/model/customer.rs

use crate::model::item::ItemId;
use crate::model::rental::RentalId;
use crate::strategy::implementations::{BreezyPolicy, HoarderPolicy, RegularPolicy};
use crate::strategy::traits::{RentalIntent, SelectionPolicy};
use rand::RngCore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Breezy,
    Hoarder,
    Regular,
}

impl Archetype {
    pub fn policy(&self) -> Box<dyn SelectionPolicy> {
        match self {
            Archetype::Breezy => Box::new(BreezyPolicy),
            Archetype::Hoarder => Box::new(HoarderPolicy),
            Archetype::Regular => Box::new(RegularPolicy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerId(pub usize);

/// A member of the store's customer pool.
#[derive(Debug)]
pub struct Customer {
    // Identity
    pub id: CustomerId,
    pub name: String,
    pub archetype: Archetype,

    // Every rental this customer has booked, oldest first
    pub rentals: Vec<RentalId>,

    // Decided once from the archetype
    policy: Box<dyn SelectionPolicy>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            id,
            name: name.into(),
            archetype,
            rentals: Vec::new(),
            policy: archetype.policy(),
        }
    }

    /// Asks this customer's policy what they would rent from `inventory` today.
    pub fn propose(
        &self,
        inventory: &[ItemId],
        day: u32,
        rng: &mut dyn RngCore,
    ) -> Option<RentalIntent> {
        self.policy.propose(inventory, day, rng)
    }

    pub fn record_rental(&mut self, rental: RentalId) {
        self.rentals.push(rental);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hoarder_customer_uses_hoarder_policy() {
        let customer = Customer::new(CustomerId(0), "Bob", Archetype::Hoarder);
        let shelf: Vec<ItemId> = (0..5).map(ItemId).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let intent = customer.propose(&shelf, 1, &mut rng).unwrap();

        assert_eq!(intent.items, vec![ItemId(0), ItemId(1), ItemId(2)]);
        assert_eq!(intent.nights, 7);
    }

    #[test]
    fn test_record_rental_keeps_history_order() {
        let mut customer = Customer::new(CustomerId(3), "Alice", Archetype::Breezy);
        customer.record_rental(RentalId(4));
        customer.record_rental(RentalId(9));

        assert_eq!(customer.rentals, vec![RentalId(4), RentalId(9)]);
    }
}

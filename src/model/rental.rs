// src/model/rental.rs

use crate::model::customer::CustomerId;
use crate::model::item::{Catalog, ItemId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RentalId(pub usize);

/// A booked rental transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    pub id: RentalId,
    pub customer: CustomerId,
    pub items: Vec<ItemId>,
    pub nights: u32,
    pub start_day: u32,
    pub total_price: f64,
}

impl Rental {
    /// Prices the rental as the sum of each item's nightly price times `nights`.
    pub fn new(
        id: RentalId,
        customer: CustomerId,
        items: Vec<ItemId>,
        nights: u32,
        start_day: u32,
        catalog: &Catalog,
    ) -> Self {
        let total_price = items
            .iter()
            .map(|&item| catalog.get(item).price_per_night * nights as f64)
            .sum();

        Self {
            id,
            customer,
            items,
            nights,
            start_day,
            total_price,
        }
    }

    pub fn return_day(&self) -> u32 {
        self.start_day + self.nights
    }

    pub fn is_due(&self, day: u32) -> bool {
        day >= self.return_day()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    Active,
    Returned { day: u32 },
}

/// A rental as kept in the store's permanent log.
#[derive(Debug, Clone)]
pub struct RentalRecord {
    pub rental: Rental,
    pub status: RentalStatus,
}

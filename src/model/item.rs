// src/model/item.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    NewRelease,
    Drama,
    Comedy,
    Romance,
    Horror,
}

impl Category {
    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::NewRelease => "New Release",
            Category::Drama => "Drama",
            Category::Comedy => "Comedy",
            Category::Romance => "Romance",
            Category::Horror => "Horror",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable handle into the [`Catalog`] arena.
///
/// Inventory and rentals hold handles, never items, so an item is "somewhere"
/// exactly when its handle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub price_per_night: f64,
}

/// One category's share of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStock {
    pub category: Category,
    pub count: usize,
    pub price: f64,
}

/// The fixed set of rentable items for a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds the catalog round-robin: copy `i` of every category is created
    /// before copy `i + 1` of any category.
    pub fn build(stock: &[CategoryStock]) -> Self {
        let rounds = stock.iter().map(|s| s.count).max().unwrap_or(0);
        let mut items = Vec::with_capacity(stock.iter().map(|s| s.count).sum());

        for i in 0..rounds {
            for entry in stock.iter().filter(|s| s.count > i) {
                items.push(Item {
                    name: format!("{:?}_{}", entry.category, i),
                    category: entry.category,
                    price_per_night: entry.price,
                });
            }
        }

        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Panics if `id` did not come from this catalog.
    pub fn get(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }
}

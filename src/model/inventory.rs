// src/model/inventory.rs

use crate::model::item::ItemId;

/// Items currently on the shelf, in shelf order.
///
/// Policies pick from the front, returns go to the back.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    shelf: Vec<ItemId>,
}

impl Inventory {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            shelf: items.into_iter().collect(),
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.shelf
    }

    pub fn len(&self) -> usize {
        self.shelf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelf.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.shelf.contains(&id)
    }

    /// Removes each of `ids` from the shelf by identity.
    ///
    /// Returns the number of handles actually removed; a handle that is not on
    /// the shelf is skipped.
    pub fn take(&mut self, ids: &[ItemId]) -> usize {
        let mut removed = 0;
        for id in ids {
            if let Some(pos) = self.shelf.iter().position(|held| held == id) {
                self.shelf.remove(pos);
                removed += 1;
            }
        }
        removed
    }

    /// Puts returned items at the back of the shelf, keeping their order.
    pub fn restore(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.shelf.extend(ids);
    }
}

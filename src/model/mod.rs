pub mod customer;
pub mod inventory;
pub mod item;
pub mod rental;

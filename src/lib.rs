//! Day-stepped simulation of a video rental store.
//!
//! - `model/` - catalog items, inventory, customers and rentals
//! - `strategy/` - per-archetype rental selection policies
//! - `simulation/` - configuration and the store engine
//! - `io/` - reports and CSV export

pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

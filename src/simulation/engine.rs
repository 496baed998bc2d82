// src/simulation/engine.rs

use crate::io::reporting::StoreReport;
use crate::model::customer::{Customer, CustomerId};
use crate::model::inventory::Inventory;
use crate::model::item::{Catalog, ItemId};
use crate::model::rental::{Rental, RentalId, RentalRecord, RentalStatus};
use crate::simulation::config::SimulationConfig;
use crate::simulation::error::ConfigError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

/// One row per simulated day, written to CSV by the reporting module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub arrivals: usize,
    pub rentals_booked: usize,
    pub items_returned: usize,
    pub items_rented: usize,
    pub inventory_size: usize,
    pub active_rentals: usize,
    pub day_revenue: f64,
    pub cumulative_revenue: f64,
}

/// The video store: owns the catalog, the shelf, the customer pool and the
/// ledger of active rentals, and advances them one day at a time.
pub struct Store {
    config: SimulationConfig,
    seed: u64,
    rng: StdRng,

    catalog: Catalog,
    inventory: Inventory,
    customers: Vec<Customer>,
    // Reshuffled in place every day; arrivals are a prefix of it
    arrival_order: Vec<CustomerId>,

    // Active rentals, in booking order
    ledger: Vec<Rental>,
    rental_log: Vec<RentalRecord>,

    total_revenue: f64,
    current_day: u32,
    pub history: Vec<DayRecord>,
}

impl Store {
    /// Validates `config` and stocks the store: every catalog item starts on
    /// the shelf, nobody has rented anything yet.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let catalog = Catalog::build(&config.catalog);
        let inventory = Inventory::new(catalog.ids());
        let customers: Vec<Customer> = config
            .customers
            .iter()
            .enumerate()
            .map(|(i, c)| Customer::new(CustomerId(i), c.name.clone(), c.archetype))
            .collect();
        let arrival_order = customers.iter().map(|c| c.id).collect();

        if config.max_arrivals_per_day > customers.len() {
            warn!(
                max_arrivals = config.max_arrivals_per_day,
                pool = customers.len(),
                "arrival cap exceeds customer pool, arrivals will be capped"
            );
        }

        info!(
            seed,
            items = catalog.len(),
            customers = customers.len(),
            "store_initialized"
        );

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            config,
            catalog,
            inventory,
            customers,
            arrival_order,
            ledger: Vec::new(),
            rental_log: Vec::new(),
            total_revenue: 0.0,
            current_day: 0,
            history: Vec::new(),
        })
    }

    /// Runs the number of days set in the configuration.
    pub fn run_configured(&mut self) {
        self.run(self.config.days);
    }

    pub fn run(&mut self, days: u32) {
        for _ in 0..days {
            self.step();
        }
        info!(
            day = self.current_day,
            revenue = self.total_revenue,
            on_shelf = self.inventory.len(),
            outstanding = self.ledger.len(),
            "run_complete"
        );
    }

    /// Simulates the next day: returns first, then arrivals.
    pub fn step(&mut self) {
        self.current_day += 1;
        let day = self.current_day;

        let items_returned = self.process_returns(day);

        let wanted = self.rng.gen_range(1..=self.config.max_arrivals_per_day);
        let arrivals = wanted.min(self.arrival_order.len());
        self.arrival_order.shuffle(&mut self.rng);

        let revenue_before = self.total_revenue;
        let mut rentals_booked = 0;
        let mut items_rented = 0;

        for slot in 0..arrivals {
            if self.inventory.is_empty() {
                break;
            }
            let customer = self.arrival_order[slot];
            if let Some(count) = self.serve(customer, day) {
                rentals_booked += 1;
                items_rented += count;
            }
        }

        if day % 5 == 0 {
            info!(
                day,
                on_shelf = self.inventory.len(),
                outstanding = self.ledger.len(),
                revenue = self.total_revenue,
                "progress"
            );
        }

        self.history.push(DayRecord {
            day,
            arrivals,
            rentals_booked,
            items_returned,
            items_rented,
            inventory_size: self.inventory.len(),
            active_rentals: self.ledger.len(),
            day_revenue: self.total_revenue - revenue_before,
            cumulative_revenue: self.total_revenue,
        });
    }

    /// Moves every due rental off the ledger and its items back on the shelf.
    fn process_returns(&mut self, day: u32) -> usize {
        let (due, still_out): (Vec<Rental>, Vec<Rental>) = std::mem::take(&mut self.ledger)
            .into_iter()
            .partition(|rental| rental.is_due(day));
        self.ledger = still_out;

        let mut returned = 0;
        for rental in due {
            debug!(day, rental = rental.id.0, items = rental.items.len(), "returned");
            returned += rental.items.len();
            self.rental_log[rental.id.0].status = RentalStatus::Returned { day };
            self.inventory.restore(rental.items);
        }
        returned
    }

    /// Lets one customer try to rent. Returns the number of items taken.
    fn serve(&mut self, customer: CustomerId, day: u32) -> Option<usize> {
        let intent =
            self.customers[customer.0].propose(self.inventory.items(), day, &mut self.rng)?;

        let taken = self.inventory.take(&intent.items);
        debug_assert_eq!(taken, intent.items.len(), "proposal named items off the shelf");

        let id = RentalId(self.rental_log.len());
        let rental = Rental::new(id, customer, intent.items, intent.nights, day, &self.catalog);

        debug!(
            day,
            customer = %self.customers[customer.0].name,
            items = rental.items.len(),
            nights = rental.nights,
            price = rental.total_price,
            "rented"
        );

        self.total_revenue += rental.total_price;
        self.customers[customer.0].record_rental(id);
        self.rental_log.push(RentalRecord {
            rental: rental.clone(),
            status: RentalStatus::Active,
        });
        let count = rental.items.len();
        self.ledger.push(rental);
        Some(count)
    }

    pub fn report(&self) -> StoreReport {
        StoreReport::from_store(self)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn active_rentals(&self) -> &[Rental] {
        &self.ledger
    }

    pub fn rental_log(&self) -> &[RentalRecord] {
        &self.rental_log
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    /// Every item handle currently held by the shelf or an active rental.
    pub fn accounted_items(&self) -> Vec<ItemId> {
        let mut held: Vec<ItemId> = self.inventory.items().to_vec();
        for rental in &self.ledger {
            held.extend_from_slice(&rental.items);
        }
        held
    }
}

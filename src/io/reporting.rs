// src/io/reporting.rs

use crate::model::item::Category;
use crate::model::rental::RentalStatus;
use crate::simulation::engine::{DayRecord, Store};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ShelfLine {
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerLine {
    pub name: String,
    pub rentals: usize,
}

/// Snapshot of the store at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreReport {
    pub day: u32,
    pub remaining: Vec<ShelfLine>,
    pub total_revenue: f64,
    pub outstanding_rentals: usize,
    pub customers: Vec<CustomerLine>,
}

impl StoreReport {
    pub fn from_store(store: &Store) -> Self {
        let catalog = store.catalog();
        let remaining = store
            .inventory()
            .items()
            .iter()
            .map(|&id| {
                let item = catalog.get(id);
                ShelfLine {
                    name: item.name.clone(),
                    category: item.category,
                }
            })
            .collect();
        let customers = store
            .customers()
            .iter()
            .map(|c| CustomerLine {
                name: c.name.clone(),
                rentals: c.rentals.len(),
            })
            .collect();

        Self {
            day: store.current_day(),
            remaining,
            total_revenue: store.total_revenue(),
            outstanding_rentals: store.active_rentals().len(),
            customers,
        }
    }
}

impl fmt::Display for StoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Final Report (day {}) =====", self.day)?;
        writeln!(f, "Videos remaining in store: {}", self.remaining.len())?;
        for line in &self.remaining {
            writeln!(f, " - {} ({})", line.name, line.category)?;
        }
        writeln!(f, "Rentals still out: {}", self.outstanding_rentals)?;
        writeln!(f, "Rentals per customer:")?;
        for line in &self.customers {
            writeln!(f, " - {}: {}", line.name, line.rentals)?;
        }
        write!(f, "Total revenue: ${:.2}", self.total_revenue)
    }
}

#[derive(Debug, Serialize)]
struct RentalRow {
    rental: usize,
    customer: String,
    items: String,
    nights: u32,
    start_day: u32,
    return_day: u32,
    price: f64,
    returned_on: Option<u32>,
}

/// Writes the per-day history to a CSV file.
pub fn write_history(file_path: &str, data: &[DayRecord]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    tracing::info!(rows = data.len(), path = file_path, "history_exported");
    Ok(())
}

/// Writes every rental the store booked, returned or not, to a CSV file.
///
/// Item names within a rental are joined with `;`.
pub fn write_rental_log(file_path: &str, store: &Store) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;
    let catalog = store.catalog();

    for record in store.rental_log() {
        let rental = &record.rental;
        let items: Vec<&str> = rental
            .items
            .iter()
            .map(|&id| catalog.get(id).name.as_str())
            .collect();

        wtr.serialize(RentalRow {
            rental: rental.id.0,
            customer: store.customers()[rental.customer.0].name.clone(),
            items: items.join(";"),
            nights: rental.nights,
            start_day: rental.start_day,
            return_day: rental.return_day(),
            price: rental.total_price,
            returned_on: match record.status {
                RentalStatus::Active => None,
                RentalStatus::Returned { day } => Some(day),
            },
        })?;
    }
    wtr.flush()?;

    tracing::info!(
        rows = store.rental_log().len(),
        path = file_path,
        "rental_log_exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::SimulationConfig;

    #[test]
    fn test_report_is_idempotent() {
        let mut store = Store::new(SimulationConfig::default().with_seed(8)).unwrap();
        store.run(35);

        let first = store.report();
        let second = store.report();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_fresh_store_report_lists_full_catalog() {
        let store = Store::new(SimulationConfig::default().with_seed(8)).unwrap();
        let report = store.report();

        assert_eq!(report.remaining.len(), 20);
        assert_eq!(report.remaining[0].name, "NewRelease_0");
        assert_eq!(report.total_revenue, 0.0);

        let text = report.to_string();
        assert!(text.contains("Videos remaining in store: 20"));
        assert!(text.contains(" - Horror_3 (Horror)"));
        assert!(text.contains(" - NewRelease_0 (New Release)"));
        assert!(text.ends_with("Total revenue: $0.00"));
    }

    #[test]
    fn test_report_counts_customer_rentals() {
        let mut store = Store::new(SimulationConfig::default().with_seed(2)).unwrap();
        store.run(10);
        let report = store.report();

        let counted: usize = report.customers.iter().map(|c| c.rentals).sum();
        assert_eq!(counted, store.rental_log().len());
        assert_eq!(report.customers[0].name, "Alice");
    }
}

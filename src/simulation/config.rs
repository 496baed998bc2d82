// src/simulation/config.rs

use crate::model::customer::Archetype;
use crate::model::item::{Category, CategoryStock};
use crate::simulation::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerConfig {
    pub name: String,
    pub archetype: Archetype,
}

impl CustomerConfig {
    pub fn new(name: &str, archetype: Archetype) -> Self {
        Self {
            name: name.to_string(),
            archetype,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub days: u32,
    pub max_arrivals_per_day: usize,
    /// Fixed seed for reproducible runs. Drawn from entropy when absent.
    pub seed: Option<u64>,
    pub catalog: Vec<CategoryStock>,
    pub customers: Vec<CustomerConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let stock = |category, price| CategoryStock {
            category,
            count: 4,
            price,
        };

        Self {
            days: 35,
            max_arrivals_per_day: 5,
            seed: None,
            catalog: vec![
                stock(Category::NewRelease, 5.0),
                stock(Category::Drama, 3.0),
                stock(Category::Comedy, 2.0),
                stock(Category::Romance, 3.0),
                stock(Category::Horror, 4.0),
            ],
            customers: vec![
                CustomerConfig::new("Alice", Archetype::Breezy),
                CustomerConfig::new("Bob", Archetype::Hoarder),
                CustomerConfig::new("Carol", Archetype::Regular),
                CustomerConfig::new("Dave", Archetype::Breezy),
                CustomerConfig::new("Eve", Archetype::Regular),
                CustomerConfig::new("Frank", Archetype::Hoarder),
                CustomerConfig::new("Grace", Archetype::Regular),
                CustomerConfig::new("Heidi", Archetype::Breezy),
                CustomerConfig::new("Ivan", Archetype::Hoarder),
                CustomerConfig::new("Judy", Archetype::Regular),
            ],
        }
    }
}

impl SimulationConfig {
    /// Loads a config from a TOML file. Fields left out of the file keep their
    /// default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn total_items(&self) -> usize {
        self.catalog.iter().map(|s| s.count).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.catalog {
            if !seen.insert(entry.category) {
                return Err(ConfigError::DuplicateCategory(entry.category));
            }
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(ConfigError::InvalidPrice {
                    category: entry.category,
                    price: entry.price,
                });
            }
        }

        if self.total_items() == 0 {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.customers.is_empty() {
            return Err(ConfigError::EmptyCustomerPool);
        }
        if self.max_arrivals_per_day == 0 {
            return Err(ConfigError::NoArrivals);
        }

        Ok(())
    }
}

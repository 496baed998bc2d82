// src/simulation/error.rs

use crate::model::item::Category;
use thiserror::Error;

/// Problems found while loading or validating a [`SimulationConfig`].
///
/// [`SimulationConfig`]: crate::simulation::config::SimulationConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("catalog has no items")]
    EmptyCatalog,

    #[error("customer pool is empty")]
    EmptyCustomerPool,

    #[error("max arrivals per day must be at least 1")]
    NoArrivals,

    #[error("price for {category:?} must be a non-negative number, got {price}")]
    InvalidPrice { category: Category, price: f64 },

    #[error("category {0:?} is listed more than once")]
    DuplicateCategory(Category),

    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

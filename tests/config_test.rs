//! Integration tests for configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use video_rental_sim::model::customer::Archetype;
use video_rental_sim::model::item::Category;
use video_rental_sim::simulation::config::SimulationConfig;
use video_rental_sim::simulation::engine::Store;
use video_rental_sim::simulation::error::ConfigError;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_config_from_file() {
    let temp_file = write_config(
        r#"
days = 12
max_arrivals_per_day = 2
seed = 99

[[catalog]]
category = "Comedy"
count = 3
price = 2.5

[[catalog]]
category = "Horror"
count = 1
price = 4.0

[[customers]]
name = "Zed"
archetype = "Hoarder"

[[customers]]
name = "Yara"
archetype = "Breezy"
"#,
    );

    let config = SimulationConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.days, 12);
    assert_eq!(config.max_arrivals_per_day, 2);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.total_items(), 4);
    assert_eq!(config.catalog[0].category, Category::Comedy);
    assert_eq!(config.customers[0].archetype, Archetype::Hoarder);

    let store = Store::new(config).unwrap();
    assert_eq!(store.catalog().len(), 4);
    assert_eq!(store.seed(), 99);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let temp_file = write_config("days = 3\n");

    let config = SimulationConfig::from_file(temp_file.path()).unwrap();
    let defaults = SimulationConfig::default();

    assert_eq!(config.days, 3);
    assert_eq!(config.catalog, defaults.catalog);
    assert_eq!(config.customers, defaults.customers);
    assert_eq!(config.seed, None);
}

#[test]
fn test_negative_days_fail_to_parse() {
    let temp_file = write_config("days = -4\n");

    assert!(matches!(
        SimulationConfig::from_file(temp_file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        SimulationConfig::from_file("/nonexistent/store.toml"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_empty_customer_list_rejected_at_store_creation() {
    let temp_file = write_config("customers = []\n");
    let config = SimulationConfig::from_file(temp_file.path()).unwrap();

    assert!(matches!(
        Store::new(config),
        Err(ConfigError::EmptyCustomerPool)
    ));
}

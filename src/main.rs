use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use video_rental_sim::io::reporting;
use video_rental_sim::simulation::config::SimulationConfig;
use video_rental_sim::simulation::engine::Store;

/// Video rental store simulation
#[derive(Parser, Debug)]
#[command(name = "video-rental-sim", version, about)]
struct Args {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of days to simulate
    #[arg(short, long)]
    days: Option<u32>,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Upper bound on customers arriving per day
    #[arg(long)]
    max_arrivals: Option<usize>,

    /// Write the per-day history to this CSV file
    #[arg(long)]
    history_csv: Option<String>,

    /// Write the rental log to this CSV file
    #[arg(long)]
    rentals_csv: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows every rental and return
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    // 1. SETUP CONFIGURATION
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => SimulationConfig::default(),
    };
    if let Some(days) = args.days {
        config.days = days;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max) = args.max_arrivals {
        config.max_arrivals_per_day = max;
    }

    // 2. STOCK THE STORE
    let mut store = Store::new(config).context("invalid simulation configuration")?;
    info!(
        days = store.config().days,
        seed = store.seed(),
        "simulation_starting"
    );

    // 3. RUN
    store.run_configured();

    // 4. EXPORT
    if let Some(path) = &args.history_csv {
        reporting::write_history(path, &store.history)
            .map_err(|e| anyhow::anyhow!("writing history to {path}: {e}"))?;
    }
    if let Some(path) = &args.rentals_csv {
        reporting::write_rental_log(path, &store)
            .map_err(|e| anyhow::anyhow!("writing rental log to {path}: {e}"))?;
    }

    // 5. REPORT
    println!("\n{}", store.report());
    Ok(())
}

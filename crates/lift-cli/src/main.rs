//! lift-cli — run one elevator demand simulation and persist the labeled
//! training records.
//!
//! By default records go to CSV files under `./output`; pass `--api-url`
//! to submit them to the training-data service instead.  Set `RUST_LOG=debug`
//! to watch the per-event trace.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use lift_core::SimulationConfig;
use lift_sim::Simulation;
use lift_store::{CsvStore, HttpStore, HttpStoreConfig};

#[derive(Parser)]
#[command(name = "lift-cli")]
#[command(about = "Elevator demand simulator producing labeled training records")]
struct Cli {
    /// Lowest served floor
    #[arg(long, default_value_t = 1)]
    floor_min: i32,

    /// Highest served floor (inclusive)
    #[arg(long, default_value_t = 5)]
    floor_max: i32,

    /// Elevator speed in floors per second
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Mean arrivals per second (λ of the Poisson process)
    #[arg(long = "lambda", default_value_t = 0.1)]
    arrival_rate: f64,

    /// Floor the vacant elevator parks at
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    base_floor: i32,

    /// Disable the park-at-base resting policy
    #[arg(long)]
    no_base_floor: bool,

    /// How many times more likely the base floor is to be requested
    #[arg(long, default_value_t = 5.0)]
    base_floor_weight: f64,

    /// Hold after each arrival, in seconds
    #[arg(long, default_value_t = 1.0)]
    wait_time: f64,

    /// Idle re-check period, in seconds
    #[arg(long, default_value_t = 0.5)]
    check_interval: f64,

    /// RNG seed; the same seed reproduces the run exactly
    #[arg(long, default_value_t = 31)]
    seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 100.0)]
    duration: f64,

    /// Unix timestamp of simulation start; defaults to now
    #[arg(long)]
    start_unix_secs: Option<i64>,

    /// Base URL of the training-data service; when omitted, records are
    /// written to CSV files instead
    #[arg(long)]
    api_url: Option<String>,

    /// Output directory for the CSV backend
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start_unix_secs = match cli.start_unix_secs {
        Some(secs) => secs,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
    };

    let config = SimulationConfig {
        floor_min:         cli.floor_min,
        floor_max:         cli.floor_max,
        speed:             cli.speed,
        arrival_rate:      cli.arrival_rate,
        base_floor:        (!cli.no_base_floor).then_some(cli.base_floor),
        base_floor_weight: cli.base_floor_weight,
        wait_time:         cli.wait_time,
        check_interval:    cli.check_interval,
        seed:              cli.seed,
        start_unix_secs,
        duration:          cli.duration,
    };

    let mut sim = Simulation::new(config)?;
    println!(
        "rust_lift: floors {}..={}  |  λ = {}/s  |  seed {}  |  {} s horizon",
        cli.floor_min, cli.floor_max, cli.arrival_rate, cli.seed, cli.duration
    );

    let summary = match cli.api_url {
        Some(base_url) => {
            println!("submitting to {base_url}");
            let mut store = HttpStore::new(HttpStoreConfig {
                base_url,
                ..HttpStoreConfig::default()
            })?;
            sim.run(&mut store)?
        }
        None => {
            std::fs::create_dir_all(&cli.out_dir)?;
            println!("writing CSV to {}", cli.out_dir.display());
            let mut store = CsvStore::new(&cli.out_dir)?;
            sim.run(&mut store)?
        }
    };

    println!("{summary}");
    Ok(())
}

//! cafe — a small restaurant run through the customer behavior tree.
//!
//! Customers walk in, take a free seat or queue for one, order, eat, pay,
//! and leave.  A customer who runs out of patience in the line or while
//! waiting for food walks out without paying.
//!
//! ```text
//! cafe [config.json]
//! ```
//!
//! Without an argument the built-in defaults below are used.  Every field
//! of the JSON file is optional:
//!
//! ```json
//! {
//!   "sim":          { "total_ticks": 12000, "seed": 7, "max_line_length": 4 },
//!   "floor":        { "seats": [{ "x": -2.0, "y": 5.0 }, { "x": 0.0, "y": 5.0 }] },
//!   "spawn":        { "periodic": { "interval_secs": 5.0, "jitter_secs": 2.0, "limit": 60 } },
//!   "arrivals_csv": "arrivals.csv",
//!   "service_secs": 4.0,
//!   "output_dir":   "output/cafe"
//! }
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use cafe_core::SimConfig;
use cafe_output::{CsvWriter, SimOutputObserver};
use cafe_sim::{FixedServiceTime, SimBuilder};
use cafe_spatial::FloorPlan;
use cafe_spawn::{SpawnPolicy, load_arrivals_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEAT_COUNT:   usize = 4;
const SERVICE_SECS: f64   = 5.0;
const OUTPUT_DIR:   &str  = "output/cafe";

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:          SimConfig,
    floor:        FloorPlan,
    spawn:        SpawnPolicy,
    /// Replaces `spawn` with a scheduled plan when set.
    arrivals_csv: Option<PathBuf>,
    service_secs: f64,
    output_dir:   PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:          SimConfig::default(),
            floor:        FloorPlan::with_seats(SEAT_COUNT),
            spawn:        SpawnPolicy::default(),
            arrivals_csv: None,
            service_secs: SERVICE_SECS,
            output_dir:   PathBuf::from(OUTPUT_DIR),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut demo = load_config(config_path.as_deref())?;

    if let Some(csv) = &demo.arrivals_csv {
        let plan = load_arrivals_csv(csv)
            .with_context(|| format!("loading arrivals {}", csv.display()))?;
        info!(arrivals = plan.len(), "scheduled arrivals loaded");
        demo.spawn = SpawnPolicy::Scheduled(plan);
    }

    println!("=== cafe ===");
    println!(
        "Seats: {}  |  Line: {}  |  Ticks: {} × {} s  |  Seed: {}",
        demo.floor.seat_count(),
        demo.sim.max_line_length,
        demo.sim.total_ticks,
        demo.sim.delta_secs,
        demo.sim.seed,
    );
    println!();

    let mut sim = SimBuilder::new(demo.sim.clone(), FixedServiceTime::new(demo.service_secs))
        .floor_plan(demo.floor)
        .spawn_policy(demo.spawn)
        .build()?;

    let writer = CsvWriter::new(&demo.output_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    info!(elapsed_secs = elapsed.as_secs_f64(), "simulation finished");

    let s = sim.stats;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  spawned   : {}", s.spawned);
    println!("  served    : {}", s.served);
    println!("  paid      : {}", s.paid);
    println!("  abandoned : {}", s.abandoned);
    println!("  dropped   : {}", s.dropped);
    println!("  on floor  : {}", sim.active_customers());
    println!();
    println!("Output written to {}", demo.output_dir.display());
    Ok(())
}

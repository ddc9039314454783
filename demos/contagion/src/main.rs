//! contagion: command-line driver for the SIR proximity simulator.
//!
//! Reads a TOML run configuration (or uses the built-in reference scenario),
//! runs the simulation to completion, then writes the time series and the
//! position snapshots with the configured backend.
//!
//! ```text
//! contagion --config contagion.toml --seed 7 --steps 200 --output-dir out/
//! RUST_LOG=sir_sim=debug contagion
//! ```

mod config;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use sir_output::{open_writer, write_report, Backend};
use sir_sim::{NoopObserver, SimBuilder, SimReport};
use sir_spatial::ContactStrategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ContagionConfig;

/// Command line arguments.  Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "contagion")]
#[command(about = "Spatial SIR epidemic simulation with proximity-based transmission")]
struct Args {
    /// TOML configuration file; the reference scenario is used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory results are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of steps to simulate
    #[arg(long)]
    steps: Option<u64>,

    /// Contact detector: brute_force, grid or r_tree
    #[arg(long)]
    strategy: Option<ContactStrategy>,

    /// Output backend: csv, sqlite or parquet
    #[arg(long)]
    backend: Option<Backend>,

    /// Log filter (e.g. `info`, `sir_sim=debug`); overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let mut config = match &args.config {
        Some(path) => ContagionConfig::load(path)?,
        None => ContagionConfig::default(),
    };
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }
    if let Some(seed) = args.seed {
        config.parameters.seed = seed;
    }
    if let Some(steps) = args.steps {
        config.parameters.steps = steps;
    }
    if let Some(strategy) = args.strategy {
        config.contact_strategy = strategy;
    }
    let backend = match args.backend {
        Some(b) => b,
        None => config.output.backend.parse().map_err(anyhow::Error::msg)?,
    };

    let p = &config.parameters;
    println!("=== contagion: spatial SIR ===");
    println!(
        "Agents: {}  |  Domain: {} x {}  |  Steps: {}  |  Seed: {}",
        p.population, p.width, p.height, p.steps, p.seed
    );
    println!(
        "r = {}  |  p = {}  |  mean recovery = {}  |  detector: {}",
        p.infection_radius, p.infection_probability, p.mean_recovery_duration, config.contact_strategy
    );
    println!();

    // 1. Build and run.  No output happens until the loop is done.
    let mut sim = SimBuilder::new(config.parameters.clone())
        .strategy(config.contact_strategy)
        .snapshot_interval(config.output.snapshot_interval)
        .build()
        .context("invalid simulation parameters")?;

    let t0 = Instant::now();
    sim.run(&mut NoopObserver);
    let elapsed = t0.elapsed();
    let report = sim.into_report();

    // 2. Write results.
    let dir = &config.output.dir;
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let mut writer = open_writer(backend, dir)?;
    write_report(writer.as_mut(), &report)
        .with_context(|| format!("writing {backend} output to {}", dir.display()))?;
    info!(dir = %dir.display(), %backend, "output complete");

    // 3. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    print_summary(&report);

    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn print_summary(report: &SimReport) {
    let last = report.final_counts();
    println!("  final          : {last}");
    println!("  ever infected  : {}", report.ever_infected);
    if let Some((step, n)) = report.series.peak_infected() {
        println!("  peak infected  : {n} at step {}", step.0);
    }
    println!(
        "  extinguished   : {}",
        if report.is_extinguished() { "yes" } else { "no (still active at end of run)" }
    );
    println!();

    // Show at most ~20 rows of the series.
    let stride = (report.series.len() / 20).max(1);
    println!("{:>6} {:>10} {:>8} {:>8} {:>8}", "step", "time", "S", "I", "R");
    println!("{}", "-".repeat(44));
    for (k, r) in report.series.records().enumerate() {
        if k % stride == 0 || k + 1 == report.series.len() {
            println!(
                "{:>6} {:>10.2} {:>8} {:>8} {:>8}",
                r.step.0, r.time, r.counts.susceptible, r.counts.infected, r.counts.recovered
            );
        }
    }
}

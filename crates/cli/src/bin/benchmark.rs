//! Time repeated acceleration evaluations over a catalog padded with random bodies.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use solar_nbody::benchmark::{self, strategy_for};
use solar_nbody::config::{BenchmarkConfig, load_benchmark};
use solar_nbody::export::benchmark as export_benchmark;
use solar_nbody::gravity::ForceField;
use solar_nbody::{catalog, report};
use tracing::info;

#[path = "shared/support.rs"]
mod support;

use support::StrategyArg;

#[derive(Parser, Debug)]
#[command(author, version, about = "N-body acceleration kernel benchmark")]
struct Cli {
    /// Benchmark settings file (YAML or TOML); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Body catalog: YAML list, TOML file or directory of TOML files (defaults to the built-in solar system)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Untimed iterations run before measuring
    #[arg(long)]
    warmup: Option<usize>,

    /// Timed iterations
    #[arg(long)]
    timed: Option<usize>,

    /// Random bodies appended to the catalog
    #[arg(long)]
    random_bodies: Option<usize>,

    /// Seed for the random bodies
    #[arg(long)]
    seed: Option<u64>,

    /// Pair loop used by the force field
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Write a JSON report (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip printing the catalog accelerations before timing
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    support::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_benchmark(path)?,
        None => BenchmarkConfig::default(),
    };
    if let Some(warmup) = cli.warmup {
        config.warmup_iterations = warmup;
    }
    if let Some(timed) = cli.timed {
        config.timed_iterations = timed;
    }
    if let Some(count) = cli.random_bodies {
        config.random_bodies = count;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }
    config.validate()?;
    info!(?config, "benchmark configuration");

    let bodies = catalog::load(cli.catalog.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.quiet {
        let mut field = ForceField::with_strategy(bodies.clone(), strategy_for(config.strategy));
        let accelerations = field.compute_accelerations()?.to_vec();
        writeln!(out, "Result with {} catalog bodies:", field.len())?;
        report::write_table(&mut out, field.bodies(), &accelerations)?;
        writeln!(out)?;
    }

    let summary = benchmark::run(bodies, &config)?;
    writeln!(
        out,
        "{:e} s for {} bodies",
        summary.seconds_per_iteration, summary.bodies
    )?;
    writeln!(out, "{:.3} iters per second", summary.iterations_per_second)?;
    out.flush()?;
    drop(out);

    if let Some(path) = &cli.json {
        export_benchmark::write_report(path, &summary.report())?;
    }

    Ok(())
}

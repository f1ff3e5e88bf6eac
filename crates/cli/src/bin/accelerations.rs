//! Print the gravitational acceleration acting on every body of a catalog.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use solar_nbody::benchmark::strategy_for;
use solar_nbody::export::accelerations as export_accelerations;
use solar_nbody::gravity::ForceField;
use solar_nbody::{catalog, report};

#[path = "shared/support.rs"]
mod support;

use support::StrategyArg;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "All-pairs gravitational accelerations for a body catalog"
)]
struct Cli {
    /// Body catalog: YAML list, TOML file or directory of TOML files (defaults to the built-in solar system)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pair loop used by the force field
    #[arg(long, value_enum, default_value_t = StrategyArg::Direct)]
    strategy: StrategyArg,

    /// Only print the named body (case-insensitive)
    #[arg(long)]
    body: Option<String>,

    /// Also write the accelerations as CSV (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    support::init_tracing();
    let cli = Cli::parse();

    let bodies = catalog::load(cli.catalog.as_deref())?;
    if bodies.is_empty() {
        bail!("body catalog is empty");
    }

    let selected = match &cli.body {
        Some(name) => {
            let index = catalog::index_of(&bodies, name)
                .ok_or_else(|| anyhow!("Body '{}' not found in catalog", name))?;
            index..index + 1
        }
        None => 0..bodies.len(),
    };

    let mut field = ForceField::with_strategy(bodies, strategy_for(cli.strategy.into()));
    let accelerations = field.compute_accelerations()?.to_vec();
    let bodies = field.bodies();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_table(
        &mut out,
        &bodies[selected.clone()],
        &accelerations[selected.clone()],
    )?;
    writeln!(
        out,
        "\n{} bodies, {} pair evaluations ({})",
        bodies.len(),
        field.pair_evaluations(),
        field.strategy().label()
    )?;
    out.flush()?;

    if let Some(path) = &cli.csv {
        let records = report::records(&bodies[selected.clone()], &accelerations[selected]);
        export_accelerations::write_csv_to_path(path, &records)?;
    }

    Ok(())
}

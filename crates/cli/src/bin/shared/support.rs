//! Helpers shared by the workspace binaries.

use clap::ValueEnum;
use solar_nbody::config::StrategyConfig;
use tracing_subscriber::EnvFilter;

/// Pair loop selection on the command line.
#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum StrategyArg {
    /// Evaluate every ordered pair on its own
    Direct,
    /// Evaluate each unordered pair once (Newton's third law)
    Symmetric,
}

impl From<StrategyArg> for StrategyConfig {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Direct => StrategyConfig::Direct,
            StrategyArg::Symmetric => StrategyConfig::Symmetric,
        }
    }
}

/// Log to stderr, honouring `RUST_LOG` and defaulting to warnings only.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

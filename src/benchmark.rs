//! Throughput harness around the acceleration kernel.
//!
//! Mirrors the classic benchmark shape: take a catalog, append a batch of
//! random bodies, run a number of warmup calls, then time a fixed number of
//! calls and report the per-iteration cost.

use std::hint::black_box;
use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solar_config::{BenchmarkConfig, StrategyConfig};
use solar_core::vector::Vector3;
use solar_export::benchmark::Report;
use solar_gravity::{Body, ForceField, GravityError, PairwiseStrategy};
use thiserror::Error;
use tracing::info;

/// Name given to generated bodies.
pub const RANDOM_BODY_NAME: &str = "random_body";

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("benchmark needs at least one timed iteration")]
    NoIterations,
    #[error(transparent)]
    Gravity(#[from] GravityError),
}

/// Wall-clock stopwatch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Outcome of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkSummary {
    pub started_at: String,
    pub strategy: PairwiseStrategy,
    pub bodies: usize,
    pub warmup_iterations: usize,
    pub timed_iterations: usize,
    pub total_seconds: f64,
    pub seconds_per_iteration: f64,
    pub iterations_per_second: f64,
    pub pair_evaluations_per_iteration: usize,
}

impl BenchmarkSummary {
    /// Borrowing view used by the JSON exporter.
    pub fn report(&self) -> Report<'_> {
        Report {
            started_at: &self.started_at,
            strategy: self.strategy.label(),
            bodies: self.bodies,
            warmup_iterations: self.warmup_iterations,
            timed_iterations: self.timed_iterations,
            total_seconds: self.total_seconds,
            seconds_per_iteration: self.seconds_per_iteration,
            iterations_per_second: self.iterations_per_second,
            pair_evaluations_per_iteration: self.pair_evaluations_per_iteration,
        }
    }
}

pub fn strategy_for(config: StrategyConfig) -> PairwiseStrategy {
    match config {
        StrategyConfig::Direct => PairwiseStrategy::Direct,
        StrategyConfig::Symmetric => PairwiseStrategy::Symmetric,
    }
}

/// Bodies with every position, velocity component and `gm` drawn from `[0, 1)`.
pub fn random_bodies<R: Rng>(count: usize, rng: &mut R) -> Vec<Body> {
    (0..count)
        .map(|_| {
            let position = unit_cube_point(rng);
            let velocity = unit_cube_point(rng);
            let gm = rng.gen_range(0.0..1.0);
            Body::new(RANDOM_BODY_NAME, position, velocity, gm)
        })
        .collect()
}

fn unit_cube_point<R: Rng>(rng: &mut R) -> Vector3 {
    Vector3::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}

/// Append the configured random bodies to `bodies` and time the kernel.
pub fn run(
    mut bodies: Vec<Body>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkSummary, BenchmarkError> {
    if config.timed_iterations == 0 {
        return Err(BenchmarkError::NoIterations);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    bodies.extend(random_bodies(config.random_bodies, &mut rng));

    let strategy = strategy_for(config.strategy);
    let mut field = ForceField::with_strategy(bodies, strategy);

    info!(
        bodies = field.len(),
        strategy = strategy.label(),
        iterations = config.warmup_iterations,
        "warming up"
    );
    for _ in 0..config.warmup_iterations {
        black_box(field.compute_accelerations()?);
    }

    let started_at = Utc::now().to_rfc3339();
    let timer = Timer::start();
    for _ in 0..config.timed_iterations {
        black_box(field.compute_accelerations()?);
    }
    let total_seconds = timer.elapsed_seconds();

    let seconds_per_iteration = total_seconds / config.timed_iterations as f64;
    let iterations_per_second = if seconds_per_iteration > 0.0 {
        1.0 / seconds_per_iteration
    } else {
        f64::INFINITY
    };
    info!(total_seconds, seconds_per_iteration, "timed iterations finished");

    Ok(BenchmarkSummary {
        started_at,
        strategy,
        bodies: field.len(),
        warmup_iterations: config.warmup_iterations,
        timed_iterations: config.timed_iterations,
        total_seconds,
        seconds_per_iteration,
        iterations_per_second,
        pair_evaluations_per_iteration: field.pair_evaluations(),
    })
}

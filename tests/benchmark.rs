use std::thread::sleep;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use solar_nbody::benchmark::{self, BenchmarkError, RANDOM_BODY_NAME, Timer};
use solar_nbody::catalog;
use solar_nbody::config::{BenchmarkConfig, StrategyConfig};
use solar_nbody::gravity::PairwiseStrategy;

fn quick_config(strategy: StrategyConfig) -> BenchmarkConfig {
    BenchmarkConfig {
        warmup_iterations: 2,
        timed_iterations: 3,
        random_bodies: 5,
        seed: 7,
        strategy,
    }
}

#[test]
fn benchmark_pads_catalog_with_random_bodies() {
    let summary = benchmark::run(catalog::solar_system(), &quick_config(StrategyConfig::Direct))
        .expect("benchmark run");

    assert_eq!(summary.bodies, 13);
    assert_eq!(summary.strategy, PairwiseStrategy::Direct);
    assert_eq!(summary.warmup_iterations, 2);
    assert_eq!(summary.timed_iterations, 3);
    assert_eq!(summary.pair_evaluations_per_iteration, 13 * 12);
    assert!(summary.total_seconds >= 0.0);
    assert!(summary.seconds_per_iteration.is_finite());
    assert!(summary.iterations_per_second > 0.0);
    assert!(chrono::DateTime::parse_from_rfc3339(&summary.started_at).is_ok());
}

#[test]
fn symmetric_benchmark_halves_pair_evaluations() {
    let summary = benchmark::run(
        catalog::solar_system(),
        &quick_config(StrategyConfig::Symmetric),
    )
    .expect("benchmark run");

    assert_eq!(summary.strategy, PairwiseStrategy::Symmetric);
    assert_eq!(summary.pair_evaluations_per_iteration, 13 * 12 / 2);

    let report = summary.report();
    assert_eq!(report.strategy, "symmetric");
    assert_eq!(report.bodies, 13);
}

#[test]
fn benchmark_without_timed_iterations_fails() {
    let mut config = quick_config(StrategyConfig::Direct);
    config.timed_iterations = 0;
    let err = benchmark::run(catalog::solar_system(), &config).expect_err("no iterations");
    assert!(matches!(err, BenchmarkError::NoIterations));
}

#[test]
fn random_bodies_are_reproducible_and_in_unit_range() {
    let first = benchmark::random_bodies(20, &mut StdRng::seed_from_u64(99));
    let second = benchmark::random_bodies(20, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
    assert_eq!(first.len(), 20);

    for body in &first {
        assert_eq!(body.name(), RANDOM_BODY_NAME);
        for v in [body.position(), body.velocity()] {
            for c in v.to_array() {
                assert!((0.0..1.0).contains(&c));
            }
        }
        assert!((0.0..1.0).contains(&body.gm()));
    }

    let other = benchmark::random_bodies(20, &mut StdRng::seed_from_u64(100));
    assert_ne!(first, other);
}

#[test]
fn timer_measures_wall_clock_and_resets() {
    let mut timer = Timer::start();
    sleep(Duration::from_millis(20));
    let before = timer.elapsed_seconds();
    assert!(before >= 0.02, "elapsed {before}");

    timer.reset();
    assert!(timer.elapsed_seconds() < before);
}

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

#[test]
fn accelerations_prints_built_in_catalog() {
    Command::cargo_bin("accelerations")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun"))
        .stdout(predicate::str::contains("Saturn"))
        .stdout(predicate::str::contains(
            "8 bodies, 56 pair evaluations (direct)",
        ));
}

#[test]
fn accelerations_symmetric_strategy_halves_evaluations() {
    Command::cargo_bin("accelerations")
        .unwrap()
        .args(["--strategy", "symmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "8 bodies, 28 pair evaluations (symmetric)",
        ));
}

#[test]
fn accelerations_filters_single_body() {
    Command::cargo_bin("accelerations")
        .unwrap()
        .args(["--body", "earth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth"))
        .stdout(predicate::str::contains("Jupiter").not());
}

#[test]
fn accelerations_rejects_unknown_body() {
    Command::cargo_bin("accelerations")
        .unwrap()
        .args(["--body", "Pluto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn accelerations_writes_csv_for_toml_catalog() {
    let catalog = workspace_path("configs/earth_moon");
    Command::cargo_bin("accelerations")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog)
        .args(["--csv", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "name,ax_km_s2,ay_km_s2,az_km_s2,magnitude_km_s2",
        ))
        .stdout(predicate::str::contains("Moon,"));
}

#[test]
fn benchmark_reports_throughput_and_writes_json() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let json = dir.path().join("bench.json");

    Command::cargo_bin("benchmark")?
        .args([
            "--warmup",
            "1",
            "--timed",
            "2",
            "--random-bodies",
            "3",
            "--quiet",
        ])
        .arg("--json")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("s for 11 bodies"))
        .stdout(predicate::str::contains("iters per second"))
        .stdout(predicate::str::contains("Result with").not());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json)?)?;
    assert_eq!(value["bodies"], 11);
    assert_eq!(value["timed_iterations"], 2);
    assert_eq!(value["pair_evaluations_per_iteration"], 110);
    Ok(())
}

#[test]
fn benchmark_prints_catalog_before_timing() {
    let config = workspace_path("configs/benchmark.toml");
    Command::cargo_bin("benchmark")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["--warmup", "0", "--timed", "1", "--random-bodies", "0"])
        .args(["--strategy", "symmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result with 8 catalog bodies:"))
        .stdout(predicate::str::contains("s for 8 bodies"));
}

#[test]
fn benchmark_rejects_zero_timed_iterations() {
    Command::cargo_bin("benchmark")
        .unwrap()
        .args(["--timed", "0", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed_iterations"));
}

//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod accelerations {
    use std::io::{self, Write};
    use std::path::Path;

    use serde::Serialize;

    /// One CSV row per body, in field order.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub name: &'a str,
        pub ax_km_s2: f64,
        pub ay_km_s2: f64,
        pub az_km_s2: f64,
        pub magnitude_km_s2: f64,
    }

    impl<'a> Record<'a> {
        pub fn new(name: &'a str, acceleration_km_s2: [f64; 3]) -> Self {
            let [ax, ay, az] = acceleration_km_s2;
            Self {
                name,
                ax_km_s2: ax,
                ay_km_s2: ay,
                az_km_s2: az,
                magnitude_km_s2: (ax * ax + ay * ay + az * az).sqrt(),
            }
        }
    }

    /// Serialize records with a header row into any writer.
    pub fn write_csv<W: Write>(writer: W, records: &[Record<'_>]) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()
    }

    /// Write the acceleration table to `path` (`-` for stdout).
    pub fn write_csv_to_path(path: &Path, records: &[Record<'_>]) -> io::Result<()> {
        write_csv(super::writer_for_path(path)?, records)
    }
}

pub mod benchmark {
    use std::io::{self, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// JSON envelope for one benchmark run.
    #[derive(Debug, Clone, Serialize)]
    pub struct Report<'a> {
        pub started_at: &'a str,
        pub strategy: &'a str,
        pub bodies: usize,
        pub warmup_iterations: usize,
        pub timed_iterations: usize,
        pub total_seconds: f64,
        pub seconds_per_iteration: f64,
        pub iterations_per_second: f64,
        pub pair_evaluations_per_iteration: usize,
    }

    /// Write a pretty-printed JSON report to `path` (`-` for stdout).
    pub fn write_report(path: &Path, report: &Report<'_>) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        writer.flush()
    }
}

//! N-body gravitational acceleration kernel and its benchmark harness.
//!
//! The numeric core lives in the workspace crates (`solar_core` for the vector
//! type, `solar_gravity` for bodies and the force field). This crate ties them
//! to the built-in body catalog, configuration loading and the timing driver
//! so the binaries and tests share one entry point.

pub mod benchmark;
pub mod catalog;
pub mod report;

pub use solar_config as config;
pub use solar_core::{constants, units, vector};
pub use solar_export as export;
pub use solar_gravity as gravity;

//! Point-mass bodies and the dense all-pairs acceleration kernel.

pub mod body;
pub mod field;

pub use body::Body;
pub use field::{ForceField, GravityError, PairwiseStrategy};
pub use solar_core::vector::Vector3;

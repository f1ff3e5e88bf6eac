//! Point-mass body description.

use solar_core::vector::Vector3;

/// A point mass taking part in the force sum.
///
/// Positions are in kilometres, velocities in km/s and `gm` (the standard
/// gravitational parameter G·M) in km³/s². Any consistent unit system works as
/// long as all bodies share it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    position: Vector3,
    // Carried for a future integrator; the kernel never reads it.
    velocity: Vector3,
    gm: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, position: Vector3, velocity: Vector3, gm: f64) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            gm,
        }
    }

    /// Display label; plays no part in the physics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Standard gravitational parameter (km³/s²).
    pub fn gm(&self) -> f64 {
        self.gm
    }

    /// Newtonian acceleration this body experiences due to `other`.
    ///
    /// The result points from `self` toward `other` with magnitude
    /// `other.gm / r²`. Coincident positions (`r == 0`) are not trapped: the
    /// division produces NaN or infinities which propagate to the caller.
    pub fn acceleration_due_to(&self, other: &Body) -> Vector3 {
        let delta = other.position - self.position;
        let distance = delta.magnitude();
        let direction = delta / distance;
        direction * other.gm / (distance * distance)
    }
}

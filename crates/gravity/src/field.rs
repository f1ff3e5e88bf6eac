//! All-pairs acceleration evaluation over an ordered set of bodies.
//!
//! The field owns both the bodies and an output buffer with one slot per body.
//! Each call to [`ForceField::compute_accelerations`] overwrites that buffer in
//! place, so repeated calls in a benchmark or stepping loop never allocate.

use solar_core::vector::Vector3;
use thiserror::Error;
use tracing::{debug, warn};

use crate::body::Body;

/// How the pair loop visits bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairwiseStrategy {
    /// Every ordered pair `(i, j)` with `i != j` is evaluated on its own,
    /// giving `n·(n−1)` evaluations.
    #[default]
    Direct,
    /// Each unordered pair is evaluated once and applied to both bodies with
    /// opposite signs, giving `n·(n−1)/2` evaluations.
    Symmetric,
}

impl PairwiseStrategy {
    pub fn label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Symmetric => "symmetric",
        }
    }
}

/// Structural errors raised by the field. Numeric problems are never reported
/// here; they show up as NaN or infinite components in the output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GravityError {
    #[error(
        "output buffer has {slots} slots but the field holds {bodies} bodies; call resize_output() or rebuild the field"
    )]
    StaleOutput { bodies: usize, slots: usize },
}

/// Ordered body collection plus a reusable acceleration buffer.
#[derive(Debug, Clone)]
pub struct ForceField {
    bodies: Vec<Body>,
    accelerations: Vec<Vector3>,
    strategy: PairwiseStrategy,
    pair_evaluations: usize,
}

impl ForceField {
    /// Build a field using the [`PairwiseStrategy::Direct`] loop.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self::with_strategy(bodies, PairwiseStrategy::default())
    }

    pub fn with_strategy(bodies: Vec<Body>, strategy: PairwiseStrategy) -> Self {
        debug!(bodies = bodies.len(), strategy = strategy.label(), "force field constructed");
        let accelerations = vec![Vector3::zero(); bodies.len()];
        Self {
            bodies,
            accelerations,
            strategy,
            pair_evaluations: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn strategy(&self) -> PairwiseStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: PairwiseStrategy) {
        self.strategy = strategy;
    }

    /// Append a body. The output buffer is left untouched; call
    /// [`ForceField::resize_output`] before the next computation.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Resize the output buffer to match the current body count.
    pub fn resize_output(&mut self) {
        debug!(
            from = self.accelerations.len(),
            to = self.bodies.len(),
            "resizing acceleration buffer"
        );
        self.accelerations.resize(self.bodies.len(), Vector3::zero());
    }

    /// Number of pair evaluations performed by the most recent computation.
    pub fn pair_evaluations(&self) -> usize {
        self.pair_evaluations
    }

    /// Result of the most recent computation (zeros before the first call).
    pub fn accelerations(&self) -> &[Vector3] {
        &self.accelerations
    }

    /// Sum the acceleration every other body induces on each body.
    ///
    /// The returned slice is index-aligned with [`ForceField::bodies`]. Self
    /// pairs are skipped by index, never by distance.
    pub fn compute_accelerations(&mut self) -> Result<&[Vector3], GravityError> {
        if self.accelerations.len() != self.bodies.len() {
            warn!(
                bodies = self.bodies.len(),
                slots = self.accelerations.len(),
                "acceleration buffer out of date"
            );
            return Err(GravityError::StaleOutput {
                bodies: self.bodies.len(),
                slots: self.accelerations.len(),
            });
        }

        self.pair_evaluations = match self.strategy {
            PairwiseStrategy::Direct => accumulate_direct(&self.bodies, &mut self.accelerations),
            PairwiseStrategy::Symmetric => {
                accumulate_symmetric(&self.bodies, &mut self.accelerations)
            }
        };
        Ok(&self.accelerations)
    }
}

fn accumulate_direct(bodies: &[Body], out: &mut [Vector3]) -> usize {
    let mut evaluations = 0;
    for (i, (body, slot)) in bodies.iter().zip(out.iter_mut()).enumerate() {
        *slot = Vector3::zero();
        for (j, other) in bodies.iter().enumerate() {
            if i != j {
                *slot += body.acceleration_due_to(other);
                evaluations += 1;
            }
        }
    }
    evaluations
}

fn accumulate_symmetric(bodies: &[Body], out: &mut [Vector3]) -> usize {
    for slot in out.iter_mut() {
        *slot = Vector3::zero();
    }

    let n = bodies.len();
    let mut evaluations = 0;
    for i in 0..n {
        let bi = &bodies[i];
        for j in (i + 1)..n {
            let bj = &bodies[j];

            // same term as Body::acceleration_due_to, mirrored onto j
            let delta = bj.position() - bi.position();
            let distance = delta.magnitude();
            let direction = delta / distance;
            let r2 = distance * distance;

            out[i] += direction * bj.gm() / r2;
            out[j] += direction * -bi.gm() / r2;
            evaluations += 1;
        }
    }
    evaluations
}

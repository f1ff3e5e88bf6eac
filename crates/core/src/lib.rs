//! Core units, constants, and shared primitives for the Solar N-Body workspace.

/// Physical constants expressed in the workspace's km/s unit system.
pub mod constants {
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Heliocentric gravitational parameter of the Sun (km³/s²).
    pub const GM_SUN_KM3_S2: f64 = 132_712_440_041.939_38;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_KM;

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert kilometres to astronomical units.
    #[inline]
    pub fn km_to_au(v: f64) -> f64 {
        v / AU_KM
    }
}

/// Compact 3D vector used for positions, velocities and accelerations.
pub mod vector {
    use std::fmt;
    use std::ops::{Add, AddAssign, Div, Mul, Sub};

    /// Three `f64` components with value semantics.
    ///
    /// Arithmetic operators return new vectors and never touch their operands.
    /// `+=` is the only mutating operation and exists for summation loops.
    /// Division follows IEEE-754: dividing by zero yields infinities or NaN.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        #[inline]
        pub const fn zero() -> Self {
            Self::new(0.0, 0.0, 0.0)
        }

        /// Euclidean norm.
        #[inline]
        pub fn magnitude(&self) -> f64 {
            self.magnitude_squared().sqrt()
        }

        #[inline]
        pub fn magnitude_squared(&self) -> f64 {
            self.dot(self)
        }

        /// Dot product of two vectors.
        #[inline]
        pub fn dot(&self, other: &Vector3) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        /// True when no component is NaN or infinite.
        #[inline]
        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }

        #[inline]
        pub fn to_array(self) -> [f64; 3] {
            [self.x, self.y, self.z]
        }
    }

    impl From<[f64; 3]> for Vector3 {
        fn from(v: [f64; 3]) -> Self {
            Self::new(v[0], v[1], v[2])
        }
    }

    impl From<Vector3> for [f64; 3] {
        fn from(v: Vector3) -> Self {
            v.to_array()
        }
    }

    impl fmt::Display for Vector3 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({:e}, {:e}, {:e})", self.x, self.y, self.z)
        }
    }

    impl Add for Vector3 {
        type Output = Vector3;

        #[inline]
        fn add(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        #[inline]
        fn sub(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
        }
    }

    impl Mul for Vector3 {
        type Output = Vector3;

        #[inline]
        fn mul(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
        }
    }

    impl Div for Vector3 {
        type Output = Vector3;

        #[inline]
        fn div(self, rhs: Vector3) -> Vector3 {
            Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
        }
    }

    impl Add<f64> for Vector3 {
        type Output = Vector3;

        #[inline]
        fn add(self, rhs: f64) -> Vector3 {
            Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
        }
    }

    impl Sub<f64> for Vector3 {
        type Output = Vector3;

        #[inline]
        fn sub(self, rhs: f64) -> Vector3 {
            Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
        }
    }

    impl Mul<f64> for Vector3 {
        type Output = Vector3;

        #[inline]
        fn mul(self, rhs: f64) -> Vector3 {
            Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
        }
    }

    impl Div<f64> for Vector3 {
        type Output = Vector3;

        #[inline]
        fn div(self, rhs: f64) -> Vector3 {
            Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
        }
    }

    // Accumulate.
    impl AddAssign for Vector3 {
        #[inline]
        fn add_assign(&mut self, rhs: Vector3) {
            self.x += rhs.x;
            self.y += rhs.y;
            self.z += rhs.z;
        }
    }
}

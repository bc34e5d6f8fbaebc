use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A speed with cm/s as the base unit.
///
/// Drift speeds of pebbles are a few m/s to tens of m/s; fragmentation
/// thresholds are quoted in m/s as well.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let vfrag = Velocity::from_m_per_sec(10.0);
/// assert_eq!(vfrag.to_cm_per_sec(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    /// Creates a zero velocity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Velocity` from a value in cm/s.
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Velocity` from a value in m/s.
    pub fn from_m_per_sec(value: f64) -> Self {
        Self(value * 100.0)
    }

    /// Returns the velocity in cm/s.
    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the velocity to m/s.
    pub fn to_m_per_sec(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

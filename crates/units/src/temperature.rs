use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A temperature with Kelvin as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let at_1_au = Temperature::from_kelvin(280.0);
/// let at_4_au = at_1_au * 0.5;
/// assert_eq!(at_4_au.to_kelvin(), 140.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

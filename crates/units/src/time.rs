use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Julian year in seconds (365.25 days).
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Million years in regular years
const MYR_TO_YEARS: f64 = 1_000_000.0;

/// A physical time with seconds as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let disk_age = Time::from_myr(1.0);
/// assert_eq!(disk_age.to_years(), 1.0e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Creates a time from a value in million years (Myr)
    pub fn from_myr(value: f64) -> Self {
        Self::from_years(value * MYR_TO_YEARS)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to years.
    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }

    /// Converts the time to million years.
    pub fn to_myr(&self) -> f64 {
        self.to_years() / MYR_TO_YEARS
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

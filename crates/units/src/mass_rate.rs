use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::{Mass, EARTH_MASS_G, SOLAR_MASS_G};
use crate::time::{Time, SECONDS_PER_YEAR};

/// Seconds in one million years.
const SECONDS_PER_MYR: f64 = SECONDS_PER_YEAR * 1e6;

/// A mass flow rate with grams per second as the base unit.
///
/// Pebble fluxes come out of the disk physics in g/s; planet formation
/// people quote them in Earth masses per Myr (≈ 1.9e14 g/s each).
///
/// # Examples
///
/// ```rust
/// use units::{MassRate, Time};
///
/// let pebble_flux = MassRate::from_earth_masses_per_myr(100.0);
/// let accreted = pebble_flux.integrate(Time::from_myr(1.0));
///
/// assert!((accreted.to_earth_masses() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: g/s

impl MassRate {
    /// Creates a zero mass rate value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `MassRate` from a value in grams per second.
    pub fn from_grams_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from a value in Earth masses per million years.
    pub fn from_earth_masses_per_myr(value: f64) -> Self {
        Self(value * EARTH_MASS_G / SECONDS_PER_MYR)
    }

    /// Creates a new `MassRate` from a value in solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value * SOLAR_MASS_G / SECONDS_PER_YEAR)
    }

    /// Returns the mass rate in grams per second.
    pub fn to_grams_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to Earth masses per million years.
    pub fn to_earth_masses_per_myr(&self) -> f64 {
        self.0 * SECONDS_PER_MYR / EARTH_MASS_G
    }

    /// Converts the mass rate to solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR / SOLAR_MASS_G
    }

    /// Mass transported at this constant rate over `duration`.
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_grams(self.0 * duration.to_seconds())
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Sub for MassRate {
    type Output = MassRate;

    fn sub(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Div<f64> for MassRate {
    type Output = MassRate;

    fn div(self, rhs: f64) -> MassRate {
        MassRate(self.0 / rhs)
    }
}

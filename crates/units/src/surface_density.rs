use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A surface mass density with g/cm² as the base unit.
///
/// The standard unit for protoplanetary disk profiles: the minimum mass
/// solar nebula has Σ_gas ≈ 1700 g/cm² at 1 AU, and solids are roughly
/// a hundred times less.
///
/// # Examples
///
/// ```rust
/// use units::SurfaceDensity;
///
/// let gas = SurfaceDensity::from_grams_per_cm2(100.0);
/// let dust = SurfaceDensity::from_grams_per_cm2(1.0);
///
/// assert_eq!(dust / gas, 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SurfaceDensity(f64); // Base unit: g/cm²

impl SurfaceDensity {
    /// Creates a zero surface density value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `SurfaceDensity` from a value in grams per square centimeter.
    pub fn from_grams_per_cm2(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `SurfaceDensity` from a value in kilograms per square meter.
    ///
    /// 1 kg/m² = 0.1 g/cm²
    pub fn from_kg_per_m2(value: f64) -> Self {
        Self(value * 0.1)
    }

    /// Returns the surface density in g/cm².
    pub fn to_grams_per_cm2(&self) -> f64 {
        self.0
    }

    /// Converts the surface density to kg/m².
    pub fn to_kg_per_m2(&self) -> f64 {
        self.0 * 10.0
    }
}

impl Add for SurfaceDensity {
    type Output = SurfaceDensity;

    fn add(self, rhs: SurfaceDensity) -> SurfaceDensity {
        SurfaceDensity(self.0 + rhs.0)
    }
}

impl Sub for SurfaceDensity {
    type Output = SurfaceDensity;

    fn sub(self, rhs: SurfaceDensity) -> SurfaceDensity {
        SurfaceDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for SurfaceDensity {
    type Output = SurfaceDensity;

    fn mul(self, rhs: f64) -> SurfaceDensity {
        SurfaceDensity(self.0 * rhs)
    }
}

impl Div<f64> for SurfaceDensity {
    type Output = SurfaceDensity;

    fn div(self, rhs: f64) -> SurfaceDensity {
        SurfaceDensity(self.0 / rhs)
    }
}

/// Ratio of two surface densities, e.g. the dust-to-gas ratio
impl Div for SurfaceDensity {
    type Output = f64;

    fn div(self, rhs: SurfaceDensity) -> f64 {
        self.0 / rhs.0
    }
}

//! Input parameters of the pebble predictor.
//!
//! Everything is in CGS: radii in cm, times in s, masses in g, surface
//! densities in g/cm², temperatures in K, velocities in cm/s.

use serde::{Deserialize, Serialize};
use units::{Density, Length, Mass, SurfaceDensity, Temperature, Time, Velocity};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::{PebbleError, PebbleResult};
use crate::grid::log_spaced_grid;

/// Disk and particle parameters for one pebble prediction.
///
/// Serialized with camelCase names. The keywords of the usual pebble
/// predictor call (`Mstar`, `SigmaGas`, `SigmaDust`, `T`) are accepted as
/// aliases, so parameter files written for it load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PebbleParameters {
    /// Radial grid (cm), strictly increasing
    pub rgrid: Vec<f64>,
    /// Time grid (s), strictly increasing and non-negative
    pub tgrid: Vec<f64>,
    /// Mass of the central star (g)
    #[serde(alias = "Mstar")]
    pub mstar: f64,
    /// Initial gas surface density at every radius (g/cm²)
    #[serde(alias = "SigmaGas")]
    pub sigma_gas: Vec<f64>,
    /// Initial solids surface density at every radius (g/cm²)
    #[serde(alias = "SigmaDust")]
    pub sigma_dust: Vec<f64>,
    /// Gas temperature at every radius (K)
    #[serde(alias = "T")]
    pub temperature: Vec<f64>,
    /// Turbulence strength
    pub alpha: f64,
    /// Collisional fragmentation threshold velocity (cm/s)
    pub vfrag: f64,
    /// Bulk density of the dust grains (g/cm³)
    pub rhop: f64,
}

impl PebbleParameters {
    /// Sample a power-law disk onto `n_radii` log-spaced radii.
    ///
    /// `times` is taken in seconds and used as the time grid unchanged.
    pub fn from_power_law(disk: &PowerLawDisk, n_radii: usize, times: Vec<f64>) -> Self {
        let rgrid = log_spaced_grid(disk.inner_radius.to_cm(), disk.outer_radius.to_cm(), n_radii);

        let sigma_gas: Vec<f64> = rgrid
            .iter()
            .map(|&r| disk.gas_surface_density(Length::from_cm(r)).to_grams_per_cm2())
            .collect();
        let sigma_dust = sigma_gas.iter().map(|&s| s * disk.dust_to_gas).collect();
        let temperature = rgrid
            .iter()
            .map(|&r| disk.temperature(Length::from_cm(r)).to_kelvin())
            .collect();

        Self {
            rgrid,
            tgrid: times,
            mstar: disk.stellar_mass.to_grams(),
            sigma_gas,
            sigma_dust,
            temperature,
            alpha: disk.alpha,
            vfrag: disk.fragmentation_velocity.to_cm_per_sec(),
            rhop: disk.grain_density.to_grams_per_cm3(),
        }
    }

    /// Number of radial cells.
    pub fn n_radii(&self) -> usize {
        self.rgrid.len()
    }

    /// Number of output times.
    pub fn n_times(&self) -> usize {
        self.tgrid.len()
    }

    pub fn radius(&self, i: usize) -> Length {
        Length::from_cm(self.rgrid[i])
    }

    pub fn time(&self, i: usize) -> Time {
        Time::from_seconds(self.tgrid[i])
    }

    pub fn stellar_mass(&self) -> Mass {
        Mass::from_grams(self.mstar)
    }

    pub fn fragmentation_velocity(&self) -> Velocity {
        Velocity::from_cm_per_sec(self.vfrag)
    }

    pub fn grain_density(&self) -> Density {
        Density::from_grams_per_cm3(self.rhop)
    }

    /// Check shapes, ordering and positivity of every input.
    ///
    /// The first violation found is returned.
    pub fn validate(&self) -> PebbleResult<()> {
        let n = self.rgrid.len();
        if n == 0 {
            return Err(PebbleError::EmptyGrid { name: "rgrid" });
        }
        if n < 2 {
            return Err(PebbleError::GridTooShort {
                name: "rgrid",
                len: n,
                min: 2,
            });
        }
        if self.tgrid.is_empty() {
            return Err(PebbleError::EmptyGrid { name: "tgrid" });
        }

        check_length("sigmaGas", &self.sigma_gas, n)?;
        check_length("sigmaDust", &self.sigma_dust, n)?;
        check_length("temperature", &self.temperature, n)?;

        check_positive("rgrid", &self.rgrid)?;
        check_increasing("rgrid", &self.rgrid)?;

        for (index, &t) in self.tgrid.iter().enumerate() {
            if !t.is_finite() {
                return Err(PebbleError::NonFinite {
                    name: "tgrid",
                    index,
                });
            }
            if t < 0.0 {
                return Err(PebbleError::NegativeTime { index, value: t });
            }
        }
        check_increasing("tgrid", &self.tgrid)?;

        check_positive("sigmaGas", &self.sigma_gas)?;
        check_positive("sigmaDust", &self.sigma_dust)?;
        check_positive("temperature", &self.temperature)?;

        check_positive("mstar", &[self.mstar])?;
        check_positive("alpha", &[self.alpha])?;
        check_positive("vfrag", &[self.vfrag])?;
        check_positive("rhop", &[self.rhop])?;

        Ok(())
    }
}

fn check_length(name: &'static str, values: &[f64], expected: usize) -> PebbleResult<()> {
    if values.len() != expected {
        return Err(PebbleError::LengthMismatch {
            name,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, values: &[f64]) -> PebbleResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(PebbleError::NonFinite { name, index });
        }
        if value <= 0.0 {
            return Err(PebbleError::NonPositive { name, index, value });
        }
    }
    Ok(())
}

fn check_increasing(name: &'static str, values: &[f64]) -> PebbleResult<()> {
    match values.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(i) => Err(PebbleError::NotIncreasing { name, index: i + 1 }),
        None => Ok(()),
    }
}

/// A protoplanetary disk with power-law profiles, used to build inputs.
///
/// Gas surface density: Σ_g(r) = Σ_0 × (r / r_0)^(-p)
/// Temperature: T(r) = T_0 × (r / r_0)^(-q)
/// Solids: Σ_d = Z × Σ_g with a constant dust-to-gas ratio Z
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerLawDisk {
    /// Inner edge of the disk
    pub inner_radius: Length,
    /// Outer edge of the disk
    pub outer_radius: Length,

    /// Reference radius for both profiles
    pub r_0: Length,
    /// Gas surface density at r_0
    pub sigma_0: SurfaceDensity,
    /// Surface density power-law exponent (Σ ∝ r^(-p))
    pub sigma_exponent: f64,

    /// Temperature at r_0
    pub temperature_0: Temperature,
    /// Temperature power-law exponent (T ∝ r^(-q))
    pub temp_exponent: f64,

    /// Initial solids-to-gas surface density ratio
    pub dust_to_gas: f64,

    /// Central stellar mass
    pub stellar_mass: Mass,
    /// Turbulence strength
    pub alpha: f64,
    /// Fragmentation threshold velocity
    pub fragmentation_velocity: Velocity,
    /// Bulk density of the grains
    pub grain_density: Density,
}

impl PowerLawDisk {
    /// A minimum-mass-solar-nebula-like disk around a solar-mass star.
    ///
    /// Σ_g = 1700 (r/AU)^(-1) g/cm², T = 280 (r/AU)^(-1/2) K, Z = 0.01,
    /// α = 1e-3, v_frag = 10 m/s, ρ_p = 1.6 g/cm³, 0.1-300 AU.
    pub fn mmsn() -> Self {
        Self {
            inner_radius: Length::from_au(0.1),
            outer_radius: Length::from_au(300.0),
            r_0: Length::from_au(1.0),
            sigma_0: SurfaceDensity::from_grams_per_cm2(1700.0),
            sigma_exponent: 1.0,
            temperature_0: Temperature::from_kelvin(280.0),
            temp_exponent: 0.5,
            dust_to_gas: 0.01,
            stellar_mass: Mass::from_solar_masses(1.0),
            alpha: 1e-3,
            fragmentation_velocity: Velocity::from_m_per_sec(10.0),
            grain_density: Density::from_grams_per_cm3(1.6),
        }
    }

    /// Gas surface density at radius r.
    pub fn gas_surface_density(&self, r: Length) -> SurfaceDensity {
        let ratio = r / self.r_0;
        self.sigma_0 * ratio.powf(-self.sigma_exponent)
    }

    /// Temperature at radius r.
    pub fn temperature(&self, r: Length) -> Temperature {
        let ratio = r / self.r_0;
        self.temperature_0 * ratio.powf(-self.temp_exponent)
    }
}

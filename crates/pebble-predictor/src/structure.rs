//! Static disk structure.
//!
//! Everything here depends on radius only and is computed once per
//! prediction before the time integration starts.
//!
//! # Physics
//!
//! The disk is vertically isothermal with a Gaussian density profile:
//!
//! - Sound speed: c_s = √(k_B T / (μ m_p))
//! - Keplerian frequency: Ω_K = √(G M_* / r³)
//! - Midplane density: ρ_g = Σ_g Ω_K / (√(2π) c_s)
//! - Pressure: P = ρ_g c_s²
//! - Pressure gradient parameter: η = (dP/dr) / (2 ρ_g Ω_K² r)
//!
//! and three Stokes numbers bound the particle size:
//!
//! - turbulent fragmentation: St = 0.37 v_frag² / (3 α c_s²)
//! - drift fragmentation: St = 0.37 v_frag / (2 |η| Ω_K r)
//! - monomers: St = (π/2) a_0 ρ_p / Σ_g

use serde::Serialize;
use units::{AngularVelocity, Density, Length, Pressure, Time, Velocity};

use crate::constants::{
    AU, FRAGMENTATION_EFFICIENCY, G, GROWTH_DRIFT_RATIO, GROWTH_EXPONENT, K_B, MONOMER_SIZE,
    M_PROTON, MU, PI, REFERENCE_ALPHA,
};
use crate::error::PebbleResult;
use crate::grid::{cell_interfaces, cell_widths, interp_clamped};
use crate::parameters::PebbleParameters;
use crate::regime::drift_velocity;

/// Radius-dependent disk quantities derived from the input profiles.
///
/// All arrays have one entry per radial cell except `interfaces` and
/// `interface_pressure`, which have one more. Values are CGS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskStructure {
    /// Cell-centre radii (cm)
    pub radii: Vec<f64>,
    /// Isothermal sound speed (cm/s)
    pub sound_speed: Vec<f64>,
    /// Keplerian orbital frequency (rad/s)
    pub orbital_frequency: Vec<f64>,
    /// Midplane gas density (g/cm³)
    pub gas_density: Vec<f64>,
    /// Midplane gas pressure (dyn/cm²)
    pub pressure: Vec<f64>,
    /// Cell interfaces (cm)
    pub interfaces: Vec<f64>,
    /// Cell widths (cm)
    pub widths: Vec<f64>,
    /// Pressure interpolated onto the interfaces (dyn/cm²)
    pub interface_pressure: Vec<f64>,
    /// Pressure gradient parameter; only |η| enters the dynamics
    pub eta: Vec<f64>,
    /// Stokes number limit from turbulence-driven fragmentation
    pub st_fragmentation: Vec<f64>,
    /// Stokes number limit from drift-driven fragmentation
    pub st_drift_fragmentation: Vec<f64>,
    /// Stokes number of the monomers
    pub st_monomer: Vec<f64>,
    /// Initial solids-to-gas surface density ratio
    pub dust_to_gas: Vec<f64>,
    /// Growth timescale (s)
    pub growth_timescale: Vec<f64>,
}

impl DiskStructure {
    /// Validate `params` and derive the static structure.
    pub fn new(params: &PebbleParameters) -> PebbleResult<Self> {
        params.validate()?;
        Ok(Self::derive(params))
    }

    /// Derive the structure from parameters that already passed validation.
    pub(crate) fn derive(params: &PebbleParameters) -> Self {
        let radii = params.rgrid.clone();
        let alpha = params.alpha;
        let vfrag = params.vfrag;

        let sound_speed: Vec<f64> = params
            .temperature
            .iter()
            .map(|&t| (K_B * t / (MU * M_PROTON)).sqrt())
            .collect();

        let orbital_frequency: Vec<f64> = radii
            .iter()
            .map(|&r| (G * params.mstar / r.powi(3)).sqrt())
            .collect();

        let gas_density: Vec<f64> = (0..radii.len())
            .map(|i| params.sigma_gas[i] * orbital_frequency[i] / ((2.0 * PI).sqrt() * sound_speed[i]))
            .collect();

        let pressure: Vec<f64> = gas_density
            .iter()
            .zip(&sound_speed)
            .map(|(&rho, &c_s)| rho * c_s.powi(2))
            .collect();

        let interfaces = cell_interfaces(&radii);
        let widths = cell_widths(&interfaces);
        let interface_pressure = interp_clamped(&interfaces, &radii, &pressure);

        let eta: Vec<f64> = (0..radii.len())
            .map(|i| {
                let dp_dr = (interface_pressure[i + 1] - interface_pressure[i]) / widths[i];
                dp_dr / (2.0 * gas_density[i] * orbital_frequency[i].powi(2) * radii[i])
            })
            .collect();

        let st_fragmentation: Vec<f64> = sound_speed
            .iter()
            .map(|&c_s| FRAGMENTATION_EFFICIENCY * vfrag.powi(2) / (3.0 * alpha * c_s.powi(2)))
            .collect();

        let st_drift_fragmentation: Vec<f64> = (0..radii.len())
            .map(|i| {
                FRAGMENTATION_EFFICIENCY * vfrag
                    / (2.0 * eta[i].abs() * orbital_frequency[i] * radii[i])
            })
            .collect();

        let st_monomer: Vec<f64> = params
            .sigma_gas
            .iter()
            .map(|&sigma| 0.5 * PI * MONOMER_SIZE * params.rhop / sigma)
            .collect();

        let dust_to_gas: Vec<f64> = params
            .sigma_dust
            .iter()
            .zip(&params.sigma_gas)
            .map(|(&dust, &gas)| dust / gas)
            .collect();

        // t_grow = 1 / ((α/α_ref)^(1/3) Z_0 Ω_K (r/AU)^(-1/3))
        let alpha_factor = (alpha / REFERENCE_ALPHA).powf(GROWTH_EXPONENT);
        let growth_timescale: Vec<f64> = (0..radii.len())
            .map(|i| {
                1.0 / (alpha_factor
                    * dust_to_gas[i]
                    * orbital_frequency[i]
                    * (radii[i] / AU).powf(-GROWTH_EXPONENT))
            })
            .collect();

        Self {
            radii,
            sound_speed,
            orbital_frequency,
            gas_density,
            pressure,
            interfaces,
            widths,
            interface_pressure,
            eta,
            st_fragmentation,
            st_drift_fragmentation,
            st_monomer,
            dust_to_gas,
            growth_timescale,
        }
    }

    /// Number of radial cells.
    pub fn n_radii(&self) -> usize {
        self.radii.len()
    }

    pub fn radius(&self, i: usize) -> Length {
        Length::from_cm(self.radii[i])
    }

    pub fn sound_speed_at(&self, i: usize) -> Velocity {
        Velocity::from_cm_per_sec(self.sound_speed[i])
    }

    pub fn orbital_frequency_at(&self, i: usize) -> AngularVelocity {
        AngularVelocity::from_rad_per_sec(self.orbital_frequency[i])
    }

    pub fn gas_density_at(&self, i: usize) -> Density {
        Density::from_grams_per_cm3(self.gas_density[i])
    }

    pub fn pressure_at(&self, i: usize) -> Pressure {
        Pressure::from_dyn_per_cm2(self.pressure[i])
    }

    pub fn growth_timescale_at(&self, i: usize) -> Time {
        Time::from_seconds(self.growth_timescale[i])
    }

    /// Keplerian velocity v_K = Ω_K r.
    pub fn keplerian_velocity_at(&self, i: usize) -> Velocity {
        Velocity::from_cm_per_sec(self.orbital_frequency[i] * self.radii[i])
    }

    /// Disk aspect ratio h/r = c_s / v_K.
    pub fn aspect_ratio_at(&self, i: usize) -> f64 {
        self.sound_speed[i] / (self.orbital_frequency[i] * self.radii[i])
    }

    /// Magnitude of the pressure gradient parameter.
    pub fn eta_abs(&self, i: usize) -> f64 {
        self.eta[i].abs()
    }

    /// Radial drift speed of particles with Stokes number `st` at cell i.
    pub fn drift_velocity_at(&self, i: usize, st: f64) -> Velocity {
        Velocity::from_cm_per_sec(drift_velocity(
            self.eta_abs(i),
            self.orbital_frequency[i],
            self.radii[i],
            st,
        ))
    }

    /// Fastest drift that growth can resupply: r / t_grow / 30.
    pub fn growth_velocity_cap(&self, i: usize) -> f64 {
        self.radii[i] / self.growth_timescale[i] / GROWTH_DRIFT_RATIO
    }
}

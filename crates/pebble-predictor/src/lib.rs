//! Pebble Stokes number and flux predictor for protoplanetary disks.
//!
//! Given a radial grid, a time grid, the stellar mass, initial gas and
//! solids surface densities, a temperature profile and three particle
//! parameters (α, v_frag, ρ_p), estimates the Stokes number St(t, r) and
//! the inward pebble mass flux Ṁ(t, r) everywhere in the disk.
//!
//! # Physics
//!
//! Grains start as micron-sized monomers and grow exponentially on the
//! local growth timescale until one of three limits stops them:
//!
//! - **Turbulent fragmentation**: turbulent collision speeds reach v_frag
//! - **Drift fragmentation**: differential drift speeds reach v_frag
//! - **Drift limit**: particles drift inward faster than they can grow
//!
//! The flux drains the solids budget outside each radius, which in turn
//! lowers the local dust-to-gas ratio and with it the drift limit.
//!
//! # Example
//!
//! ```
//! use pebble_predictor::{predict, PebbleParameters, PowerLawDisk};
//! use units::Time;
//!
//! let times = vec![0.0, Time::from_years(1e4).to_seconds(), Time::from_years(1e5).to_seconds()];
//! let params = PebbleParameters::from_power_law(&PowerLawDisk::mmsn(), 100, times);
//!
//! let prediction = predict(&params).unwrap();
//! let flux_mid_disk = prediction.flux_at(2, 50).to_earth_masses_per_myr();
//! assert!(flux_mid_disk > 0.0);
//! ```

pub mod constants;
mod error;
pub mod grid;
mod parameters;
mod prediction;
mod predictor;
mod regime;
mod structure;

#[cfg(test)]
mod parameters_test;
#[cfg(test)]
mod structure_test;

pub use error::{PebbleError, PebbleResult};
pub use grid::{cell_interfaces, cell_widths, interp_clamped, linear_grid, log_spaced_grid, mass_outside};
pub use parameters::{PebbleParameters, PowerLawDisk};
pub use prediction::PebblePrediction;
pub use predictor::{pebble_predictor, predict};
pub use regime::{drift_velocity, GrowthRegime, StokesLimits};
pub use structure::DiskStructure;

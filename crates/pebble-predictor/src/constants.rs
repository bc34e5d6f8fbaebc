//! Physical and model constants (CGS).
//!
//! Every number the pebble model uses lives here so that the formulas in
//! the rest of the crate read as physics, not as literals.

/// Gravitational constant (cm³/(g·s²)), CODATA 2018
pub const G: f64 = 6.6743e-8;

/// Boltzmann constant (erg/K), exact SI definition
pub const K_B: f64 = 1.380649e-16;

/// Proton mass (g), CODATA 2018
pub const M_PROTON: f64 = 1.67262192369e-24;

/// Astronomical unit (cm), shared with the `units` crate
pub const AU: f64 = units::AU_TO_CM;

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Mean molecular weight of molecular-hydrogen dominated gas
pub const MU: f64 = 2.3;

/// Radius of the monomers that growth starts from (cm)
pub const MONOMER_SIZE: f64 = 1e-4;

/// How many times faster than drift growth has to be (Okuzumi et al. 2012)
pub const GROWTH_DRIFT_RATIO: f64 = 30.0;

/// Fraction of the fragmentation velocity reached at the size limit
pub const FRAGMENTATION_EFFICIENCY: f64 = 0.37;

/// Turbulence strength at which the growth timescale is normalised
pub const REFERENCE_ALPHA: f64 = 1e-4;

/// Power used for the α and radius scaling of the growth timescale.
///
/// Deliberately the truncated decimal, not 1/3.
pub const GROWTH_EXPONENT: f64 = 0.3333;

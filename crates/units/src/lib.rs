//! Typed physical quantities in CGS base units.
//!
//! Every quantity stores its value in the CGS unit used by the disk physics
//! (cm, s, g, K) and offers constructors and accessors for the astronomical
//! units people actually quote (AU, years, solar and Earth masses).

pub mod angular_velocity;
pub mod density;
pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod pressure;
pub mod surface_density;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod mass_rate_test;
#[cfg(test)]
mod time_test;

pub use angular_velocity::AngularVelocity;
pub use density::Density;
pub use length::{Length, AU_TO_CM};
pub use mass::{Mass, EARTH_MASS_G, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use pressure::Pressure;
pub use surface_density::SurfaceDensity;
pub use temperature::Temperature;
pub use time::{Time, SECONDS_PER_YEAR};
pub use velocity::Velocity;

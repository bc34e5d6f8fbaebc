//! Result of a pebble prediction.

use ndarray::Array2;
use serde::Serialize;
use units::{Mass, MassRate, Time};

use crate::regime::GrowthRegime;

/// Stokes number and pebble flux on the (time, radius) grid.
///
/// Every field is shaped `(n_times, n_radii)`; row `it` belongs to
/// `times[it]`, column `ir` to `radii[ir]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PebblePrediction {
    /// Time grid (s)
    pub times: Vec<f64>,
    /// Radial grid (cm)
    pub radii: Vec<f64>,
    /// Pebble Stokes number
    pub stokes: Array2<f64>,
    /// Inward pebble mass flux (g/s). Non-negative while the budget
    /// outside the radius is; an overdrawn budget turns it negative.
    pub flux: Array2<f64>,
    /// Solids mass still outside each radius (g)
    pub mass_outside: Array2<f64>,
    /// Process that set the Stokes number
    pub regimes: Array2<GrowthRegime>,
    /// Cells where the drift speed was capped by the growth rate
    pub velocity_capped: Array2<bool>,
}

impl PebblePrediction {
    pub fn n_times(&self) -> usize {
        self.times.len()
    }

    pub fn n_radii(&self) -> usize {
        self.radii.len()
    }

    pub fn stokes_at(&self, it: usize, ir: usize) -> f64 {
        self.stokes[[it, ir]]
    }

    pub fn flux_at(&self, it: usize, ir: usize) -> MassRate {
        MassRate::from_grams_per_sec(self.flux[[it, ir]])
    }

    pub fn regime_at(&self, it: usize, ir: usize) -> GrowthRegime {
        self.regimes[[it, ir]]
    }

    pub fn mass_outside_at(&self, it: usize, ir: usize) -> Mass {
        Mass::from_grams(self.mass_outside[[it, ir]])
    }

    /// Fraction of the initial outward solids budget left at (it, ir).
    pub fn remaining_fraction(&self, it: usize, ir: usize) -> f64 {
        self.mass_outside[[it, ir]] / self.mass_outside[[0, ir]]
    }

    /// Solids that drifted inward past radius `ir` over the whole time grid.
    ///
    /// This is the drop of the outward budget between the first and last
    /// time, i.e. the forward-Euler sum of the flux the budget was built from.
    pub fn delivered_mass(&self, ir: usize) -> Mass {
        let last = self.n_times() - 1;
        Mass::from_grams(self.mass_outside[[0, ir]] - self.mass_outside[[last, ir]])
    }

    /// Trapezoidal time integral of the flux through radius `ir`.
    pub fn time_integrated_flux(&self, ir: usize) -> Mass {
        let total: f64 = (1..self.n_times())
            .map(|it| {
                let dt = self.times[it] - self.times[it - 1];
                0.5 * (self.flux[[it, ir]] + self.flux[[it - 1, ir]]) * dt
            })
            .sum();
        Mass::from_grams(total)
    }

    /// Time of row `it`.
    pub fn time(&self, it: usize) -> Time {
        Time::from_seconds(self.times[it])
    }

    /// Whether every Stokes number, flux and budget value is finite.
    pub fn is_finite(&self) -> bool {
        self.stokes.iter().all(|v| v.is_finite())
            && self.flux.iter().all(|v| v.is_finite())
            && self.mass_outside.iter().all(|v| v.is_finite())
    }

    /// Number of cells, over all times, set by `regime`.
    pub fn regime_count(&self, regime: GrowthRegime) -> usize {
        self.regimes.iter().filter(|&&r| r == regime).count()
    }

    /// Split into the `(stokes, flux)` pair.
    pub fn into_fields(self) -> (Array2<f64>, Array2<f64>) {
        (self.stokes, self.flux)
    }
}

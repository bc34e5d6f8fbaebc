//! Growth regimes and the Stokes number arbitration between them.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Which process sets the pebble Stokes number at a given time and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum GrowthRegime {
    /// Grains are still monomers; nothing has grown past the starting size.
    Monomer,
    /// Exponential coagulation, not yet limited by anything else.
    Growth,
    /// Turbulent relative velocities reach the fragmentation threshold.
    TurbulentFragmentation,
    /// Differential drift velocities reach the fragmentation threshold.
    DriftFragmentation,
    /// Particles drift away faster than the local solids can grow them.
    DriftLimited,
}

impl GrowthRegime {
    /// Whether particles in this regime are capped by fragmentation.
    pub fn is_fragmentation_limited(&self) -> bool {
        matches!(
            self,
            GrowthRegime::TurbulentFragmentation | GrowthRegime::DriftFragmentation
        )
    }
}

/// Candidate Stokes numbers at one cell and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StokesLimits {
    pub turbulent_fragmentation: f64,
    pub drift_fragmentation: f64,
    /// Growth curve St_0 exp(t / t_grow)
    pub growth: f64,
    /// Supply limit Z / |η| / 30
    pub drift_limited: f64,
    pub monomer: f64,
}

impl StokesLimits {
    /// Resolve the limits into one Stokes number and the regime that set it.
    ///
    /// The clamps are applied in a fixed order: the smallest of the two
    /// fragmentation limits and the growth curve, then the drift supply
    /// limit as a ceiling, then the monomer value as a floor. Reordering
    /// changes the result where regimes cross.
    pub fn arbitrate(&self) -> (f64, GrowthRegime) {
        let mut st = self
            .turbulent_fragmentation
            .min(self.drift_fragmentation)
            .min(self.growth);

        let mut regime = if self.turbulent_fragmentation <= self.drift_fragmentation
            && self.turbulent_fragmentation <= self.growth
        {
            GrowthRegime::TurbulentFragmentation
        } else if self.drift_fragmentation <= self.growth {
            GrowthRegime::DriftFragmentation
        } else {
            GrowthRegime::Growth
        };

        if self.drift_limited < st {
            st = self.drift_limited;
            regime = GrowthRegime::DriftLimited;
        }

        if st < self.monomer {
            st = self.monomer;
            regime = GrowthRegime::Monomer;
        }

        (st, regime)
    }
}

/// Radial drift speed of a particle with Stokes number `st`.
///
/// v_r = 2 |η| Ω_K r St / (1 + St²)
///
/// Returned as a magnitude; the drift itself points inward.
pub fn drift_velocity(eta_abs: f64, orbital_frequency: f64, radius: f64, st: f64) -> f64 {
    2.0 * eta_abs * orbital_frequency * radius * st / (1.0 + st.powi(2))
}

//! Time integration of pebble growth and drift.
//!
//! Implements the two-population style predictor of Drążkowska et al.:
//! particles grow exponentially from monomers until fragmentation or
//! radial drift stops them, while the solids budget outside every radius
//! is drained by the flux through it.
//!
//! # Scheme
//!
//! Row 0 holds monomers and the full outward budget. Each later row is
//! built from the previous one with a forward-Euler step:
//!
//! ```text
//! M_out[t]  = M_out[t-1] - Ṁ[t-1] Δt
//! Z         = Z_0 M_out[t] / M_out[0]
//! St        = max(min(St_frag, St_df, St_0 e^{t/t_grow}, Z/|η|/30), St_0)
//! v         = min(2|η| Ω r St / (1 + St²), r / t_grow / 30)
//! Ṁ[t]      = 2π r v Σ_d M_out[t] / M_out[0]
//! ```
//!
//! Radii do not interact within a step, only through the previous row.

use ndarray::Array2;

use crate::constants::{GROWTH_DRIFT_RATIO, PI};
use crate::error::PebbleResult;
use crate::grid::mass_outside;
use crate::parameters::PebbleParameters;
use crate::prediction::PebblePrediction;
use crate::regime::{drift_velocity, GrowthRegime, StokesLimits};
use crate::structure::DiskStructure;

/// Predict the pebble Stokes number and flux for a disk.
///
/// Validates the parameters first; nothing is computed for invalid input.
///
/// # Example
/// ```
/// use pebble_predictor::{predict, PebbleParameters, PowerLawDisk};
/// use units::Time;
///
/// let times: Vec<f64> = (0..=10).map(|i| Time::from_years(i as f64 * 1e4).to_seconds()).collect();
/// let params = PebbleParameters::from_power_law(&PowerLawDisk::mmsn(), 40, times);
///
/// let prediction = predict(&params).unwrap();
/// assert_eq!(prediction.stokes.dim(), (11, 40));
/// assert!(prediction.is_finite());
/// ```
pub fn predict(params: &PebbleParameters) -> PebbleResult<PebblePrediction> {
    params.validate()?;

    log::debug!(
        "predicting pebble flux on {} radii x {} times",
        params.n_radii(),
        params.n_times()
    );

    let disk = DiskStructure::derive(params);
    let prediction = integrate(params, &disk);

    log::debug!(
        "pebble prediction done: {} cells drift-limited, {} fragmentation-limited",
        prediction.regime_count(GrowthRegime::DriftLimited),
        prediction.regime_count(GrowthRegime::TurbulentFragmentation)
            + prediction.regime_count(GrowthRegime::DriftFragmentation)
    );

    Ok(prediction)
}

/// Flat-argument form of [`predict`] returning `(stokes, flux)`.
///
/// # Arguments
/// * `rgrid` - Radial grid (cm)
/// * `tgrid` - Time grid (s)
/// * `mstar` - Stellar mass (g)
/// * `sigma_gas` - Initial gas surface density (g/cm²)
/// * `sigma_dust` - Initial solids surface density (g/cm²)
/// * `temperature` - Gas temperature (K)
/// * `alpha` - Turbulence strength
/// * `vfrag` - Fragmentation threshold velocity (cm/s)
/// * `rhop` - Grain bulk density (g/cm³)
#[allow(clippy::too_many_arguments)]
pub fn pebble_predictor(
    rgrid: &[f64],
    tgrid: &[f64],
    mstar: f64,
    sigma_gas: &[f64],
    sigma_dust: &[f64],
    temperature: &[f64],
    alpha: f64,
    vfrag: f64,
    rhop: f64,
) -> PebbleResult<(Array2<f64>, Array2<f64>)> {
    let params = PebbleParameters {
        rgrid: rgrid.to_vec(),
        tgrid: tgrid.to_vec(),
        mstar,
        sigma_gas: sigma_gas.to_vec(),
        sigma_dust: sigma_dust.to_vec(),
        temperature: temperature.to_vec(),
        alpha,
        vfrag,
        rhop,
    };

    predict(&params).map(PebblePrediction::into_fields)
}

/// Run the explicit time integration on validated parameters.
fn integrate(params: &PebbleParameters, disk: &DiskStructure) -> PebblePrediction {
    let n_t = params.n_times();
    let n_r = params.n_radii();
    let radii = &disk.radii;
    let sigma_dust = &params.sigma_dust;

    let mut stokes = Array2::<f64>::zeros((n_t, n_r));
    let mut flux = Array2::<f64>::zeros((n_t, n_r));
    let mut budget = Array2::<f64>::zeros((n_t, n_r));
    let mut regimes = Array2::from_elem((n_t, n_r), GrowthRegime::Monomer);
    let mut velocity_capped = Array2::from_elem((n_t, n_r), false);

    // Initial condition: monomers everywhere, full budget
    let initial_budget = mass_outside(radii, &disk.widths, sigma_dust);
    for ir in 0..n_r {
        let r = radii[ir];
        let st = disk.st_monomer[ir];
        let v = drift_velocity(disk.eta_abs(ir), disk.orbital_frequency[ir], r, st);

        budget[[0, ir]] = initial_budget[ir];
        stokes[[0, ir]] = st;
        flux[[0, ir]] = 2.0 * PI * r * v * sigma_dust[ir];
    }

    let mut overdrawn = false;

    for it in 1..n_t {
        let t = params.tgrid[it];
        let dt = t - params.tgrid[it - 1];

        for ir in 0..n_r {
            let r = radii[ir];
            let eta_abs = disk.eta_abs(ir);
            let t_grow = disk.growth_timescale[ir];
            let st_0 = disk.st_monomer[ir];

            let outside = budget[[it - 1, ir]] - flux[[it - 1, ir]] * dt;
            let remaining = outside / budget[[0, ir]];
            let z = disk.dust_to_gas[ir] * remaining;

            // Growth age is the absolute time, not the time since last row
            let limits = StokesLimits {
                turbulent_fragmentation: disk.st_fragmentation[ir],
                drift_fragmentation: disk.st_drift_fragmentation[ir],
                growth: st_0 * (t / t_grow).exp(),
                drift_limited: z / eta_abs / GROWTH_DRIFT_RATIO,
                monomer: st_0,
            };
            let (st, regime) = limits.arbitrate();

            let v_drift = drift_velocity(eta_abs, disk.orbital_frequency[ir], r, st);
            let v_cap = disk.growth_velocity_cap(ir);
            let v = v_drift.min(v_cap);

            if outside < 0.0 && !overdrawn {
                log::warn!(
                    "solids budget outside r = {:.3e} cm overdrawn at t = {:.3e} s; \
                     time step too coarse for the pebble flux",
                    r,
                    t
                );
                overdrawn = true;
            }

            budget[[it, ir]] = outside;
            stokes[[it, ir]] = st;
            regimes[[it, ir]] = regime;
            velocity_capped[[it, ir]] = v_cap < v_drift;
            flux[[it, ir]] = 2.0 * PI * r * v * sigma_dust[ir] * remaining;
        }

        log::trace!(
            "step {}/{}: t = {:.3e} s, min remaining fraction {:.3}",
            it,
            n_t - 1,
            t,
            (0..n_r)
                .map(|ir| budget[[it, ir]] / budget[[0, ir]])
                .fold(f64::INFINITY, f64::min)
        );
    }

    PebblePrediction {
        times: params.tgrid.clone(),
        radii: radii.clone(),
        stokes,
        flux,
        mass_outside: budget,
        regimes,
        velocity_capped,
    }
}

//! Pebble prediction bindings.

use wasm_bindgen::prelude::*;

use pebble_predictor::{
    linear_grid, predict, DiskStructure, GrowthRegime, PebbleParameters, PebblePrediction,
    PowerLawDisk,
};
use units::{Length, Time};

use crate::{from_js, to_js};

/// The minimum-mass-solar-nebula-like power-law disk.
#[wasm_bindgen]
pub fn mmsn_pebble_disk() -> Result<JsValue, JsError> {
    to_js(&PowerLawDisk::mmsn())
}

/// Sample a power-law disk into predictor parameters.
///
/// # Arguments
/// * `disk` - A PowerLawDisk object (CGS values)
/// * `n_radii` - Number of log-spaced radial points
/// * `t_max_years` - Last time of the grid in years
/// * `n_times` - Number of evenly spaced times, starting at zero
#[wasm_bindgen]
pub fn pebble_disk_power_law(
    disk: JsValue,
    n_radii: usize,
    t_max_years: f64,
    n_times: usize,
) -> Result<JsValue, JsError> {
    let disk: PowerLawDisk = from_js(disk)?;
    let times = linear_grid(0.0, Time::from_years(t_max_years).to_seconds(), n_times);
    to_js(&PebbleParameters::from_power_law(&disk, n_radii, times))
}

/// Run the pebble predictor.
///
/// # Arguments
/// * `params` - A PebbleParameters object (CGS values)
///
/// # Returns
/// Object with radiiAu, timesYears and `[time][radius]` nested arrays for
/// stokes, flux, remaining fraction and regime.
#[wasm_bindgen]
pub fn predict_pebbles(params: JsValue) -> Result<JsValue, JsError> {
    let params: PebbleParameters = from_js(params)?;
    let prediction = predict(&params)?;
    to_js(&PebbleOutput::from_prediction(&prediction))
}

/// Static disk structure derived from the parameters.
///
/// Returns the sound speed, orbital frequency, gas density, pressure, η,
/// the Stokes number limits and growth timescale per radius, all in CGS.
#[wasm_bindgen]
pub fn disk_structure(params: JsValue) -> Result<JsValue, JsError> {
    let params: PebbleParameters = from_js(params)?;
    to_js(&DiskStructure::new(&params)?)
}

/// Prediction reshaped for JavaScript consumers.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PebbleOutput {
    radii_au: Vec<f64>,
    times_years: Vec<f64>,
    stokes: Vec<Vec<f64>>,
    flux_earth_masses_per_myr: Vec<Vec<f64>>,
    remaining_fraction: Vec<Vec<f64>>,
    regimes: Vec<Vec<GrowthRegime>>,
}

impl PebbleOutput {
    fn from_prediction(prediction: &PebblePrediction) -> Self {
        let rows = |f: &dyn Fn(usize, usize) -> f64| -> Vec<Vec<f64>> {
            (0..prediction.n_times())
                .map(|it| (0..prediction.n_radii()).map(|ir| f(it, ir)).collect())
                .collect()
        };

        Self {
            radii_au: prediction
                .radii
                .iter()
                .map(|&r| Length::from_cm(r).to_au())
                .collect(),
            times_years: (0..prediction.n_times())
                .map(|it| prediction.time(it).to_years())
                .collect(),
            stokes: rows(&|it, ir| prediction.stokes_at(it, ir)),
            flux_earth_masses_per_myr: rows(&|it, ir| {
                prediction.flux_at(it, ir).to_earth_masses_per_myr()
            }),
            remaining_fraction: rows(&|it, ir| prediction.remaining_fraction(it, ir)),
            regimes: prediction.regimes.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

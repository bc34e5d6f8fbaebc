//! Radial and temporal grid helpers.
//!
//! The pebble model works on cell-centred radii. Pressure gradients need
//! values at the cell interfaces, and the outward mass budget needs the
//! cell widths, so both are reconstructed from the centres here.

use crate::constants::PI;

/// Generate a logarithmically spaced grid.
///
/// Returns `[min]` for a single point.
pub fn log_spaced_grid(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![min; n];
    }

    let log_min = min.ln();
    let log_max = max.ln();

    (0..n)
        .map(|i| {
            let frac = i as f64 / (n - 1) as f64;
            (log_min + frac * (log_max - log_min)).exp()
        })
        .collect()
}

/// Generate an evenly spaced grid including both end points.
pub fn linear_grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start; n];
    }

    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Cell interfaces around the given cell centres.
///
/// Interior interfaces sit halfway between neighbouring centres. The two
/// boundary interfaces are extrapolated linearly:
/// ```text
/// r_int[0] = 1.5 r[0]   - 0.5 r[1]
/// r_int[N] = 1.5 r[N-1] - 0.5 r[N-2]
/// ```
///
/// # Panics
/// Panics if `radii` holds fewer than two centres.
pub fn cell_interfaces(radii: &[f64]) -> Vec<f64> {
    let n = radii.len();
    assert!(n >= 2, "need at least 2 cell centres, got {n}");

    let mut interfaces = Vec::with_capacity(n + 1);
    interfaces.push(1.5 * radii[0] - 0.5 * radii[1]);
    interfaces.extend(radii.windows(2).map(|pair| 0.5 * (pair[1] + pair[0])));
    interfaces.push(1.5 * radii[n - 1] - 0.5 * radii[n - 2]);
    interfaces
}

/// Widths of the cells bounded by consecutive interfaces.
pub fn cell_widths(interfaces: &[f64]) -> Vec<f64> {
    interfaces.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Piecewise-linear interpolation of `values` (given at `nodes`) onto `points`.
///
/// Points outside the node range take the nearest edge value. `nodes` must
/// be increasing.
///
/// # Panics
/// Panics if `nodes` is empty or `values` is shorter than `nodes`.
pub fn interp_clamped(points: &[f64], nodes: &[f64], values: &[f64]) -> Vec<f64> {
    assert!(!nodes.is_empty(), "cannot interpolate on an empty node set");
    let last = nodes.len() - 1;

    points
        .iter()
        .map(|&x| {
            if x <= nodes[0] {
                values[0]
            } else if x >= nodes[last] {
                values[last]
            } else {
                // First node strictly to the right of x; x lies in [lo, hi)
                let hi = nodes.partition_point(|&node| node <= x);
                let lo = hi - 1;
                let slope = (values[hi] - values[lo]) / (nodes[hi] - nodes[lo]);
                slope * (x - nodes[lo]) + values[lo]
            }
        })
        .collect()
}

/// Solid mass residing in each cell and every cell outside it.
///
/// M_out(r_i) = Σ_{k ≥ i} 2π r_k Δr_k Σ_d(r_k)
pub fn mass_outside(radii: &[f64], widths: &[f64], sigma_dust: &[f64]) -> Vec<f64> {
    let n = radii.len();
    let mut outside = vec![0.0; n];
    let mut total = 0.0;

    for i in (0..n).rev() {
        total += 2.0 * PI * radii[i] * widths[i] * sigma_dust[i];
        outside[i] = total;
    }

    outside
}

//! Tests for the static disk structure.

use approx::assert_relative_eq;
use units::{Length, Mass};

use crate::constants::{AU, K_B, MONOMER_SIZE, MU, M_PROTON, PI};
use crate::error::PebbleError;
use crate::parameters::{PebbleParameters, PowerLawDisk};
use crate::structure::DiskStructure;

/// Flat 200 K disk with Σ_g = 100, Σ_d = 1 around a solar-mass star.
fn flat_disk(alpha: f64, vfrag: f64) -> PebbleParameters {
    let n = 5;
    let rgrid: Vec<f64> = (0..n)
        .map(|i| AU * 10f64.powf(2.0 * i as f64 / (n - 1) as f64))
        .collect();

    PebbleParameters {
        rgrid,
        tgrid: vec![0.0],
        mstar: Mass::from_solar_masses(1.0).to_grams(),
        sigma_gas: vec![100.0; n],
        sigma_dust: vec![1.0; n],
        temperature: vec![200.0; n],
        alpha,
        vfrag,
        rhop: 1.6,
    }
}

#[test]
fn sound_speed_at_200_kelvin() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    // c_s ≈ 0.85 km/s for μ = 2.3 at 200 K
    assert_relative_eq!(disk.sound_speed[0], 84_721.5, max_relative = 1e-5);
    assert_relative_eq!(
        disk.sound_speed_at(3).to_cm_per_sec(),
        (K_B * 200.0 / (MU * M_PROTON)).sqrt(),
        max_relative = 1e-14
    );
}

#[test]
fn keplerian_year_at_one_au() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    let omega = disk.orbital_frequency_at(0);
    assert_relative_eq!(omega.to_rad_per_sec(), 1.99098e-7, max_relative = 1e-5);

    let period = omega.period_seconds();
    assert_relative_eq!(period / units::SECONDS_PER_YEAR, 1.0, max_relative = 1e-4);
    assert_relative_eq!(
        disk.keplerian_velocity_at(0).to_cm_per_sec(),
        2.978e6,
        max_relative = 1e-3
    );
}

#[test]
fn midplane_density_and_pressure() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    for i in 0..disk.n_radii() {
        let h = disk.sound_speed[i] / disk.orbital_frequency[i];
        assert_relative_eq!(
            disk.gas_density_at(i).to_grams_per_cm3(),
            100.0 / ((2.0 * PI).sqrt() * h),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            disk.pressure_at(i).to_dyn_per_cm2(),
            disk.gas_density[i] * disk.sound_speed[i].powi(2),
            max_relative = 1e-14
        );
    }
}

#[test]
fn interfaces_and_widths_have_expected_shape() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    assert_eq!(disk.interfaces.len(), disk.n_radii() + 1);
    assert_eq!(disk.interface_pressure.len(), disk.n_radii() + 1);
    assert_eq!(disk.widths.len(), disk.n_radii());
    assert_relative_eq!(
        disk.interfaces[0],
        1.5 * disk.radii[0] - 0.5 * disk.radii[1],
        max_relative = 1e-14
    );

    // Interfaces beyond the grid take the edge pressure
    assert_eq!(disk.interface_pressure[0], disk.pressure[0]);
    assert_eq!(disk.interface_pressure[5], disk.pressure[4]);
}

#[test]
fn turbulent_fragmentation_scales_as_vfrag_squared_over_alpha() {
    let base = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();
    let other = DiskStructure::new(&flat_disk(4e-3, 3000.0)).unwrap();

    // (3000/1000)² / (4e-3/1e-3) = 9/4
    for i in 0..base.n_radii() {
        assert_relative_eq!(
            other.st_fragmentation[i] / base.st_fragmentation[i],
            9.0 / 4.0,
            max_relative = 1e-12
        );
    }
}

#[test]
fn drift_fragmentation_is_linear_in_vfrag() {
    let base = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();
    let faster = DiskStructure::new(&flat_disk(1e-3, 2500.0)).unwrap();

    for i in 0..base.n_radii() {
        assert_relative_eq!(
            faster.st_drift_fragmentation[i] / base.st_drift_fragmentation[i],
            2.5,
            max_relative = 1e-12
        );
    }
}

#[test]
fn monomer_stokes_number() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    // St_0 = (π/2) a_0 ρ_p / Σ_g ≈ 2.5e-6
    for &st in &disk.st_monomer {
        assert_relative_eq!(st, 0.5 * PI * MONOMER_SIZE * 1.6 / 100.0, max_relative = 1e-14);
        assert!(st > 0.0);
    }
}

#[test]
fn growth_timescale_at_one_au() {
    let disk = DiskStructure::new(&flat_disk(1e-4, 1000.0)).unwrap();

    // With α = 1e-4 and r = 1 AU both scaling factors are unity: t = 1 / (Z_0 Ω)
    assert_relative_eq!(
        disk.growth_timescale_at(0).to_seconds(),
        1.0 / (0.01 * disk.orbital_frequency[0]),
        max_relative = 1e-12
    );
    assert!(disk.growth_timescale.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn eta_matches_power_law_in_the_interior() {
    let params = PebbleParameters::from_power_law(&PowerLawDisk::mmsn(), 200, vec![0.0]);
    let disk = DiskStructure::new(&params).unwrap();

    // η = (h/r)² × (1/2) × d ln P / d ln r with d ln P / d ln r = -(1 + 3.5/2)
    for i in [1, 50, 100, 198] {
        let analytic = disk.aspect_ratio_at(i).powi(2) * 0.5 * -2.75;
        assert_relative_eq!(disk.eta[i], analytic, max_relative = 5e-3);
    }

    // Clamped edge interfaces halve the gradient in the outermost cells
    assert!(disk.eta_abs(0) < 0.6 * disk.eta_abs(1));
    assert!(disk.eta_abs(199) < 0.6 * disk.eta_abs(198));
}

#[test]
fn pressure_falls_outward_so_eta_is_negative() {
    let params = PebbleParameters::from_power_law(&PowerLawDisk::mmsn(), 50, vec![0.0]);
    let disk = DiskStructure::new(&params).unwrap();

    assert!(disk.eta.iter().all(|&eta| eta < 0.0));
    assert!(disk.radius(0) < Length::from_au(0.11));
}

#[test]
fn drift_velocity_and_cap() {
    let disk = DiskStructure::new(&flat_disk(1e-3, 1000.0)).unwrap();

    let peak = disk.drift_velocity_at(2, 1.0).to_cm_per_sec();
    assert_relative_eq!(
        peak,
        disk.eta_abs(2) * disk.orbital_frequency[2] * disk.radii[2],
        max_relative = 1e-14
    );
    assert_relative_eq!(
        disk.growth_velocity_cap(2),
        disk.radii[2] / disk.growth_timescale[2] / 30.0,
        max_relative = 1e-14
    );
}

#[test]
fn new_rejects_invalid_parameters() {
    let mut params = flat_disk(1e-3, 1000.0);
    params.temperature[2] = -10.0;

    assert_eq!(
        DiskStructure::new(&params),
        Err(PebbleError::NonPositive {
            name: "temperature",
            index: 2,
            value: -10.0
        })
    );
}

use approx::assert_relative_eq;
use units::{Length, Mass};

use crate::error::PebbleError;
use crate::parameters::{PebbleParameters, PowerLawDisk};

fn valid() -> PebbleParameters {
    PebbleParameters {
        rgrid: vec![1.0e13, 2.0e13, 4.0e13],
        tgrid: vec![0.0, 1.0e10, 2.0e10],
        mstar: 2.0e33,
        sigma_gas: vec![100.0, 50.0, 25.0],
        sigma_dust: vec![1.0, 0.5, 0.25],
        temperature: vec![300.0, 200.0, 150.0],
        alpha: 1e-3,
        vfrag: 1000.0,
        rhop: 1.6,
    }
}

#[test]
fn valid_parameters_pass() {
    assert_eq!(valid().validate(), Ok(()));
}

#[test]
fn single_time_is_enough() {
    let mut params = valid();
    params.tgrid = vec![0.0];
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn empty_grids_are_rejected() {
    let mut params = valid();
    params.rgrid.clear();
    assert_eq!(
        params.validate(),
        Err(PebbleError::EmptyGrid { name: "rgrid" })
    );

    let mut params = valid();
    params.tgrid.clear();
    assert_eq!(
        params.validate(),
        Err(PebbleError::EmptyGrid { name: "tgrid" })
    );
}

#[test]
fn single_radius_is_rejected() {
    let mut params = valid();
    params.rgrid = vec![1.0e13];
    params.sigma_gas.truncate(1);
    params.sigma_dust.truncate(1);
    params.temperature.truncate(1);

    assert_eq!(
        params.validate(),
        Err(PebbleError::GridTooShort {
            name: "rgrid",
            len: 1,
            min: 2
        })
    );
}

#[test]
fn mismatched_profile_is_rejected() {
    let mut params = valid();
    params.sigma_dust.push(0.1);

    assert_eq!(
        params.validate(),
        Err(PebbleError::LengthMismatch {
            name: "sigmaDust",
            expected: 3,
            actual: 4
        })
    );
}

#[test]
fn unsorted_radii_are_rejected() {
    let mut params = valid();
    params.rgrid = vec![1.0e13, 4.0e13, 2.0e13];

    assert_eq!(
        params.validate(),
        Err(PebbleError::NotIncreasing {
            name: "rgrid",
            index: 2
        })
    );
}

#[test]
fn repeated_time_is_rejected() {
    let mut params = valid();
    params.tgrid = vec![0.0, 1.0e10, 1.0e10];

    assert_eq!(
        params.validate(),
        Err(PebbleError::NotIncreasing {
            name: "tgrid",
            index: 2
        })
    );
}

#[test]
fn negative_time_is_rejected() {
    let mut params = valid();
    params.tgrid = vec![-1.0, 0.0, 1.0];

    assert_eq!(
        params.validate(),
        Err(PebbleError::NegativeTime {
            index: 0,
            value: -1.0
        })
    );
}

#[test]
fn non_positive_profiles_are_rejected() {
    let mut params = valid();
    params.temperature[1] = 0.0;
    assert_eq!(
        params.validate(),
        Err(PebbleError::NonPositive {
            name: "temperature",
            index: 1,
            value: 0.0
        })
    );

    let mut params = valid();
    params.alpha = -1e-3;
    assert_eq!(
        params.validate(),
        Err(PebbleError::NonPositive {
            name: "alpha",
            index: 0,
            value: -1e-3
        })
    );
}

#[test]
fn nan_is_rejected_before_positivity() {
    let mut params = valid();
    params.sigma_gas[2] = f64::NAN;

    assert_eq!(
        params.validate(),
        Err(PebbleError::NonFinite {
            name: "sigmaGas",
            index: 2
        })
    );
}

#[test]
fn error_messages_name_the_input() {
    let err = PebbleError::NonPositive {
        name: "rhop",
        index: 0,
        value: 0.0,
    };
    assert_eq!(err.to_string(), "rhop[0] must be positive, got 0");
}

#[test]
fn power_law_sampling() {
    let disk = PowerLawDisk::mmsn();
    let params = PebbleParameters::from_power_law(&disk, 50, vec![0.0, 1.0e10]);

    assert_eq!(params.n_radii(), 50);
    assert_eq!(params.n_times(), 2);
    assert_eq!(params.validate(), Ok(()));

    assert_relative_eq!(params.radius(0).to_au(), 0.1, max_relative = 1e-10);
    assert_relative_eq!(params.radius(49).to_au(), 300.0, max_relative = 1e-10);
    assert_relative_eq!(
        params.stellar_mass().to_solar_masses(),
        Mass::from_solar_masses(1.0).to_solar_masses()
    );

    for i in 0..params.n_radii() {
        assert_relative_eq!(
            params.sigma_dust[i] / params.sigma_gas[i],
            0.01,
            max_relative = 1e-12
        );
    }
}

#[test]
fn power_law_profiles_at_reference_radius() {
    let disk = PowerLawDisk::mmsn();
    let r = Length::from_au(1.0);

    assert_relative_eq!(disk.gas_surface_density(r).to_grams_per_cm2(), 1700.0, max_relative = 1e-12);
    assert_relative_eq!(disk.temperature(r).to_kelvin(), 280.0, max_relative = 1e-12);

    let r4 = Length::from_au(4.0);
    assert_relative_eq!(disk.gas_surface_density(r4).to_grams_per_cm2(), 425.0, max_relative = 1e-12);
    assert_relative_eq!(disk.temperature(r4).to_kelvin(), 140.0, max_relative = 1e-12);
}

#[test]
fn typed_accessors() {
    let params = valid();

    assert_eq!(params.radius(1), Length::from_cm(2.0e13));
    assert_eq!(params.time(2).to_seconds(), 2.0e10);
    assert_relative_eq!(params.fragmentation_velocity().to_m_per_sec(), 10.0);
    assert_eq!(params.grain_density().to_grams_per_cm3(), 1.6);
    assert_eq!(params.stellar_mass(), Mass::from_grams(2.0e33));
}

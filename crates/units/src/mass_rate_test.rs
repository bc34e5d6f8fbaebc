use approx::assert_relative_eq;

use crate::mass::Mass;
use crate::mass_rate::MassRate;
use crate::time::Time;

#[test]
fn earth_masses_per_myr_in_cgs() {
    // 1 M⊕/Myr ≈ 1.89e14 g/s
    let rate = MassRate::from_earth_masses_per_myr(1.0);
    assert_relative_eq!(rate.to_grams_per_sec(), 1.8925e14, max_relative = 1e-3);
    assert_relative_eq!(rate.to_earth_masses_per_myr(), 1.0, max_relative = 1e-14);
}

#[test]
fn solar_masses_per_year_round_trip() {
    let rate = MassRate::from_solar_masses_per_year(1e-8);
    assert_relative_eq!(rate.to_solar_masses_per_year(), 1e-8, max_relative = 1e-14);
}

#[test]
fn integrate_over_time() {
    let flux = MassRate::from_grams_per_sec(2.0e15);
    let mass = flux.integrate(Time::from_seconds(1.0e10));
    assert_relative_eq!(mass.to_grams(), 2.0e25, max_relative = 1e-14);

    let pebbles = MassRate::from_earth_masses_per_myr(60.0).integrate(Time::from_myr(0.5));
    assert_relative_eq!(pebbles / Mass::from_earth_masses(30.0), 1.0, max_relative = 1e-12);
}

#[test]
fn arithmetic() {
    let a = MassRate::from_grams_per_sec(3.0);
    let b = MassRate::from_grams_per_sec(1.0);
    assert_eq!((a + b).to_grams_per_sec(), 4.0);
    assert_eq!((a - b).to_grams_per_sec(), 2.0);
    assert_eq!((a * 2.0).to_grams_per_sec(), 6.0);
    assert_eq!((a / 3.0).to_grams_per_sec(), 1.0);
    assert_eq!(MassRate::zero().to_grams_per_sec(), 0.0);
}

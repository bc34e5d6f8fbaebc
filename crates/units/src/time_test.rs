use approx::assert_relative_eq;

use crate::time::{Time, SECONDS_PER_YEAR};

#[test]
fn year_is_julian() {
    assert_relative_eq!(Time::from_years(1.0).to_seconds(), 365.25 * 86_400.0);
    assert_relative_eq!(SECONDS_PER_YEAR, 3.15576e7);
}

#[test]
fn myr_round_trip() {
    let t = Time::from_myr(3.0);
    assert_relative_eq!(t.to_years(), 3.0e6, max_relative = 1e-14);
    assert_relative_eq!(t.to_myr(), 3.0, max_relative = 1e-14);
}

#[test]
fn step_ratio() {
    let dt = Time::from_years(1.0e4) - Time::from_years(0.0);
    let total = Time::from_years(1.0e5);
    assert_relative_eq!(total / dt, 10.0, max_relative = 1e-12);
}

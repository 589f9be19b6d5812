//! Apparent solar ecliptic longitude and the equation of time.
//!
//! Low-order truncated series after Meeus, "Astronomical Algorithms": mean
//! longitude, mean anomaly, equation of center, and a single nutation term.
//! This is approximate astronomy, good to a few arc-seconds over the years
//! this engine cares about, but the coefficients must stay exactly as given:
//! the month and year pillar boundaries are bisections over this function,
//! and historical reference charts pin its output.

use crate::julian::{jd_to_centuries, unix_to_jd};

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(d: f64) -> f64 {
    d.rem_euclid(360.0)
}

/// Solar geometric mean longitude, degrees.
fn mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t)
}

/// Solar mean anomaly, degrees.
fn mean_anomaly(t: f64) -> f64 {
    normalize_degrees(357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t)
}

/// Eccentricity of Earth's orbit.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Apparent solar ecliptic longitude in degrees [0, 360) at a Unix time.
/// 0 degrees = March equinox.
pub fn solar_longitude(unix_seconds: f64) -> f64 {
    let t = jd_to_centuries(unix_to_jd(unix_seconds));

    let l0 = mean_longitude(t);
    let m = mean_anomaly(t).to_radians();

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = l0 + c;

    // Nutation and aberration correction.
    let omega = (125.04 - 1_934.136 * t).to_radians();
    let lambda = true_longitude - 0.005_69 - 0.004_78 * omega.sin();

    normalize_degrees(lambda)
}

/// Equation of time in minutes at a Unix time: apparent minus mean solar
/// time. Positive when the sundial runs ahead of the clock.
pub fn equation_of_time_minutes(unix_seconds: f64) -> f64 {
    let t = jd_to_centuries(unix_to_jd(unix_seconds));

    let l0 = mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = eccentricity(t);

    // y = tan^2(obliquity / 2), obliquity fixed at the J2000 mean value.
    let epsilon = 23.439_291_1_f64;
    let y = (epsilon / 2.0).to_radians().tan().powi(2);

    let e_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    // Degrees to minutes of time: one degree is four minutes.
    e_rad.to_degrees() * 4.0
}

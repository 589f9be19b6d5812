//! Locating Jie boundaries: the solar terms that open sexagenary months.
//!
//! The twelve Jie sit at longitudes congruent to 15 degrees modulo 30,
//! measured from the 315-degree epoch (Li Chun, the start of spring). A
//! boundary is found by bisecting the solar-longitude function over a
//! 40-day window; 30 iterations pin the crossing to well under a second.

use crate::solar::{normalize_degrees, solar_longitude};

const WINDOW_SECONDS: f64 = 40.0 * 86_400.0;
const BISECTION_ITERATIONS: u32 = 30;

/// The Unix time of the nearest Jie at or before `unix_seconds`.
pub fn previous_jie(unix_seconds: f64) -> f64 {
    let current = solar_longitude(unix_seconds);
    // Measure from the 315-degree epoch; Jie then sit at multiples of 30.
    let offset = normalize_degrees(current - 315.0);
    let target_offset = (offset / 30.0).floor() * 30.0;
    let target = normalize_degrees(target_offset + 315.0);
    bisect(target, unix_seconds - WINDOW_SECONDS, unix_seconds)
}

/// The Unix time of the nearest Jie strictly after `unix_seconds`.
pub fn next_jie(unix_seconds: f64) -> f64 {
    let current = solar_longitude(unix_seconds);
    let offset = normalize_degrees(current - 315.0);
    let target_offset = ((offset / 30.0).floor() + 1.0) * 30.0;
    let target = normalize_degrees(target_offset + 315.0);
    bisect(target, unix_seconds, unix_seconds + WINDOW_SECONDS)
}

/// Bisect for the time where the solar longitude crosses `target` degrees.
/// The window is guaranteed to bracket exactly one crossing because the
/// longitude advances monotonically by roughly a degree per day.
fn bisect(target: f64, mut low: f64, mut high: f64) -> f64 {
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        let lon = solar_longitude(mid);
        // Signed angular distance folded into (-180, 180].
        let mut delta = lon - target;
        if delta > 180.0 {
            delta -= 360.0;
        }
        if delta < -180.0 {
            delta += 360.0;
        }
        if delta > 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }
    (low + high) / 2.0
}

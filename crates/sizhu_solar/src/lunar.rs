//! Lunar phase estimation from the moon's mean elongation.
//!
//! Mean-element series only: elongation grows by one synodic month per
//! 29.53 days, so the phase angle alone gives lunar age and an illuminated
//! fraction. Good to about half a day, which is all the reporting layer
//! needs.

use crate::julian::{jd_to_centuries, unix_to_jd};
use crate::solar::normalize_degrees;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Moon state at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhase {
    /// Days since the last new moon, [0, 29.53).
    pub age: f64,
    /// Illuminated fraction of the disk, [0, 1].
    pub illumination: f64,
}

impl LunarPhase {
    /// Coarse English phase name from the age.
    pub fn phase_name(&self) -> &'static str {
        match self.age {
            a if a < 1.0 => "New Moon",
            a if a < 6.5 => "Waxing Crescent",
            a if a < 8.5 => "First Quarter",
            a if a < 13.5 => "Waxing Gibbous",
            a if a < 15.5 => "Full Moon",
            a if a < 21.5 => "Waning Gibbous",
            a if a < 23.5 => "Last Quarter",
            a if a < 28.5 => "Waning Crescent",
            _ => "New Moon",
        }
    }
}

/// Lunar phase at a Unix time.
pub fn lunar_phase(unix_seconds: f64) -> LunarPhase {
    let t = jd_to_centuries(unix_to_jd(unix_seconds));

    // Mean elongation of the moon from the sun: 0 = new moon, 180 = full.
    let d = normalize_degrees(297.850_192_1 + 445_267.111_403_4 * t);

    let age = (d / 360.0) * SYNODIC_MONTH;
    let illumination = (1.0 - d.to_radians().cos()) / 2.0;

    LunarPhase { age, illumination }
}

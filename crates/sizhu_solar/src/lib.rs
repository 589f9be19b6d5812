//! Approximate solar and lunar astronomy for the Four Pillars engine.
//!
//! Everything here is a pure function of a Unix timestamp: apparent solar
//! ecliptic longitude, the equation of time, Jie (solar term) boundary
//! searches, and lunar phase. No ephemeris files — low-order Meeus series
//! whose coefficients are pinned by the reference charts in the chart
//! crate's tests.

pub mod jie;
pub mod julian;
pub mod lunar;
pub mod solar;

pub use jie::{next_jie, previous_jie};
pub use julian::{SECONDS_PER_DAY, jd_to_unix, unix_to_jd};
pub use lunar::{LunarPhase, SYNODIC_MONTH, lunar_phase};
pub use solar::{equation_of_time_minutes, normalize_degrees, solar_longitude};

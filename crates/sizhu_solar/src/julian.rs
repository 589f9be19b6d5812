//! Julian Date conversion and the J2000 time argument.

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// JD of the J2000.0 epoch.
pub const JD_J2000: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert Unix seconds to Julian Date.
pub fn unix_to_jd(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + JD_UNIX_EPOCH
}

/// Convert Julian Date to Unix seconds.
pub fn jd_to_unix(jd: f64) -> f64 {
    (jd - JD_UNIX_EPOCH) * SECONDS_PER_DAY
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - JD_J2000) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_jd() {
        assert!((unix_to_jd(0.0) - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn jd_round_trip() {
        for unix in [0.0, 946_684_800.0, 1_700_000_000.0, -86_400.0] {
            assert!((jd_to_unix(unix_to_jd(unix)) - unix).abs() < 1e-6);
        }
    }

    #[test]
    fn j2000_centuries_zero() {
        assert!(jd_to_centuries(JD_J2000).abs() < 1e-12);
    }

    #[test]
    fn one_century_after_j2000() {
        assert!((jd_to_centuries(JD_J2000 + 36_525.0) - 1.0).abs() < 1e-12);
    }
}

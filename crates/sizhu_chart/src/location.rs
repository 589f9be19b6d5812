//! True solar time correction.
//!
//! Civil clocks run on zone meridians; the hour pillar cares about the sun's
//! actual position over the birthplace. The correction is four minutes per
//! degree of longitude away from the zone meridian, plus the equation of
//! time at that instant.

use chrono::{DateTime, Duration, FixedOffset};
use sizhu_solar::equation_of_time_minutes;

/// A birthplace, reduced to what the hour pillar needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// The civil clock's UTC offset in hours, east positive.
    pub utc_offset_hours: f64,
}

impl Location {
    pub const fn new(longitude: f64, utc_offset_hours: f64) -> Self {
        Self { longitude, utc_offset_hours }
    }

    /// Total correction in minutes from civil clock time to true solar time
    /// at the given instant.
    pub fn solar_correction_minutes(&self, when: DateTime<FixedOffset>) -> f64 {
        let meridian = 15.0 * self.utc_offset_hours;
        let longitude_minutes = 4.0 * (self.longitude - meridian);
        longitude_minutes + equation_of_time_minutes(when.timestamp() as f64)
    }

    /// Shift a civil timestamp to true solar time. The returned value keeps
    /// the original UTC offset so calendar fields read out in local terms.
    pub fn true_solar_time(&self, when: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let correction = self.solar_correction_minutes(when);
        when + Duration::seconds((correction * 60.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zone_meridian_correction_is_equation_of_time_only() {
        // 120°E is exactly the UTC+8 meridian.
        let loc = Location::new(120.0, 8.0);
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let correction = loc.solar_correction_minutes(when);
        assert!(correction.abs() < 17.5, "correction {correction}");
    }

    #[test]
    fn urumqi_runs_far_behind_its_zone_clock() {
        // Urumqi (87.6°E) keeps Beijing time; the sun lags the clock by
        // roughly two hours.
        let loc = Location::new(87.6, 8.0);
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let correction = loc.solar_correction_minutes(when);
        assert!(
            (-145.0..=-115.0).contains(&correction),
            "correction {correction}"
        );
    }

    #[test]
    fn eastward_longitude_moves_clock_forward() {
        let loc = Location::new(135.0, 8.0);
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let when = tz.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let shifted = loc.true_solar_time(when);
        assert!(shifted > when, "{shifted} vs {when}");
    }
}

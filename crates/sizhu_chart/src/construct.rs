//! Chart construction from a civil timestamp.
//!
//! The calendar here is purely solar. The year turns at Li Chun (solar
//! longitude 315°), months turn at each subsequent Jie boundary every 30°,
//! days turn at local midnight, and hours follow the twelve double-hours
//! with the 23:00–24:00 half-Zi counted against the next day's stem.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use sizhu_core::{Branch, Stem, StemBranch};
use sizhu_solar::{normalize_degrees, solar_longitude};

use crate::location::Location;
use crate::pillars::FourPillars;

/// 2000-01-01 is day 54 (Wu-Wu) of the sexagenary day count.
const DAY_EPOCH_INDEX: i64 = 54;

/// Solar longitude at Li Chun, the start of the solar year.
const LI_CHUN_DEGREES: f64 = 315.0;

/// Build a chart from civil time, without any solar-time correction.
pub fn chart_from_civil(when: DateTime<FixedOffset>) -> FourPillars {
    build(when)
}

/// Build a chart from civil time at a location, correcting the timestamp to
/// true solar time before any pillar is derived.
pub fn chart_from_civil_at(when: DateTime<FixedOffset>, location: Location) -> FourPillars {
    build(location.true_solar_time(when))
}

fn build(when: DateTime<FixedOffset>) -> FourPillars {
    let longitude = solar_longitude(when.timestamp() as f64);

    let year = year_pillar(when, longitude);
    let month = month_pillar(year.stem, longitude);
    let day = day_pillar(when);
    let hour = hour_pillar(day.stem, when.hour());

    FourPillars::new(year, month, day, hour)
}

/// Year pillar. January and February before Li Chun still belong to the
/// previous solar year.
fn year_pillar(when: DateTime<FixedOffset>, longitude: f64) -> StemBranch {
    let mut year = i64::from(when.year());
    if when.month() < 3 && longitude < LI_CHUN_DEGREES {
        year -= 1;
    }
    // 1984 (Jia-Zi) anchors the cycle, so index = year - 4 mod 60.
    StemBranch::from_index(year - 4)
}

/// Month pillar from the solar longitude alone. Each Jie month spans 30°
/// starting at Li Chun; the first month carries the Yin branch. The stem
/// follows the five-tigers rule keyed on the year stem.
fn month_pillar(year_stem: Stem, longitude: f64) -> StemBranch {
    let months_since_li_chun = (normalize_degrees(longitude - LI_CHUN_DEGREES) / 30.0) as i64;
    let branch = Branch::from_index(months_since_li_chun + 2);

    let first_month_stem = i64::from(year_stem.index() % 5) * 2 + 2;
    let stem = Stem::from_index(first_month_stem + months_since_li_chun);

    StemBranch::new(stem, branch)
}

/// Day pillar by calendar-day count from the 2000-01-01 anchor, in the
/// chart's local date.
fn day_pillar(when: DateTime<FixedOffset>) -> StemBranch {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let days = when.date_naive().signed_duration_since(epoch).num_days();
    StemBranch::from_index(DAY_EPOCH_INDEX + days)
}

/// Hour pillar. Branches cover two civil hours each, centred so that Zi runs
/// 23:00–01:00. The stem follows the five-rats rule keyed on the day stem,
/// with 23:00 onward already counted against the next day's stem.
fn hour_pillar(day_stem: Stem, hour: u32) -> StemBranch {
    let branch = Branch::from_index(i64::from(hour + 1) / 2);

    let effective_day_stem = if hour >= 23 { day_stem.next(1) } else { day_stem };
    let stem = Stem::from_index(
        i64::from(effective_day_stem.index() % 5) * 2 + i64::from(branch.index()),
    );

    StemBranch::new(stem, branch)
}

//! Major luck cycles: ten-year periods stepping away from the month pillar.
//!
//! Direction depends on gender and the year stem's polarity; the starting
//! age is the distance to the nearest Jie boundary at three days per year.

use chrono::{DateTime, Datelike, FixedOffset};
use sizhu_chart::FourPillars;
use sizhu_core::{Polarity, StemBranch};
use sizhu_solar::{next_jie, previous_jie};

/// Days of Jie distance per year of starting age.
const DAYS_PER_YEAR_OF_AGE: f64 = 3.0;

/// Number of cycles reported.
const CYCLE_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorCycle {
    pub pillar: StemBranch,
    /// Age at which the cycle takes effect, in fractional years.
    pub start_age: f64,
    /// First calendar year of the cycle.
    pub start_year: i32,
    /// Last calendar year of the cycle.
    pub end_year: i32,
}

/// Whether the cycles run forward through the sexagenary order.
pub fn runs_forward(chart: &FourPillars, gender: Gender) -> bool {
    let yang_year = chart.year.stem.polarity() == Polarity::Yang;
    match gender {
        Gender::Male => yang_year,
        Gender::Female => !yang_year,
    }
}

/// The ten major cycles for a birth moment.
pub fn major_cycles(
    chart: &FourPillars,
    birth: DateTime<FixedOffset>,
    gender: Gender,
) -> Vec<MajorCycle> {
    let forward = runs_forward(chart, gender);
    let unix = birth.timestamp() as f64;

    let days_to_boundary = if forward {
        (next_jie(unix) - unix) / 86_400.0
    } else {
        (unix - previous_jie(unix)) / 86_400.0
    };
    let start_age = days_to_boundary / DAYS_PER_YEAR_OF_AGE;

    let birth_year = birth.year();
    (0..CYCLE_COUNT)
        .map(|i| {
            let step = (i + 1) as i64;
            let pillar = if forward {
                chart.month.next(step)
            } else {
                chart.month.previous(step)
            };
            let cycle_start_age = start_age + 10.0 * i as f64;
            let start_year = birth_year + cycle_start_age.ceil() as i32;
            MajorCycle {
                pillar,
                start_age: cycle_start_age,
                start_year,
                end_year: start_year + 9,
            }
        })
        .collect()
}

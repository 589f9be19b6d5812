//! End-to-end chart checks against published almanac dates.

use chrono::{FixedOffset, TimeZone};
use sizhu_chart::{Location, chart_from_civil, chart_from_civil_at};
use sizhu_core::{Branch, Stem, StemBranch};

fn tz(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn sb(stem: Stem, branch: Branch) -> StemBranch {
    StemBranch::new(stem, branch)
}

#[test]
fn beijing_olympics_opening() {
    let when = tz(8).with_ymd_and_hms(2008, 8, 8, 20, 8, 0).unwrap();
    let chart = chart_from_civil(when);
    assert_eq!(chart.year, sb(Stem::Wu, Branch::Zi), "{chart}");
    assert_eq!(chart.month, sb(Stem::Geng, Branch::Shen), "{chart}");
    assert_eq!(chart.day, sb(Stem::Geng, Branch::Chen), "{chart}");
    assert_eq!(chart.hour, sb(Stem::Bing, Branch::Xu), "{chart}");
}

#[test]
fn millennium_noon() {
    let when = tz(8).with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let chart = chart_from_civil(when);
    // Before Li Chun: still the Ji-Mao year and the Bing-Zi month of 1999.
    assert_eq!(chart.year, sb(Stem::Ji, Branch::Mao), "{chart}");
    assert_eq!(chart.month, sb(Stem::Bing, Branch::Zi), "{chart}");
    assert_eq!(chart.day, sb(Stem::Wu, Branch::Wu), "{chart}");
    assert_eq!(chart.hour, sb(Stem::Wu, Branch::Wu), "{chart}");
}

#[test]
fn solar_time_correction_changes_hour_pillar_only() {
    let when = tz(8).with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
    let civil = chart_from_civil(when);
    let solar = chart_from_civil_at(when, Location::new(87.6, 8.0));
    assert_eq!(civil.year, solar.year);
    assert_eq!(civil.month, solar.month);
    assert_eq!(civil.day, solar.day);
    assert_eq!(civil.hour.branch, Branch::Si);
    assert_eq!(solar.hour.branch, Branch::Chen);
}

#[test]
fn chart_display_reads_pillar_order() {
    let when = tz(8).with_ymd_and_hms(2008, 8, 8, 20, 8, 0).unwrap();
    let chart = chart_from_civil(when);
    assert_eq!(chart.to_string(), "Wu-Zi Geng-Shen Geng-Chen Bing-Xu");
}

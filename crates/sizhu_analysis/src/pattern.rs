//! Pattern classification: the structural reading of a chart.
//!
//! A priority cascade. Month-command patterns (Jian Lu, the blade patterns)
//! come first, then a transpired-stem scan over the month branch's hidden
//! stems, then the month main qi as fallback. Two overrides can replace the
//! base result: Follow patterns for a rootless, overwhelmed Day Master, and
//! vitalized patterns for a chart converted to the Day Master's own element.
//! Finally an auxiliary pattern is attached when some other Ten God
//! outweighs the primary.

use sizhu_chart::{ALL_ROLES, FourPillars};
use sizhu_core::{ALL_BRANCHES, ALL_TEN_GODS, Element, LifeStage, Polarity, TenGod};
use sizhu_energy::{StrengthReport, has_full_combo};

/// Classification thresholds.
pub mod thresholds {
    use sizhu_core::Element;

    /// Share of the Ten-God total a single group must exceed for a Follow
    /// pattern.
    pub const FOLLOW_DOMINANCE_SHARE: f64 = 0.5;
    /// Absolute ceiling on Day Master support for a Follow pattern.
    pub const FOLLOW_SUPPORT_CEILING: f64 = 2.5;
    /// The dominant group must also carry this multiple of the support.
    pub const FOLLOW_DOMINANCE_RATIO: f64 = 2.0;

    /// Officer-group ceiling below which a vitalized pattern is possible.
    pub const VITALIZED_OFFICER_CEILING: f64 = 3.0;

    /// Element strength a Day Master's own element must exceed for a
    /// vitalized pattern in the absence of a full combination.
    pub const fn vitalized_floor(element: Element) -> f64 {
        match element {
            Element::Wood => 24.2,
            Element::Fire => 23.9,
            Element::Earth => 33.2,
            Element::Metal => 24.4,
            Element::Water => 23.8,
        }
    }
}

/// How a pattern was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternMethod {
    /// Day Master at Thriving Official in the month branch.
    JianLu,
    /// Yang Day Master at Peak in the month branch.
    YangRen,
    /// Yin Day Master at Peak in the month branch.
    YueRen,
    /// A month-branch hidden stem transpires as the month stem.
    TranspiredMonthStem,
    /// A month-branch hidden stem transpires as the year stem.
    TranspiredYearStem,
    /// A month-branch hidden stem transpires as the hour stem.
    TranspiredHourStem,
    /// Fallback: the month branch's main qi.
    MonthMainQi,
    /// Rootless Day Master surrendered to a dominant officer group.
    FollowSevenKillings,
    /// Rootless Day Master surrendered to a dominant wealth group.
    FollowWealth,
    /// Rootless Day Master surrendered to a dominant output group.
    FollowChild,
    /// Vitalized wood.
    QuZhi,
    /// Vitalized fire.
    YanShang,
    /// Vitalized earth.
    JiaSe,
    /// Vitalized metal.
    CongGe,
    /// Vitalized water.
    RunXia,
    /// Auxiliary patterns: a Ten God outweighing the primary.
    DominantTenGod,
}

impl PatternMethod {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::JianLu => "Jian Lu",
            Self::YangRen => "Yang Ren",
            Self::YueRen => "Yue Ren",
            Self::TranspiredMonthStem => "Transpired Month Stem",
            Self::TranspiredYearStem => "Transpired Year Stem",
            Self::TranspiredHourStem => "Transpired Hour Stem",
            Self::MonthMainQi => "Month Main Qi",
            Self::FollowSevenKillings => "Follow Seven Killings",
            Self::FollowWealth => "Follow Wealth",
            Self::FollowChild => "Follow Child",
            Self::QuZhi => "Qu Zhi",
            Self::YanShang => "Yan Shang",
            Self::JiaSe => "Jia Se",
            Self::CongGe => "Cong Ge",
            Self::RunXia => "Run Xia",
            Self::DominantTenGod => "Dominant Ten God",
        }
    }

    /// Whether this is one of the Follow patterns.
    pub const fn is_follow(self) -> bool {
        matches!(
            self,
            Self::FollowSevenKillings | Self::FollowWealth | Self::FollowChild
        )
    }

    /// Whether this is one of the vitalized single-element patterns.
    pub const fn is_vitalized(self) -> bool {
        matches!(
            self,
            Self::QuZhi | Self::YanShang | Self::JiaSe | Self::CongGe | Self::RunXia
        )
    }
}

/// The chart's structural pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub ten_god: TenGod,
    pub method: PatternMethod,
    /// A second Ten God outweighing the primary, if any.
    pub auxiliary: Option<(TenGod, PatternMethod)>,
}

/// Classify a chart given its strength report.
pub fn classify(chart: &FourPillars, strengths: &StrengthReport) -> Pattern {
    let (mut ten_god, mut method) = base_pattern(chart);

    if let Some((god, m)) = follow_pattern(chart, strengths) {
        ten_god = god;
        method = m;
    } else if let Some(m) = vitalized_pattern(chart, strengths) {
        ten_god = TenGod::Friend;
        method = m;
    }

    let auxiliary = auxiliary_pattern(ten_god, strengths);
    Pattern { ten_god, method, auxiliary }
}

/// Steps 1-4: month command, transpired stems, main-qi fallback.
fn base_pattern(chart: &FourPillars) -> (TenGod, PatternMethod) {
    let day_master = chart.day_master();
    let month_branch = chart.month.branch;

    match day_master.life_stage(month_branch) {
        LifeStage::ThrivingOfficial => return (TenGod::Friend, PatternMethod::JianLu),
        LifeStage::Peak => {
            let method = match day_master.polarity() {
                Polarity::Yang => PatternMethod::YangRen,
                Polarity::Yin => PatternMethod::YueRen,
            };
            return (TenGod::RobWealth, method);
        }
        _ => {}
    }

    // Transpired scan: a hidden stem of the month branch appearing as a
    // visible stem. The month stem outranks the hidden-qi order: if it
    // matches any hidden stem and is not a peer, it wins outright. Only then
    // does the scan walk main qi outward across the year and hour stems.
    // Peer transpirations are skipped but remembered as a tiebreaker for the
    // fallback.
    let hidden = month_branch.hidden_stems();
    let mut peer_candidate = None;

    if hidden.contains(chart.month.stem) {
        let god = TenGod::of_stem(day_master, chart.month.stem);
        if god.is_peer() {
            peer_candidate = Some((god, PatternMethod::TranspiredMonthStem));
        } else {
            return (god, PatternMethod::TranspiredMonthStem);
        }
    }

    for qi in hidden.iter() {
        let god = TenGod::of_stem(day_master, qi);
        let position = if chart.year.stem == qi {
            Some(PatternMethod::TranspiredYearStem)
        } else if chart.hour.stem == qi {
            Some(PatternMethod::TranspiredHourStem)
        } else {
            None
        };
        let Some(method) = position else { continue };
        if god.is_peer() {
            if peer_candidate.is_none() {
                peer_candidate = Some((god, method));
            }
            continue;
        }
        return (god, method);
    }

    let main_god = TenGod::of_branch(day_master, month_branch);
    if main_god.is_peer() {
        if let Some(found) = peer_candidate {
            return found;
        }
    }
    (main_god, PatternMethod::MonthMainQi)
}

/// Step 5: Follow patterns. The Day Master must be rootless and one
/// consuming group must overwhelm what little support remains.
fn follow_pattern(chart: &FourPillars, strengths: &StrengthReport) -> Option<(TenGod, PatternMethod)> {
    if !day_master_rootless(chart) {
        return None;
    }

    let total = strengths.ten_god_total();
    if total <= 0.0 {
        return None;
    }

    let officer = strengths.ten_god(TenGod::DirectOfficer) + strengths.ten_god(TenGod::SevenKillings);
    let wealth = strengths.ten_god(TenGod::DirectWealth) + strengths.ten_god(TenGod::IndirectWealth);
    let output = strengths.ten_god(TenGod::EatingGod) + strengths.ten_god(TenGod::HurtingOfficer);
    let resource =
        strengths.ten_god(TenGod::DirectResource) + strengths.ten_god(TenGod::IndirectResource);
    let peer = strengths.ten_god(TenGod::Friend) + strengths.ten_god(TenGod::RobWealth);

    let support = resource + peer - wealth;

    let groups = [
        (officer, TenGod::DirectOfficer, TenGod::SevenKillings, PatternMethod::FollowSevenKillings),
        (wealth, TenGod::DirectWealth, TenGod::IndirectWealth, PatternMethod::FollowWealth),
        (output, TenGod::EatingGod, TenGod::HurtingOfficer, PatternMethod::FollowChild),
    ];

    for (strength, even, odd, method) in groups {
        if strength > thresholds::FOLLOW_DOMINANCE_SHARE * total
            && support < thresholds::FOLLOW_SUPPORT_CEILING
            && strength >= thresholds::FOLLOW_DOMINANCE_RATIO * support
        {
            let god = if strengths.ten_god(even) >= strengths.ten_god(odd) { even } else { odd };
            return Some((god, method));
        }
    }
    None
}

/// Step 6: vitalized patterns. A weak officer group and a chart converted to
/// the Day Master's own element.
fn vitalized_pattern(chart: &FourPillars, strengths: &StrengthReport) -> Option<PatternMethod> {
    let officer = strengths.ten_god(TenGod::DirectOfficer) + strengths.ten_god(TenGod::SevenKillings);
    if officer >= thresholds::VITALIZED_OFFICER_CEILING {
        return None;
    }

    let element = chart.day_master().element();
    let converted = has_full_combo(chart, element)
        || strengths.element(element) > thresholds::vitalized_floor(element);
    if !converted {
        return None;
    }

    Some(match element {
        Element::Wood => PatternMethod::QuZhi,
        Element::Fire => PatternMethod::YanShang,
        Element::Earth => PatternMethod::JiaSe,
        Element::Metal => PatternMethod::CongGe,
        Element::Water => PatternMethod::RunXia,
    })
}

/// Step 7: auxiliary pattern. Peer primaries are measured against the whole
/// peer camp including the Day Master's own energy; others against the
/// primary god's strength.
fn auxiliary_pattern(primary: TenGod, strengths: &StrengthReport) -> Option<(TenGod, PatternMethod)> {
    let threshold = if primary.is_peer() {
        strengths.ten_god(TenGod::Friend)
            + strengths.ten_god(TenGod::RobWealth)
            + strengths.self_energy()
    } else {
        strengths.ten_god(primary)
    };

    let mut best: Option<(TenGod, f64)> = None;
    for god in ALL_TEN_GODS {
        if god.is_peer() || god == primary {
            continue;
        }
        let s = strengths.ten_god(god);
        if s > threshold && best.is_none_or(|(_, b)| s > b) {
            best = Some((god, s));
        }
    }
    best.map(|(god, _)| (god, PatternMethod::DominantTenGod))
}

/// A Day Master with no root anywhere in the chart. Yang stems count any
/// same-element hidden stem; yin stems only main or residual qi.
fn day_master_rootless(chart: &FourPillars) -> bool {
    let day_master = chart.day_master();
    let element = day_master.element();

    for role in ALL_ROLES {
        let hidden = chart.pillar(role).branch.hidden_stems();
        let rooted = match day_master.polarity() {
            Polarity::Yang => hidden.iter().any(|qi| qi.element() == element),
            Polarity::Yin => {
                hidden.main.element() == element
                    || hidden.residual.is_some_and(|qi| qi.element() == element)
            }
        };
        if rooted {
            return false;
        }
    }
    true
}

/// The branch where a stem sits at a given life stage, if any.
pub fn branch_at_stage(stem: sizhu_core::Stem, stage: LifeStage) -> Option<sizhu_core::Branch> {
    ALL_BRANCHES.into_iter().find(|b| stem.life_stage(*b) == stage)
}

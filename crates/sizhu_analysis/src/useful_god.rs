//! Useful-god analysis: favorable and unfavorable elements and Ten Gods.
//!
//! Three interchangeable strategies over the same inputs. The pattern method
//! reasons from the structural pattern and the Ten-God balance; the strength
//! balance method looks only at the Five-Element vector; the climate method
//! compares the thermal balance against the Day Master's comfort ranges.
//! Every decision is appended to a human-readable trace.

use std::ops::RangeInclusive;

use sizhu_chart::FourPillars;
use sizhu_core::{ALL_ELEMENTS, ALL_TEN_GODS, Element, Stem, TenGod};
use sizhu_energy::{StrengthReport, ThermalBalance};

use crate::pattern::{Pattern, PatternMethod};

/// The selectable analysis strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsefulGodMethod {
    /// Reason from the structural pattern.
    Pattern,
    /// Reason from the Five-Element strength vector alone.
    StrengthBalance,
    /// Reason from temperature and moisture.
    Climate,
}

impl UsefulGodMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pattern => "Pattern",
            Self::StrengthBalance => "Strength Balance",
            Self::Climate => "Climate",
        }
    }
}

/// The recommendation produced by any of the three methods.
#[derive(Debug, Clone, PartialEq)]
pub struct UsefulGodAnalysis {
    pub favorable_elements: Vec<Element>,
    pub unfavorable_elements: Vec<Element>,
    pub favorable_gods: Vec<TenGod>,
    pub unfavorable_gods: Vec<TenGod>,
    /// Decision log, one line per step taken.
    pub trace: Vec<String>,
}

/// Small fixed-size element set; output order follows [`ALL_ELEMENTS`].
#[derive(Debug, Default, Clone, Copy)]
struct ElementSet([bool; 5]);

impl ElementSet {
    fn insert(&mut self, element: Element) {
        self.0[element.index() as usize] = true;
    }

    fn remove(&mut self, element: Element) {
        self.0[element.index() as usize] = false;
    }

    fn contains(self, element: Element) -> bool {
        self.0[element.index() as usize]
    }

    fn union(self, other: ElementSet) -> ElementSet {
        let mut out = self;
        for element in ALL_ELEMENTS {
            if other.contains(element) {
                out.insert(element);
            }
        }
        out
    }

    fn to_vec(self) -> Vec<Element> {
        ALL_ELEMENTS.into_iter().filter(|e| self.contains(*e)).collect()
    }
}

/// Run one analysis method over a chart.
pub fn useful_god(
    chart: &FourPillars,
    strengths: &StrengthReport,
    pattern: &Pattern,
    thermal: ThermalBalance,
    method: UsefulGodMethod,
) -> UsefulGodAnalysis {
    let mut trace = Vec::new();
    let dm_element = chart.day_master().element();

    let (favorable, unfavorable) = match method {
        UsefulGodMethod::Pattern => pattern_sets(dm_element, strengths, pattern, &mut trace),
        UsefulGodMethod::StrengthBalance => balance_sets(dm_element, strengths, &mut trace),
        UsefulGodMethod::Climate => climate_sets(chart.day_master(), thermal, &mut trace),
    };

    let pattern_god = (method == UsefulGodMethod::Pattern).then_some(pattern.ten_god);
    finish(dm_element, pattern_god, favorable, unfavorable, trace)
}

fn finish(
    dm_element: Element,
    pattern_god: Option<TenGod>,
    favorable: ElementSet,
    unfavorable: ElementSet,
    trace: Vec<String>,
) -> UsefulGodAnalysis {
    let expand = |set: ElementSet| -> Vec<TenGod> {
        ALL_TEN_GODS
            .into_iter()
            .filter(|god| set.contains(god.element_for(dm_element)))
            .collect()
    };

    let mut favorable_gods = expand(favorable);
    let unfavorable_gods = expand(unfavorable);

    // A pattern god rejects its structural antagonist even when the
    // antagonist's element is favorable.
    if let Some(god) = pattern_god {
        let excluded = match god {
            TenGod::EatingGod => Some(TenGod::IndirectResource),
            TenGod::HurtingOfficer => Some(TenGod::DirectOfficer),
            TenGod::DirectOfficer => Some(TenGod::HurtingOfficer),
            _ => None,
        };
        if let Some(excluded) = excluded {
            favorable_gods.retain(|g| *g != excluded);
        }
    }

    UsefulGodAnalysis {
        favorable_elements: favorable.to_vec(),
        unfavorable_elements: unfavorable.to_vec(),
        favorable_gods,
        unfavorable_gods,
        trace,
    }
}

/// Group totals read off the strength report, relative to the Day Master.
struct Groups {
    resource: f64,
    output: f64,
    wealth: f64,
    officer: f64,
    self_total: f64,
    total: f64,
}

impl Groups {
    fn read(strengths: &StrengthReport) -> Groups {
        let pair = |a: TenGod, b: TenGod| strengths.ten_god(a) + strengths.ten_god(b);
        let peer = pair(TenGod::Friend, TenGod::RobWealth);
        Groups {
            resource: pair(TenGod::DirectResource, TenGod::IndirectResource),
            output: pair(TenGod::EatingGod, TenGod::HurtingOfficer),
            wealth: pair(TenGod::DirectWealth, TenGod::IndirectWealth),
            officer: pair(TenGod::DirectOfficer, TenGod::SevenKillings),
            self_total: peer + strengths.self_energy(),
            total: strengths.ten_god_total() + strengths.self_energy(),
        }
    }

    fn consumption(&self) -> f64 {
        self.output + self.wealth + self.officer
    }

    /// The consuming element drawing the most energy.
    fn max_consumption(&self, dm: Element) -> Element {
        let candidates = [
            (dm.child(), self.output),
            (dm.controlled(), self.wealth),
            (dm.controller(), self.officer),
        ];
        candidates
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e)
            .unwrap_or(dm.child())
    }
}

fn pattern_sets(
    dm: Element,
    strengths: &StrengthReport,
    pattern: &Pattern,
    trace: &mut Vec<String>,
) -> (ElementSet, ElementSet) {
    let mut favorable = ElementSet::default();
    let mut unfavorable = ElementSet::default();

    match pattern.method {
        PatternMethod::FollowSevenKillings => {
            trace.push("follow the officer camp: feed what controls the Day Master".into());
            favorable.insert(dm.controlled());
            favorable.insert(dm.controller());
            unfavorable.insert(dm.child());
            unfavorable.insert(dm.generator());
        }
        PatternMethod::FollowWealth => {
            trace.push("follow the wealth camp: feed the flow toward wealth".into());
            favorable.insert(dm.child());
            favorable.insert(dm.controlled());
            favorable.insert(dm.controller());
            unfavorable.insert(dm);
            unfavorable.insert(dm.generator());
        }
        PatternMethod::FollowChild => {
            trace.push("follow the output camp: keep the outflow unobstructed".into());
            favorable.insert(dm.controlled());
            favorable.insert(dm.child());
            favorable.insert(dm);
            unfavorable.insert(dm.generator());
            unfavorable.insert(dm.controller());
        }
        PatternMethod::QuZhi | PatternMethod::YanShang | PatternMethod::JiaSe | PatternMethod::CongGe => {
            trace.push(format!(
                "vitalized {}: sustain the single element and its flow",
                pattern.method.name()
            ));
            favorable.insert(dm.child());
            favorable.insert(dm);
            favorable.insert(dm.generator());
            unfavorable.insert(dm.controller());
            unfavorable.insert(dm.controlled());
        }
        PatternMethod::RunXia => {
            trace.push("vitalized Run Xia: let the water spread".into());
            favorable.insert(dm.child());
            favorable.insert(dm.controlled());
            favorable.insert(dm.generator());
            unfavorable.insert(dm.controller());
        }
        _ => {
            let (f, u) = normal_sets(dm, pattern.ten_god, pattern.method, strengths, trace);
            favorable = f;
            unfavorable = u;

            if let Some((aux_god, aux_method)) = pattern.auxiliary {
                trace.push(format!("auxiliary pattern {}", aux_god.name()));
                let (af, au) = normal_sets(dm, aux_god, aux_method, strengths, trace);
                favorable = favorable.union(af);
                unfavorable = unfavorable.union(au);

                for element in ALL_ELEMENTS {
                    if favorable.contains(element) && unfavorable.contains(element) {
                        favorable.remove(element);
                        unfavorable.remove(element);
                    }
                }
            }
        }
    }

    (favorable, unfavorable)
}

/// The shared procedure for non-special patterns.
fn normal_sets(
    dm: Element,
    god: TenGod,
    method: PatternMethod,
    strengths: &StrengthReport,
    trace: &mut Vec<String>,
) -> (ElementSet, ElementSet) {
    let g = Groups::read(strengths);
    let mut favorable = ElementSet::default();
    let mut unfavorable = ElementSet::default();

    if g.total <= 0.0 {
        trace.push("empty strength vector; nothing to recommend".into());
        return (favorable, unfavorable);
    }

    let pct_resource = g.resource / g.total;
    let pct_self = g.self_total / g.total;
    let pct_consumption = g.consumption() / g.total;

    if pct_resource > 0.5 {
        trace.push(format!("resource share {pct_resource:.2} floods the chart"));
        unfavorable.insert(dm.generator());
        if pct_consumption > pct_self {
            favorable.insert(dm);
        } else if g.output >= g.officer {
            favorable.insert(dm.child());
        } else {
            favorable.insert(dm.controller());
        }
        return (favorable, unfavorable);
    }

    if pct_self > 0.5 {
        trace.push(format!("self share {pct_self:.2} dominates; drain the Day Master"));
        unfavorable.insert(dm);
        let blade = matches!(
            method,
            PatternMethod::JianLu | PatternMethod::YangRen | PatternMethod::YueRen
        );
        if blade
            || matches!(
                god,
                TenGod::DirectResource
                    | TenGod::IndirectResource
                    | TenGod::DirectOfficer
                    | TenGod::SevenKillings
            )
        {
            favorable.insert(dm.controller());
        } else if matches!(god, TenGod::EatingGod | TenGod::HurtingOfficer) {
            favorable.insert(dm.child());
        } else if matches!(god, TenGod::DirectWealth | TenGod::IndirectWealth) {
            favorable.insert(dm.controlled());
        } else {
            favorable.insert(g.max_consumption(dm));
        }
        return (favorable, unfavorable);
    }

    trace.push(format!("balanced chart; weigh the {} camp", god.name()));
    match god {
        TenGod::DirectResource | TenGod::IndirectResource => {
            let resource_strongest = g.resource >= g.self_total && g.resource >= g.consumption();
            let consumption_weakest = g.consumption() < g.resource.min(g.self_total);
            if resource_strongest && consumption_weakest {
                favorable.insert(dm.child());
                unfavorable.insert(dm.generator());
            } else {
                let target = if g.officer >= g.output { dm.controller() } else { dm.child() };
                favorable.insert(target);
                unfavorable.insert(target.controller());
            }
        }
        TenGod::DirectWealth | TenGod::IndirectWealth => {
            // Resource feeds the Day Master, so it counts as support here.
            if pct_consumption > pct_self + pct_resource {
                favorable.insert(dm);
                unfavorable.insert(dm.controller());
            } else {
                let target = if g.wealth <= g.output { dm.controlled() } else { dm.child() };
                favorable.insert(target);
                unfavorable.insert(dm.generator());
            }
        }
        TenGod::DirectOfficer | TenGod::SevenKillings => {
            let candidates = [
                (dm.child(), g.output),
                (dm, g.self_total),
                (dm.generator(), g.resource),
            ];
            let winner = candidates
                .into_iter()
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(e, _)| e)
                .unwrap_or(dm);
            favorable.insert(winner);
            unfavorable.insert(winner.controller());
        }
        TenGod::EatingGod | TenGod::HurtingOfficer => {
            if pct_consumption > 2.0 * (pct_self + pct_resource) {
                favorable.insert(dm.generator());
                favorable.insert(dm);
                unfavorable.insert(g.max_consumption(dm));
            } else {
                let winner = if g.wealth >= g.officer { dm.controlled() } else { dm.controller() };
                favorable.insert(winner);
                unfavorable.insert(winner.controller());
            }
        }
        TenGod::Friend | TenGod::RobWealth => {
            unfavorable.insert(dm);
            favorable.insert(g.max_consumption(dm));
        }
    }

    (favorable, unfavorable)
}

/// Share bounds for the strength-balance method.
const DOMINANCE_SHARE: f64 = 0.55;
const CONFLICT_BAND: RangeInclusive<f64> = 0.35..=0.50;

fn balance_sets(
    dm: Element,
    strengths: &StrengthReport,
    trace: &mut Vec<String>,
) -> (ElementSet, ElementSet) {
    let mut favorable = ElementSet::default();
    let mut unfavorable = ElementSet::default();
    let total = strengths.element_total();
    if total <= 0.0 {
        trace.push("empty strength vector; nothing to recommend".into());
        return (favorable, unfavorable);
    }

    let (dominant, strength) = strengths.dominant_element();
    if strength / total > DOMINANCE_SHARE {
        trace.push(format!(
            "{} holds {:.0}% of the chart; go with the flow",
            dominant.name(),
            100.0 * strength / total
        ));
        favorable.insert(dominant);
        favorable.insert(dominant.generator());
        unfavorable.insert(dominant.controller());
        return (favorable, unfavorable);
    }

    // Two heavyweight elements locked in a control relation: bridge them.
    for attacker in ALL_ELEMENTS {
        let victim = attacker.controlled();
        let share_a = strengths.element(attacker) / total;
        let share_v = strengths.element(victim) / total;
        if CONFLICT_BAND.contains(&share_a) && CONFLICT_BAND.contains(&share_v) {
            let bridge = attacker.child();
            trace.push(format!(
                "{} and {} deadlocked; bridge with {}",
                attacker.name(),
                victim.name(),
                bridge.name()
            ));
            favorable.insert(bridge);
            unfavorable.insert(bridge.controller());
            return (favorable, unfavorable);
        }
    }

    let support = strengths.element(dm) + strengths.element(dm.generator());
    let consumption = total - support;
    if consumption > 2.0 * support {
        trace.push("Day Master outgunned; reinforce".into());
        favorable.insert(dm.generator());
        unfavorable.insert(dm.controlled());
    } else if support > 2.0 * consumption {
        trace.push("Day Master overweight; drain".into());
        favorable.insert(dm.child());
        favorable.insert(dm.controlled());
        unfavorable.insert(dm.generator());
    } else {
        trace.push("chart already balanced; no recommendation".into());
    }

    (favorable, unfavorable)
}

/// Comfort ranges (temperature, moisture) per Day Master stem.
const fn comfort_ranges(stem: Stem) -> (RangeInclusive<f64>, RangeInclusive<f64>) {
    match stem {
        Stem::Jia => (12.0..=65.0, 3.0..=90.0),
        Stem::Yi => (8.0..=60.0, 5.0..=80.0),
        Stem::Bing => (10.0..=1500.0, 1.0..=100.0),
        Stem::Ding => (0.0..=1500.0, 1.0..=100.0),
        Stem::Wu => (5.0..=150.0, 1.0..=110.0),
        Stem::Ji => (5.0..=130.0, 10.0..=120.0),
        Stem::Geng => (1.0..=200.0, 1.0..=100.0),
        Stem::Xin => (0.0..=120.0, 3.0..=150.0),
        Stem::Ren => (7.0..=99.0, 15.0..=1000.0),
        Stem::Gui => (3.0..=130.0, 10.0..=1000.0),
    }
}

fn climate_sets(
    day_master: Stem,
    thermal: ThermalBalance,
    trace: &mut Vec<String>,
) -> (ElementSet, ElementSet) {
    let mut favorable = ElementSet::default();
    let mut unfavorable = ElementSet::default();
    let (temperature, moisture) = comfort_ranges(day_master);

    if thermal.temperature > *temperature.end() {
        trace.push(format!("temperature {:.1} above comfort; cool down", thermal.temperature));
        unfavorable.insert(Element::Fire);
    } else if thermal.temperature < *temperature.start() {
        trace.push(format!("temperature {:.1} below comfort; warm up", thermal.temperature));
        favorable.insert(Element::Fire);
    } else {
        trace.push(format!("temperature {:.1} within comfort", thermal.temperature));
    }

    if thermal.moisture > *moisture.end() {
        trace.push(format!("moisture {:.1} above comfort; dry out", thermal.moisture));
        unfavorable.insert(Element::Water);
    } else if thermal.moisture < *moisture.start() {
        trace.push(format!("moisture {:.1} below comfort; moisten", thermal.moisture));
        favorable.insert(Element::Water);
    } else {
        trace.push(format!("moisture {:.1} within comfort", thermal.moisture));
    }

    (favorable, unfavorable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::classify;
    use sizhu_core::{Branch, StemBranch};
    use sizhu_energy::{analyze_strengths, thermal_balance};

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    fn run(chart: &FourPillars, method: UsefulGodMethod) -> UsefulGodAnalysis {
        let strengths = analyze_strengths(chart);
        let pattern = classify(chart, &strengths);
        let thermal = thermal_balance(chart);
        useful_god(chart, &strengths, &pattern, thermal, method)
    }

    #[test]
    fn follow_killings_surrenders_to_the_officer_camp() {
        let chart = FourPillars::new(
            sb(Stem::Xin, Branch::You),
            sb(Stem::Xin, Branch::You),
            sb(Stem::Yi, Branch::You),
            sb(Stem::Xin, Branch::You),
        );
        let out = run(&chart, UsefulGodMethod::Pattern);
        // Yi wood follows metal: feed earth and metal, shun fire and water.
        assert_eq!(out.favorable_elements, vec![Element::Earth, Element::Metal]);
        assert_eq!(out.unfavorable_elements, vec![Element::Fire, Element::Water]);
        assert!(!out.trace.is_empty());
    }

    #[test]
    fn vitalized_wood_feeds_its_own_stream() {
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Ding, Branch::Mao),
            sb(Stem::Jia, Branch::Chen),
            sb(Stem::Yi, Branch::Hai),
        );
        let out = run(&chart, UsefulGodMethod::Pattern);
        // Qu Zhi: wood, its child fire, its parent water.
        assert_eq!(
            out.favorable_elements,
            vec![Element::Wood, Element::Fire, Element::Water]
        );
        assert_eq!(out.unfavorable_elements, vec![Element::Earth, Element::Metal]);
    }

    #[test]
    fn dual_pattern_unions_both_recommendations() {
        let chart = FourPillars::new(
            sb(Stem::Bing, Branch::Wu),
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Bing, Branch::Wu),
        );
        let out = run(&chart, UsefulGodMethod::Pattern);
        assert_eq!(out.favorable_elements, vec![Element::Fire, Element::Earth]);
        assert_eq!(out.unfavorable_elements, vec![Element::Wood]);
        // Fire and earth gods favored, peers not.
        assert!(out.favorable_gods.contains(&TenGod::EatingGod));
        assert!(out.favorable_gods.contains(&TenGod::DirectWealth));
        assert!(out.unfavorable_gods.contains(&TenGod::Friend));
    }

    #[test]
    fn eating_god_pattern_rejects_indirect_resource() {
        // Force the exclusion path directly.
        let pattern = Pattern {
            ten_god: TenGod::EatingGod,
            method: PatternMethod::TranspiredMonthStem,
            auxiliary: None,
        };
        let mut favorable = ElementSet::default();
        // Water is Jia's parent: its gods would include Indirect Resource.
        favorable.insert(Element::Water);
        let out = finish(
            Element::Wood,
            Some(pattern.ten_god),
            favorable,
            ElementSet::default(),
            Vec::new(),
        );
        assert!(out.favorable_gods.contains(&TenGod::DirectResource));
        assert!(!out.favorable_gods.contains(&TenGod::IndirectResource));
    }

    #[test]
    fn balanced_wealth_counts_resource_as_support() {
        // Ren under a transpired Indirect Wealth pattern (Bing out of Si).
        // Consumption outweighs the bare self camp but not self plus the
        // heavy metal resource, so the wealth flow gets fed rather than the
        // Day Master.
        let chart = FourPillars::new(
            sb(Stem::Geng, Branch::Zi),
            sb(Stem::Bing, Branch::Si),
            sb(Stem::Ren, Branch::Shen),
            sb(Stem::Jia, Branch::Zi),
        );
        let out = run(&chart, UsefulGodMethod::Pattern);
        assert_eq!(out.favorable_elements, vec![Element::Wood], "{:?}", out.trace);
        assert_eq!(out.unfavorable_elements, vec![Element::Metal], "{:?}", out.trace);
        assert!(out.favorable_gods.contains(&TenGod::EatingGod));
    }

    #[test]
    fn dominant_element_drives_strength_balance() {
        let pillar = sb(Stem::Ren, Branch::Zi);
        let chart = FourPillars::new(pillar, pillar, pillar, pillar);
        let out = run(&chart, UsefulGodMethod::StrengthBalance);
        // Water owns the chart: favor water and its parent metal, avoid earth.
        assert_eq!(out.favorable_elements, vec![Element::Metal, Element::Water]);
        assert_eq!(out.unfavorable_elements, vec![Element::Earth]);
    }

    #[test]
    fn cold_chart_wants_fire() {
        let pillar = sb(Stem::Ren, Branch::Zi);
        let chart = FourPillars::new(pillar, pillar, pillar, pillar);
        let out = run(&chart, UsefulGodMethod::Climate);
        assert_eq!(out.favorable_elements, vec![Element::Fire]);
        assert!(out.unfavorable_elements.is_empty(), "{:?}", out.unfavorable_elements);
    }

    #[test]
    fn hot_dry_chart_wants_cooling_and_water() {
        let chart = FourPillars::new(
            sb(Stem::Bing, Branch::Wu),
            sb(Stem::Jia, Branch::Wu),
            sb(Stem::Ding, Branch::Si),
            sb(Stem::Bing, Branch::Wu),
        );
        let out = run(&chart, UsefulGodMethod::Climate);
        // Bing tolerates heat but not a bone-dry chart.
        assert_eq!(out.favorable_elements, vec![Element::Water]);
    }

    #[test]
    fn trace_is_always_populated() {
        let chart = FourPillars::new(
            sb(Stem::Wu, Branch::Zi),
            sb(Stem::Geng, Branch::Shen),
            sb(Stem::Geng, Branch::Chen),
            sb(Stem::Bing, Branch::Xu),
        );
        for method in [
            UsefulGodMethod::Pattern,
            UsefulGodMethod::StrengthBalance,
            UsefulGodMethod::Climate,
        ] {
            let out = run(&chart, method);
            assert!(!out.trace.is_empty(), "{method:?}");
        }
    }

    #[test]
    fn gods_expand_from_elements() {
        let chart = FourPillars::new(
            sb(Stem::Xin, Branch::You),
            sb(Stem::Xin, Branch::You),
            sb(Stem::Yi, Branch::You),
            sb(Stem::Xin, Branch::You),
        );
        let out = run(&chart, UsefulGodMethod::Pattern);
        for god in &out.favorable_gods {
            assert!(
                out.favorable_elements.contains(&god.element_for(Element::Wood)),
                "{god:?}"
            );
        }
    }
}

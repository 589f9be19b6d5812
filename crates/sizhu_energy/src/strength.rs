//! Aggregation of pillar energies into Five-Element and Ten-God strength
//! vectors.
//!
//! Both vectors reconstruct the same weighted contributions, so their totals
//! agree: the element total equals the Ten-God total plus the Day Master's
//! own stem energy, which is tracked separately as self strength.

use sizhu_chart::{ALL_ROLES, FourPillars, PillarRole};
use sizhu_core::{ALL_ELEMENTS, ALL_TEN_GODS, Element, Polarity, TenGod};

use crate::combos::{BranchCombo, ComboKind, detect_combos};
use crate::energy::{branch_energy, stem_energy};

/// Hidden-stem weights by qi slot: main, middle, residual.
const HIDDEN_WEIGHTS: [f64; 3] = [1.0, 0.6, 0.3];

/// The chart's aggregated strength vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    elements: [f64; 5],
    ten_gods: [f64; 10],
    self_energy: f64,
}

impl StrengthReport {
    /// Aggregated strength of one element.
    pub fn element(&self, element: Element) -> f64 {
        self.elements[element.index() as usize]
    }

    /// Aggregated strength of one Ten God.
    pub fn ten_god(&self, god: TenGod) -> f64 {
        self.ten_gods[god.index() as usize]
    }

    /// The Day Master's own stem energy, excluded from the Ten-God vector.
    pub fn self_energy(&self) -> f64 {
        self.self_energy
    }

    /// Sum over all five elements.
    pub fn element_total(&self) -> f64 {
        self.elements.iter().sum()
    }

    /// Sum over all ten gods.
    pub fn ten_god_total(&self) -> f64 {
        self.ten_gods.iter().sum()
    }

    /// The strongest element and its strength.
    pub fn dominant_element(&self) -> (Element, f64) {
        let mut best = (Element::Wood, f64::MIN);
        for element in ALL_ELEMENTS {
            let s = self.element(element);
            if s > best.1 {
                best = (element, s);
            }
        }
        best
    }

    /// The strongest non-peer Ten God and its strength.
    pub fn dominant_ten_god(&self) -> (TenGod, f64) {
        let mut best = (TenGod::EatingGod, f64::MIN);
        for god in ALL_TEN_GODS {
            if god.is_peer() {
                continue;
            }
            let s = self.ten_god(god);
            if s > best.1 {
                best = (god, s);
            }
        }
        best
    }
}

/// Compute both strength vectors for a chart.
pub fn analyze_strengths(chart: &FourPillars) -> StrengthReport {
    let day_master = chart.day_master();
    let mut elements = [0.0; 5];
    let mut ten_gods = [0.0; 10];
    let mut self_energy = 0.0;

    for role in ALL_ROLES {
        let pillar = chart.pillar(role);

        let se = stem_energy(chart, role);
        elements[pillar.stem.element().index() as usize] += se;
        if role == PillarRole::Day {
            self_energy = se;
        } else {
            ten_gods[TenGod::of_stem(day_master, pillar.stem).index() as usize] += se;
        }

        let be = branch_energy(chart, role);
        let hidden = pillar.branch.hidden_stems();
        let slots = [Some(hidden.main), hidden.middle, hidden.residual];
        for (slot, weight) in slots.iter().zip(HIDDEN_WEIGHTS) {
            let Some(qi) = slot else { continue };
            let amount = be * weight;
            elements[qi.element().index() as usize] += amount;
            ten_gods[TenGod::of_stem(day_master, *qi).index() as usize] += amount;
        }
    }

    for combo in detect_combos(chart) {
        let bonus = combo_bonus(&combo);
        elements[combo.element.index() as usize] += bonus;

        // Split evenly across the element's two polarity gods so the vector
        // totals stay reconciled.
        for polarity in [Polarity::Yang, Polarity::Yin] {
            let god = TenGod::calculate(day_master, combo.element, polarity);
            ten_gods[god.index() as usize] += bonus / 2.0;
        }
    }

    StrengthReport { elements, ten_gods, self_energy }
}

fn combo_bonus(combo: &BranchCombo) -> f64 {
    match combo.kind {
        ComboKind::Directional => {
            let mut bonus = 0.0;
            for role in &combo.roles {
                bonus += if *role == PillarRole::Month { 3.0 } else { 1.0 };
            }
            if combo.adjacent {
                bonus += 1.0;
            }
            bonus
        }
        ComboKind::HalfDirectional => combo
            .roles
            .iter()
            .map(|role| if *role == PillarRole::Month { 1.5 } else { 0.5 })
            .sum(),
        ComboKind::TripleHarmony => 2.0,
        ComboKind::HalfTripleHarmony => 1.0,
    }
}

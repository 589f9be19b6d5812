//! Branch combination detection: directional (san hui) and triple harmony
//! (san he) sets, in full or two-member form.

use sizhu_chart::{ALL_ROLES, FourPillars, PillarRole};
use sizhu_core::{Branch, Element};

/// The three seasonal branches per direction.
pub const DIRECTIONAL_SETS: [([Branch; 3], Element); 4] = [
    ([Branch::Yin, Branch::Mao, Branch::Chen], Element::Wood),
    ([Branch::Si, Branch::Wu, Branch::Wei], Element::Fire),
    ([Branch::Shen, Branch::You, Branch::Xu], Element::Metal),
    ([Branch::Hai, Branch::Zi, Branch::Chou], Element::Water),
];

/// The three harmony branches per transformed element.
pub const TRIPLE_HARMONY_SETS: [([Branch; 3], Element); 4] = [
    ([Branch::Shen, Branch::Zi, Branch::Chen], Element::Water),
    ([Branch::Hai, Branch::Mao, Branch::Wei], Element::Wood),
    ([Branch::Yin, Branch::Wu, Branch::Xu], Element::Fire),
    ([Branch::Si, Branch::You, Branch::Chou], Element::Metal),
];

/// A detected combination and the pillars carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCombo {
    pub kind: ComboKind,
    pub element: Element,
    /// Every pillar whose branch belongs to the set.
    pub roles: Vec<PillarRole>,
    /// Full directional sets only: the three members sit in consecutive
    /// pillars.
    pub adjacent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKind {
    Directional,
    HalfDirectional,
    TripleHarmony,
    HalfTripleHarmony,
}

impl ComboKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Directional => "Directional",
            Self::HalfDirectional => "Half Directional",
            Self::TripleHarmony => "Triple Harmony",
            Self::HalfTripleHarmony => "Half Triple Harmony",
        }
    }
}

fn member_roles(chart: &FourPillars, set: &[Branch; 3]) -> Vec<PillarRole> {
    ALL_ROLES
        .iter()
        .copied()
        .filter(|role| set.contains(&chart.pillar(*role).branch))
        .collect()
}

fn distinct_members(chart: &FourPillars, set: &[Branch; 3]) -> usize {
    set.iter()
        .filter(|member| {
            ALL_ROLES
                .iter()
                .any(|role| chart.pillar(*role).branch == **member)
        })
        .count()
}

/// Whether three consecutive pillars carry exactly the three set members.
fn is_adjacent(chart: &FourPillars, set: &[Branch; 3]) -> bool {
    for start in 0..=1 {
        let window = [
            chart.pillars()[start].branch,
            chart.pillars()[start + 1].branch,
            chart.pillars()[start + 2].branch,
        ];
        if set.iter().all(|m| window.contains(m)) {
            return true;
        }
    }
    false
}

/// Every directional or triple-harmony combination in the chart, full sets
/// before half sets.
pub fn detect_combos(chart: &FourPillars) -> Vec<BranchCombo> {
    let mut out = Vec::new();

    for (set, element) in &DIRECTIONAL_SETS {
        let kind = match distinct_members(chart, set) {
            3 => ComboKind::Directional,
            2 => ComboKind::HalfDirectional,
            _ => continue,
        };
        out.push(BranchCombo {
            kind,
            element: *element,
            roles: member_roles(chart, set),
            adjacent: kind == ComboKind::Directional && is_adjacent(chart, set),
        });
    }

    for (set, element) in &TRIPLE_HARMONY_SETS {
        let kind = match distinct_members(chart, set) {
            3 => ComboKind::TripleHarmony,
            2 => ComboKind::HalfTripleHarmony,
            _ => continue,
        };
        out.push(BranchCombo {
            kind,
            element: *element,
            roles: member_roles(chart, set),
            adjacent: false,
        });
    }

    out
}

/// Whether the chart carries a full three-branch combination (directional or
/// triple harmony) transforming to `element`.
pub fn has_full_combo(chart: &FourPillars, element: Element) -> bool {
    detect_combos(chart).iter().any(|combo| {
        combo.element == element
            && matches!(combo.kind, ComboKind::Directional | ComboKind::TripleHarmony)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::{Stem, StemBranch};

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn full_directional_wood() {
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Ding, Branch::Mao),
            sb(Stem::Wu, Branch::Chen),
            sb(Stem::Geng, Branch::Wu),
        );
        let combos = detect_combos(&chart);
        let wood = combos
            .iter()
            .find(|c| c.kind == ComboKind::Directional)
            .unwrap();
        assert_eq!(wood.element, Element::Wood);
        assert_eq!(
            wood.roles,
            vec![PillarRole::Year, PillarRole::Month, PillarRole::Day]
        );
        assert!(wood.adjacent, "{wood:?}");
    }

    #[test]
    fn scattered_directional_is_not_adjacent() {
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Ding, Branch::Mao),
            sb(Stem::Geng, Branch::Wu),
            sb(Stem::Wu, Branch::Chen),
        );
        let combos = detect_combos(&chart);
        let wood = combos
            .iter()
            .find(|c| c.kind == ComboKind::Directional)
            .unwrap();
        assert!(!wood.adjacent, "{wood:?}");
    }

    #[test]
    fn half_directional_needs_two_distinct_members() {
        // Yin and Mao only.
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Ding, Branch::Mao),
            sb(Stem::Geng, Branch::Wu),
            sb(Stem::Geng, Branch::Wu),
        );
        let combos = detect_combos(&chart);
        assert!(combos
            .iter()
            .any(|c| c.kind == ComboKind::HalfDirectional && c.element == Element::Wood));
    }

    #[test]
    fn triple_harmony_water() {
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Shen),
            sb(Stem::Bing, Branch::Zi),
            sb(Stem::Wu, Branch::Chen),
            sb(Stem::Geng, Branch::Wu),
        );
        assert!(has_full_combo(&chart, Element::Water));
        let combos = detect_combos(&chart);
        assert!(combos
            .iter()
            .any(|c| c.kind == ComboKind::TripleHarmony && c.element == Element::Water));
    }

    #[test]
    fn repeated_branch_is_not_a_pair() {
        // Two Zi branches alone form no water combination.
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Geng, Branch::Wu),
        );
        let combos = detect_combos(&chart);
        assert!(
            !combos.iter().any(|c| c.element == Element::Water),
            "{combos:?}"
        );
    }
}

//! Per-pillar energy coefficients.
//!
//! Energy is a property of a pillar *in its chart*: the month sets the
//! season, branches root stems across the whole chart, and distance between
//! pillars decays the rooting. Nothing here is cached on the pillar values.

use sizhu_chart::{ALL_ROLES, FourPillars, PillarRole};
use sizhu_core::{Branch, Stem};

use crate::seasonal::seasonal_coefficient;

/// Rooting weights for an exact hidden-stem match on main/middle/residual qi.
const EXACT_ROOT: [f64; 3] = [3.0, 2.0, 1.0];
/// Rooting weights for a same-element, different-stem match.
const ELEMENT_ROOT: [f64; 3] = [1.5, 1.0, 0.5];

/// Rooting decay by pillar distance (0 through 3).
const DISTANCE_DECAY: [f64; 4] = [1.0, 0.9, 0.8, 0.7];

/// Branch energy. The month branch commands the season at a fixed 3.0;
/// every other branch is weighted by its element's seasonal standing.
pub fn branch_energy(chart: &FourPillars, role: PillarRole) -> f64 {
    if role == PillarRole::Month {
        return 3.0;
    }
    let month_element = chart.month.branch.element();
    seasonal_coefficient(chart.pillar(role).branch.element(), month_element)
}

/// How strongly `stem` roots in `branch`: exact hidden-stem matches score
/// 3.0/2.0/1.0 across the qi slots, same-element matches half that. Slots
/// accumulate.
pub fn root_score(stem: Stem, branch: Branch) -> f64 {
    let hidden = branch.hidden_stems();
    let slots = [Some(hidden.main), hidden.middle, hidden.residual];

    let mut score = 0.0;
    for (i, slot) in slots.iter().enumerate() {
        let Some(qi) = slot else { continue };
        if *qi == stem {
            score += EXACT_ROOT[i];
        } else if qi.element() == stem.element() {
            score += ELEMENT_ROOT[i];
        }
    }
    score
}

/// Stem energy: a seasonal base plus rooting gathered from every branch in
/// the chart. A branch with no root for this stem contributes nothing; a
/// rooted branch contributes its own energy plus the decayed, seasonally
/// weighted root score.
pub fn stem_energy(chart: &FourPillars, role: PillarRole) -> f64 {
    let stem = chart.pillar(role).stem;
    let month_element = chart.month.branch.element();

    let mut total = seasonal_coefficient(stem.element(), month_element);

    for branch_role in ALL_ROLES {
        let branch = chart.pillar(branch_role).branch;
        let root = root_score(stem, branch);
        if root == 0.0 {
            continue;
        }

        let seasonal = if branch_role == PillarRole::Month {
            1.0
        } else {
            seasonal_coefficient(branch.element(), month_element)
        };
        let distance = role.index().abs_diff(branch_role.index());
        total += branch_energy(chart, branch_role) + root * seasonal * DISTANCE_DECAY[distance];
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::StemBranch;

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn month_branch_energy_is_fixed() {
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Wu, Branch::Wu),
            sb(Stem::Geng, Branch::Shen),
        );
        assert_eq!(branch_energy(&chart, PillarRole::Month), 3.0);
    }

    #[test]
    fn off_month_branch_follows_season() {
        // Yin (wood) month: Wu branch is fire, generated by wood, 1.2.
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Wu, Branch::Wu),
            sb(Stem::Geng, Branch::Shen),
        );
        assert_eq!(branch_energy(&chart, PillarRole::Day), 1.2);
        // Zi is water, which generates wood, 1.0.
        assert_eq!(branch_energy(&chart, PillarRole::Year), 1.0);
        // Shen is metal, which controls wood, 0.8.
        assert_eq!(branch_energy(&chart, PillarRole::Hour), 0.8);
    }

    #[test]
    fn exact_root_beats_element_root() {
        // Jia is Yin's main qi: exact match, 3.0.
        assert_eq!(root_score(Stem::Jia, Branch::Yin), 3.0);
        // Yi shares wood with Yin's main qi but is a different stem: 1.5.
        assert_eq!(root_score(Stem::Yi, Branch::Yin), 1.5);
    }

    #[test]
    fn root_slots_accumulate() {
        // Chen hides Wu (main), Gui (middle), Yi (residual). Ji matches Wu
        // by element only: 1.5 from the main slot.
        assert_eq!(root_score(Stem::Ji, Branch::Chen), 1.5);
        // Wu matches exactly on main: 3.0.
        assert_eq!(root_score(Stem::Wu, Branch::Chen), 3.0);
        // Geng finds nothing in Chen.
        assert_eq!(root_score(Stem::Geng, Branch::Chen), 0.0);
    }

    #[test]
    fn rootless_stem_keeps_only_seasonal_base() {
        // Geng (metal) over an all-wood-and-water chart in a Yin month:
        // metal controls wood, base 0.8, no roots anywhere.
        let chart = FourPillars::new(
            sb(Stem::Jia, Branch::Mao),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Geng, Branch::Hai),
            sb(Stem::Jia, Branch::Mao),
        );
        assert_eq!(stem_energy(&chart, PillarRole::Day), 0.8);
    }

    #[test]
    fn rooted_stem_gains_branch_energy_and_root() {
        // Jia day stem in a Yin month with Yin as month branch: exact root
        // in the month branch only.
        let chart = FourPillars::new(
            sb(Stem::Geng, Branch::Shen),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Xin, Branch::You),
        );
        // Base 1.4 (wood in wood month) + month branch: 3.0 energy
        // + root 3.0 * seasonal 1.0 * decay 0.9 (distance 1) = 7.1.
        let energy = stem_energy(&chart, PillarRole::Day);
        assert!((energy - 7.1).abs() < 1e-9, "energy {energy}");
    }

    #[test]
    fn closer_roots_count_for_more() {
        // Identical rooting branch placed at day vs year distance from the
        // hour stem.
        let near = FourPillars::new(
            sb(Stem::Geng, Branch::You),
            sb(Stem::Bing, Branch::Si),
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Jia, Branch::Wu),
        );
        let far = FourPillars::new(
            sb(Stem::Jia, Branch::Yin),
            sb(Stem::Bing, Branch::Si),
            sb(Stem::Geng, Branch::You),
            sb(Stem::Jia, Branch::Wu),
        );
        let e_near = stem_energy(&near, PillarRole::Hour);
        let e_far = stem_energy(&far, PillarRole::Hour);
        assert!(e_near > e_far, "{e_near} vs {e_far}");
    }
}

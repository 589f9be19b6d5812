//! Thermal balance: temperature and moisture scores for the climate method.
//!
//! Every stem and branch carries a fixed base contribution. Branch
//! contributions scale with branch energy; fire stems scale with the stem's
//! life stage in its own branch and in the month branch; moisture is clamped
//! at zero from below.

use sizhu_chart::{ALL_ROLES, FourPillars};
use sizhu_core::{Branch, LifeStage, Stem};

use crate::energy::branch_energy;
use crate::energy::stem_energy;

/// Temperature and moisture of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalBalance {
    pub temperature: f64,
    pub moisture: f64,
}

/// Baseline warmth carried by each branch, scaled by branch energy.
const fn branch_baseline(branch: Branch) -> f64 {
    match branch {
        Branch::Zi => -5.0,
        Branch::Chou => -10.0,
        Branch::Yin => 1.0,
        Branch::Mao => 3.0,
        Branch::Chen => 9.0,
        Branch::Si => 15.0,
        Branch::Wu => 20.0,
        Branch::Wei => 15.0,
        Branch::Shen => 9.0,
        Branch::You => 3.0,
        Branch::Xu => 1.0,
        Branch::Hai => -2.0,
    }
}

/// Direct fire output of a stem.
const fn stem_fire_base(stem: Stem) -> f64 {
    match stem {
        Stem::Bing => 10.0,
        Stem::Ding => 6.0,
        _ => 0.0,
    }
}

/// Direct fire output of a branch, scaled by branch energy.
const fn branch_fire_base(branch: Branch) -> f64 {
    match branch {
        Branch::Si => 8.0,
        Branch::Wu => 10.0,
        _ => 0.0,
    }
}

/// Moisture contribution of a stem, scaled by stem energy.
const fn stem_moisture(stem: Stem) -> f64 {
    match stem {
        Stem::Ren | Stem::Gui => 3.0,
        Stem::Bing | Stem::Ding => -3.0,
        Stem::Wu => -2.0,
        Stem::Ji => 1.0,
        Stem::Jia | Stem::Yi => 0.5,
        Stem::Geng | Stem::Xin => -0.5,
    }
}

/// Moisture contribution of a branch, scaled by branch energy.
const fn branch_moisture(branch: Branch) -> f64 {
    match branch {
        Branch::Zi | Branch::Hai => 3.0,
        Branch::Chen | Branch::Chou => 2.0,
        Branch::Wu | Branch::Si => -3.0,
        Branch::Xu | Branch::Wei => -2.0,
        Branch::Shen | Branch::You => -1.0,
        Branch::Yin | Branch::Mao => 0.5,
    }
}

/// How much a life stage amplifies a fire stem's output.
const fn stage_multiplier(stage: LifeStage) -> f64 {
    match stage {
        LifeStage::Birth => 1.2,
        LifeStage::Bath => 1.3,
        LifeStage::Attire => 1.5,
        LifeStage::ThrivingOfficial => 1.8,
        LifeStage::Peak => 2.0,
        LifeStage::Decline => 1.0,
        LifeStage::Sickness => 0.8,
        LifeStage::Death => 0.5,
        LifeStage::Grave => 0.6,
        LifeStage::Extinction => 0.5,
        LifeStage::Conception => 0.7,
        LifeStage::Nourishment => 0.9,
    }
}

/// Compute the chart's thermal balance.
pub fn thermal_balance(chart: &FourPillars) -> ThermalBalance {
    let month_branch = chart.month.branch;
    let mut temperature = 0.0;
    let mut moisture = 0.0;

    for role in ALL_ROLES {
        let pillar = chart.pillar(role);
        let be = branch_energy(chart, role);
        let se = stem_energy(chart, role);

        temperature += branch_baseline(pillar.branch) * be;
        temperature += branch_fire_base(pillar.branch) * be;

        let fire = stem_fire_base(pillar.stem);
        if fire != 0.0 {
            temperature += fire
                * stage_multiplier(pillar.stem.life_stage(pillar.branch))
                * stage_multiplier(pillar.stem.life_stage(month_branch));
        }

        moisture += stem_moisture(pillar.stem) * se;
        moisture += branch_moisture(pillar.branch) * be;
    }

    ThermalBalance {
        temperature,
        moisture: moisture.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::StemBranch;

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn all_zi_chart_is_deeply_cold() {
        let pillar = sb(Stem::Ren, Branch::Zi);
        let chart = FourPillars::new(pillar, pillar, pillar, pillar);
        let balance = thermal_balance(&chart);
        // Zi baseline -5 over energies 3.0 + 1.4 * 3.
        assert!(
            (balance.temperature - -36.0).abs() < 1e-9,
            "temperature {}",
            balance.temperature
        );
        assert!(balance.moisture > 0.0, "moisture {}", balance.moisture);
    }

    #[test]
    fn summer_fire_chart_is_hot_and_dry() {
        let chart = FourPillars::new(
            sb(Stem::Bing, Branch::Wu),
            sb(Stem::Jia, Branch::Wu),
            sb(Stem::Ding, Branch::Si),
            sb(Stem::Bing, Branch::Wu),
        );
        let balance = thermal_balance(&chart);
        assert!(balance.temperature > 100.0, "temperature {}", balance.temperature);
        assert_eq!(balance.moisture, 0.0, "moisture clamps at zero");
    }

    #[test]
    fn peak_stage_doubles_fire_output() {
        // Bing in Wu sits at Peak in both its own branch and the month
        // branch: its fire term is 10 * 2.0 * 2.0.
        assert_eq!(Stem::Bing.life_stage(Branch::Wu), LifeStage::Peak);
        assert_eq!(stage_multiplier(LifeStage::Peak), 2.0);
    }

    #[test]
    fn winter_chart_is_wetter_than_summer_chart() {
        let winter = FourPillars::new(
            sb(Stem::Ren, Branch::Zi),
            sb(Stem::Gui, Branch::Hai),
            sb(Stem::Ren, Branch::Zi),
            sb(Stem::Gui, Branch::Chou),
        );
        let summer = FourPillars::new(
            sb(Stem::Bing, Branch::Wu),
            sb(Stem::Ding, Branch::Si),
            sb(Stem::Bing, Branch::Wu),
            sb(Stem::Ding, Branch::Si),
        );
        let w = thermal_balance(&winter);
        let s = thermal_balance(&summer);
        assert!(w.moisture > s.moisture, "{} vs {}", w.moisture, s.moisture);
        assert!(w.temperature < s.temperature, "{} vs {}", w.temperature, s.temperature);
    }
}

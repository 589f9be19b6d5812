//! The four pillars and the Day Master reference point.

use sizhu_core::{Branch, Element, Polarity, Stem, StemBranch, TenGod};

/// Which pillar a value belongs to. The numeric order (year=0 .. hour=3)
/// doubles as the distance metric for rooting decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// All four roles in chart order.
pub const ALL_ROLES: [PillarRole; 4] = [
    PillarRole::Year,
    PillarRole::Month,
    PillarRole::Day,
    PillarRole::Hour,
];

impl PillarRole {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Position in chart order (Year=0 .. Hour=3).
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// An immutable Four Pillars chart. All derived quantities (energy,
/// strengths, pattern) are computed from the whole chart on demand, never
/// stored on the pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl FourPillars {
    pub const fn new(year: StemBranch, month: StemBranch, day: StemBranch, hour: StemBranch) -> Self {
        Self { year, month, day, hour }
    }

    /// The pillar in a given role.
    pub const fn pillar(&self, role: PillarRole) -> StemBranch {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }

    /// The four pillars in chart order.
    pub const fn pillars(&self) -> [StemBranch; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The Day Master: the day pillar's stem, reference for all relational
    /// scoring.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Ten God of a stem relative to the Day Master.
    pub fn ten_god_of_stem(&self, stem: Stem) -> TenGod {
        TenGod::of_stem(self.day_master(), stem)
    }

    /// Ten God of a branch (by its main qi) relative to the Day Master.
    pub fn ten_god_of_branch(&self, branch: Branch) -> TenGod {
        TenGod::of_branch(self.day_master(), branch)
    }

    /// How many of the eight visible stems/branches carry each element.
    pub fn element_counts(&self) -> [(Element, u8); 5] {
        let mut counts = [0u8; 5];
        for sb in self.pillars() {
            counts[sb.stem.element().index() as usize] += 1;
            counts[sb.branch.element().index() as usize] += 1;
        }
        let mut out = [(Element::Wood, 0); 5];
        for (i, e) in sizhu_core::ALL_ELEMENTS.iter().enumerate() {
            out[i] = (*e, counts[i]);
        }
        out
    }

    /// Yang and yin counts over the eight visible stems/branches.
    pub fn polarity_counts(&self) -> (u8, u8) {
        let mut yang = 0;
        let mut yin = 0;
        for sb in self.pillars() {
            for p in [sb.stem.polarity(), sb.branch.polarity()] {
                match p {
                    Polarity::Yang => yang += 1,
                    Polarity::Yin => yin += 1,
                }
            }
        }
        (yang, yin)
    }

    /// All pairwise interactions between distinct pillars, tagged with the
    /// two roles involved.
    pub fn relationships(&self) -> Vec<(PillarRole, PillarRole, sizhu_core::PairRelation)> {
        let mut out = Vec::new();
        for (i, a) in ALL_ROLES.iter().enumerate() {
            for b in ALL_ROLES.iter().skip(i + 1) {
                for rel in sizhu_core::analyze(self.pillar(*a), self.pillar(*b)) {
                    out.push((*a, *b, rel));
                }
            }
        }
        out
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year, self.month, self.day, self.hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::PairRelation;

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    fn beijing_2008() -> FourPillars {
        FourPillars::new(
            sb(Stem::Wu, Branch::Zi),
            sb(Stem::Geng, Branch::Shen),
            sb(Stem::Geng, Branch::Chen),
            sb(Stem::Bing, Branch::Xu),
        )
    }

    #[test]
    fn day_master_is_day_stem() {
        assert_eq!(beijing_2008().day_master(), Stem::Geng);
    }

    #[test]
    fn element_counts_known_chart() {
        // Wu-Zi Geng-Shen Geng-Chen Bing-Xu: 3 earth, 3 metal, 1 water, 1 fire.
        let counts: std::collections::HashMap<_, _> =
            beijing_2008().element_counts().into_iter().collect();
        assert_eq!(counts[&Element::Earth], 3);
        assert_eq!(counts[&Element::Metal], 3);
        assert_eq!(counts[&Element::Water], 1);
        assert_eq!(counts[&Element::Fire], 1);
        assert_eq!(counts[&Element::Wood], 0);
    }

    #[test]
    fn polarity_counts_sum_to_eight() {
        let (yang, yin) = beijing_2008().polarity_counts();
        assert_eq!(yang + yin, 8);
    }

    #[test]
    fn relationships_detects_clash_pairs() {
        // Chen-Xu clash between day and hour branches.
        let rels = beijing_2008().relationships();
        assert!(rels.iter().any(|(a, b, r)| {
            *a == PillarRole::Day && *b == PillarRole::Hour && *r == PairRelation::BranchClash
        }));
    }

    #[test]
    fn role_indices_ordered() {
        for (i, r) in ALL_ROLES.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }
}

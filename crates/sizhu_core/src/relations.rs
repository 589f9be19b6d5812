//! Pairwise stem/branch interactions between two pillars.
//!
//! Covers the classical pair tables: stem combination (offset 5) and clash
//! (offset 6); branch six-harmony, clash (offset 6), harm, punishment
//! (including the four self-punishing branches), and destruction; plus the
//! two whole-pillar findings, identical pillar and double clash.

use crate::branch::Branch;
use crate::cycle::StemBranch;

/// A single interaction detected between two pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairRelation {
    /// Stems five positions apart (Wu He).
    StemCombination,
    /// Stems six positions apart (Xiang Chong).
    StemClash,
    /// Branch six-harmony pair (Liu He).
    SixHarmony,
    /// Branches six positions apart (Liu Chong).
    BranchClash,
    /// Branch harm pair (Liu Hai).
    Harm,
    /// Branch punishment pair or self-punishment (Xiang Xing).
    Punishment,
    /// Branch destruction pair (Xiang Po).
    Destruction,
    /// Identical stem and branch (Fu Yin).
    IdenticalPillar,
    /// Stem clash together with branch clash (Fan Yin).
    DoubleClash,
}

impl PairRelation {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemCombination => "Stem Combination",
            Self::StemClash => "Stem Clash",
            Self::SixHarmony => "Six Harmony",
            Self::BranchClash => "Branch Clash",
            Self::Harm => "Harm",
            Self::Punishment => "Punishment",
            Self::Destruction => "Destruction",
            Self::IdenticalPillar => "Identical Pillar",
            Self::DoubleClash => "Double Clash",
        }
    }
}

const SIX_HARMONY_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Chou),
    (Branch::Yin, Branch::Hai),
    (Branch::Mao, Branch::Xu),
    (Branch::Chen, Branch::You),
    (Branch::Si, Branch::Shen),
    (Branch::Wu, Branch::Wei),
];

const HARM_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Wei),
    (Branch::Chou, Branch::Wu),
    (Branch::Yin, Branch::Si),
    (Branch::Mao, Branch::Chen),
    (Branch::Shen, Branch::Hai),
    (Branch::You, Branch::Xu),
];

const PUNISHMENT_PAIRS: [(Branch, Branch); 7] = [
    (Branch::Zi, Branch::Mao),
    (Branch::Yin, Branch::Si),
    (Branch::Si, Branch::Shen),
    (Branch::Shen, Branch::Yin),
    (Branch::Chou, Branch::Wei),
    (Branch::Wei, Branch::Xu),
    (Branch::Xu, Branch::Chou),
];

/// Branches that punish themselves when doubled.
const SELF_PUNISHING: [Branch; 4] = [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai];

const DESTRUCTION_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::You),
    (Branch::Si, Branch::Shen),
    (Branch::Yin, Branch::Hai),
    (Branch::Chen, Branch::Chou),
    (Branch::Wu, Branch::Mao),
    (Branch::Xu, Branch::Wei),
];

fn pair_matches(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Cyclic distance between two positions on a wheel of `modulus` terms,
/// folded into [0, modulus/2].
fn wheel_distance(a: u8, b: u8, modulus: u8) -> u8 {
    let d = (a as i16 - b as i16).rem_euclid(modulus as i16) as u8;
    d.min(modulus - d)
}

/// All interactions between two pillars, whole-pillar findings first.
pub fn analyze(lhs: StemBranch, rhs: StemBranch) -> Vec<PairRelation> {
    let mut found = Vec::new();

    let stem_diff = (lhs.stem.index() as i16 - rhs.stem.index() as i16).abs();
    let stem_clash = stem_diff == 6;
    let branch_clash = wheel_distance(lhs.branch.index(), rhs.branch.index(), 12) == 6;

    if lhs == rhs {
        found.push(PairRelation::IdenticalPillar);
    }
    if stem_clash && branch_clash {
        found.push(PairRelation::DoubleClash);
    }

    // Stems five apart combine (Jia-Ji .. Wu-Gui); six apart clash
    // (Jia-Geng .. Ding-Gui; the two earth stems have no clash partner).
    if stem_diff == 5 {
        found.push(PairRelation::StemCombination);
    }
    if stem_clash {
        found.push(PairRelation::StemClash);
    }

    let (b1, b2) = (lhs.branch, rhs.branch);
    if pair_matches(&SIX_HARMONY_PAIRS, b1, b2) {
        found.push(PairRelation::SixHarmony);
    }
    if branch_clash {
        found.push(PairRelation::BranchClash);
    }
    if pair_matches(&HARM_PAIRS, b1, b2) {
        found.push(PairRelation::Harm);
    }
    if pair_matches(&PUNISHMENT_PAIRS, b1, b2) || (b1 == b2 && SELF_PUNISHING.contains(&b1)) {
        found.push(PairRelation::Punishment);
    }
    if pair_matches(&DESTRUCTION_PAIRS, b1, b2) {
        found.push(PairRelation::Destruction);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::Stem;

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn jia_ji_combination() {
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Ji, Branch::Chou));
        assert!(found.contains(&PairRelation::StemCombination));
        assert!(!found.contains(&PairRelation::StemClash));
        // Zi-Chou is also a six harmony.
        assert!(found.contains(&PairRelation::SixHarmony));
    }

    #[test]
    fn jia_geng_clash() {
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Geng, Branch::Chen));
        assert!(found.contains(&PairRelation::StemClash));
        assert!(!found.contains(&PairRelation::StemCombination));
    }

    #[test]
    fn zi_wu_branch_clash() {
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Bing, Branch::Wu));
        assert!(found.contains(&PairRelation::BranchClash));
    }

    #[test]
    fn zi_wei_harm() {
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Yi, Branch::Wei));
        assert!(found.contains(&PairRelation::Harm));
    }

    #[test]
    fn self_punishment() {
        let found = analyze(sb(Stem::Jia, Branch::Wu), sb(Stem::Bing, Branch::Wu));
        assert!(found.contains(&PairRelation::Punishment));
        // Zi doubled does not self-punish.
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Bing, Branch::Zi));
        assert!(!found.contains(&PairRelation::Punishment));
    }

    #[test]
    fn identical_pillar() {
        let p = sb(Stem::Jia, Branch::Zi);
        assert!(analyze(p, p).contains(&PairRelation::IdenticalPillar));
    }

    #[test]
    fn double_clash() {
        // Jia-Zi vs Geng-Wu: stems clash (wood vs metal), branches clash.
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Geng, Branch::Wu));
        assert!(found.contains(&PairRelation::DoubleClash));
        assert!(found.contains(&PairRelation::StemClash));
        assert!(found.contains(&PairRelation::BranchClash));
    }

    #[test]
    fn unrelated_pair_is_empty() {
        let found = analyze(sb(Stem::Jia, Branch::Zi), sb(Stem::Bing, Branch::Yin));
        assert!(found.is_empty(), "{found:?}");
    }
}

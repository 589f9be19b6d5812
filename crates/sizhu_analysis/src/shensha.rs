//! Symbolic stars (Shen Sha): branch-keyed lookups judged against a chart.
//!
//! Each star rule answers one question: does a given branch carry this star
//! for this chart? Most rules key off the day or year pillar; a few use the
//! month branch. A caller-owned registry accepts custom chart-level rules.

use sizhu_chart::{ALL_ROLES, FourPillars, PillarRole};
use sizhu_core::{ALL_BRANCHES, Branch, LifeStage, Polarity, Stem, StemBranch};

/// The built-in stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    LuShen,
    YangRen,
    FeiRen,
    JinYu,
    TianYi,
    TaiJi,
    WenChang,
    YiMa,
    TaoHua,
    HuaGai,
    JiangXing,
    JieSha,
    WangShen,
    GuChen,
    GuaSu,
    YuanChen,
    KongWang,
    TianDe,
    YueDe,
}

pub const ALL_STARS: [Star; 19] = [
    Star::LuShen,
    Star::YangRen,
    Star::FeiRen,
    Star::JinYu,
    Star::TianYi,
    Star::TaiJi,
    Star::WenChang,
    Star::YiMa,
    Star::TaoHua,
    Star::HuaGai,
    Star::JiangXing,
    Star::JieSha,
    Star::WangShen,
    Star::GuChen,
    Star::GuaSu,
    Star::YuanChen,
    Star::KongWang,
    Star::TianDe,
    Star::YueDe,
];

impl Star {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LuShen => "Lu Shen",
            Self::YangRen => "Yang Ren",
            Self::FeiRen => "Fei Ren",
            Self::JinYu => "Jin Yu",
            Self::TianYi => "Tian Yi",
            Self::TaiJi => "Tai Ji",
            Self::WenChang => "Wen Chang",
            Self::YiMa => "Yi Ma",
            Self::TaoHua => "Tao Hua",
            Self::HuaGai => "Hua Gai",
            Self::JiangXing => "Jiang Xing",
            Self::JieSha => "Jie Sha",
            Self::WangShen => "Wang Shen",
            Self::GuChen => "Gu Chen",
            Self::GuaSu => "Gua Su",
            Self::YuanChen => "Yuan Chen",
            Self::KongWang => "Kong Wang",
            Self::TianDe => "Tian De",
            Self::YueDe => "Yue De",
        }
    }

    /// Whether `target` carries this star for `chart`.
    pub fn matches(self, chart: &FourPillars, target: Branch) -> bool {
        let day_stem = chart.day.stem;
        match self {
            Self::LuShen => day_stem.life_stage(target) == LifeStage::ThrivingOfficial,
            Self::YangRen => Some(target) == blade_branch(day_stem),
            Self::FeiRen => blade_branch(day_stem).map(|b| b.next(6)) == Some(target),
            Self::JinYu => lu_branch(day_stem).map(|b| b.next(2)) == Some(target),
            Self::TianYi => by_either_stem(chart, target, tian_yi_branches),
            Self::TaiJi => by_either_stem(chart, target, tai_ji_branches),
            Self::WenChang => by_either_stem(chart, target, wen_chang_branch),
            Self::YiMa => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::Yin, Branch::Hai, Branch::Shen, Branch::Si])),
            Self::TaoHua => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::You, Branch::Wu, Branch::Mao, Branch::Zi])),
            Self::HuaGai => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::Chen, Branch::Chou, Branch::Xu, Branch::Wei])),
            Self::JiangXing => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::Zi, Branch::You, Branch::Wu, Branch::Mao])),
            Self::JieSha => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::Si, Branch::Yin, Branch::Hai, Branch::Shen])),
            Self::WangShen => by_either_branch(chart, target, |g| harmony_pick(g, [Branch::Hai, Branch::Shen, Branch::Si, Branch::Yin])),
            Self::GuChen => seasonal_pick(chart.year.branch, [Branch::Yin, Branch::Si, Branch::Shen, Branch::Hai]) == target,
            Self::GuaSu => seasonal_pick(chart.year.branch, [Branch::Xu, Branch::Chou, Branch::Chen, Branch::Wei]) == target,
            Self::YuanChen => yuan_chen_branch(chart.year) == target,
            Self::KongWang => {
                void_branches(chart.day).contains(&target)
                    || void_branches(chart.year).contains(&target)
            }
            Self::TianDe => tian_de_branch(chart.month.branch) == Some(target),
            Self::YueDe => target
                .hidden_stems()
                .contains(yue_de_stem(chart.month.branch)),
        }
    }
}

/// Every built-in star carried by `target` in `chart`.
pub fn stars_at(chart: &FourPillars, target: Branch) -> Vec<Star> {
    ALL_STARS
        .into_iter()
        .filter(|star| star.matches(chart, target))
        .collect()
}

/// Stars per pillar, in chart order.
pub fn stars_by_pillar(chart: &FourPillars) -> Vec<(PillarRole, Vec<Star>)> {
    ALL_ROLES
        .iter()
        .map(|role| (*role, stars_at(chart, chart.pillar(*role).branch)))
        .collect()
}

/// The branch where the day stem sits at Thriving Official.
fn lu_branch(stem: Stem) -> Option<Branch> {
    ALL_BRANCHES
        .into_iter()
        .find(|b| stem.life_stage(*b) == LifeStage::ThrivingOfficial)
}

/// The blade branch: Peak for yang stems, Attire for yin stems.
fn blade_branch(stem: Stem) -> Option<Branch> {
    let stage = match stem.polarity() {
        Polarity::Yang => LifeStage::Peak,
        Polarity::Yin => LifeStage::Attire,
    };
    ALL_BRANCHES.into_iter().find(|b| stem.life_stage(*b) == stage)
}

fn by_either_stem(chart: &FourPillars, target: Branch, rule: fn(Stem, Branch) -> bool) -> bool {
    rule(chart.day.stem, target) || rule(chart.year.stem, target)
}

fn by_either_branch(chart: &FourPillars, target: Branch, rule: fn(Branch) -> Branch) -> bool {
    rule(chart.year.branch) == target || rule(chart.day.branch) == target
}

/// Triple-harmony group of a branch: 0 shen-zi-chen, 1 si-you-chou,
/// 2 yin-wu-xu, 3 hai-mao-wei.
const fn harmony_group(branch: Branch) -> usize {
    (branch.index() % 4) as usize
}

/// Pick per harmony group, picks given in shen-zi-chen, si-you-chou,
/// yin-wu-xu, hai-mao-wei order, matching [`harmony_group`].
fn harmony_pick(base: Branch, picks: [Branch; 4]) -> Branch {
    picks[harmony_group(base)]
}

/// Pick per season, picks given in hai-zi-chou, yin-mao-chen, si-wu-wei,
/// shen-you-xu order.
fn seasonal_pick(base: Branch, picks: [Branch; 4]) -> Branch {
    // Hai (11) wraps into the winter group with Zi and Chou.
    let season = ((base.index() as usize + 1) % 12) / 3;
    picks[season]
}

fn tian_yi_branches(stem: Stem, target: Branch) -> bool {
    let pair = match stem {
        Stem::Jia | Stem::Wu => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
        Stem::Geng | Stem::Xin => [Branch::Wu, Branch::Yin],
    };
    pair.contains(&target)
}

fn tai_ji_branches(stem: Stem, target: Branch) -> bool {
    match stem {
        Stem::Jia | Stem::Yi => [Branch::Zi, Branch::Wu].contains(&target),
        Stem::Bing | Stem::Ding => [Branch::Mao, Branch::You].contains(&target),
        Stem::Wu | Stem::Ji => {
            [Branch::Chen, Branch::Xu, Branch::Chou, Branch::Wei].contains(&target)
        }
        Stem::Geng | Stem::Xin => [Branch::Yin, Branch::Hai].contains(&target),
        Stem::Ren | Stem::Gui => [Branch::Si, Branch::Shen].contains(&target),
    }
}

fn wen_chang_branch(stem: Stem, target: Branch) -> bool {
    let pick = match stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Mao,
    };
    pick == target
}

/// The year branch's clash, stepped once with the year's polarity.
fn yuan_chen_branch(year: StemBranch) -> Branch {
    let clash = year.branch.next(6);
    match year.stem.polarity() {
        Polarity::Yang => clash.next(1),
        Polarity::Yin => clash.previous(1),
    }
}

/// The two empty branches of a pillar's sexagenary decade.
fn void_branches(pillar: StemBranch) -> [Branch; 2] {
    let diff = (i64::from(pillar.branch.index()) - i64::from(pillar.stem.index())).rem_euclid(12);
    [
        Branch::from_index(diff + 10),
        Branch::from_index(diff + 11),
    ]
}

fn tian_de_branch(month: Branch) -> Option<Branch> {
    match month {
        Branch::Mao => Some(Branch::Shen),
        Branch::Wu => Some(Branch::Hai),
        Branch::You => Some(Branch::Yin),
        Branch::Zi => Some(Branch::Si),
        _ => None,
    }
}

fn yue_de_stem(month: Branch) -> Stem {
    match harmony_group(month) {
        0 => Stem::Ren,
        1 => Stem::Geng,
        2 => Stem::Bing,
        _ => Stem::Jia,
    }
}

/// Caller-owned registry of named chart-level rules.
#[derive(Default)]
pub struct CustomRuleRegistry {
    rules: Vec<(String, Box<dyn Fn(&FourPillars) -> bool>)>,
}

impl CustomRuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under a display name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rule: impl Fn(&FourPillars) -> bool + 'static,
    ) {
        self.rules.push((name.into(), Box::new(rule)));
    }

    /// Drop all registered rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of every rule matching the chart, in registration order.
    pub fn matches(&self, chart: &FourPillars) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule(chart))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

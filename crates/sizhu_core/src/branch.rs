//! The twelve Earthly Branches (Di Zhi) and their hidden stems.
//!
//! Each branch "contains" one to three stems: the main qi (always present),
//! an optional middle qi, and an optional residual qi. The four growth
//! branches (Yin, Si, Shen, Hai) carry the next element's birth stem as
//! middle qi; the four grave branches (Chen, Xu, Chou, Wei) store the
//! element of the season just ended as residual qi. Downstream scoring
//! weights the three slots 1.0 / 0.6 / 0.3.

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The twelve Earthly Branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (Zi=0 .. Hai=11).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// The three hidden-stem slots of a branch, in weighting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenStems {
    /// Main qi, always present.
    pub main: Stem,
    /// Middle qi.
    pub middle: Option<Stem>,
    /// Residual qi.
    pub residual: Option<Stem>,
}

impl HiddenStems {
    /// Iterate present slots in main → middle → residual order.
    pub fn iter(&self) -> impl Iterator<Item = Stem> {
        [Some(self.main), self.middle, self.residual]
            .into_iter()
            .flatten()
    }

    /// Whether `stem` occupies any slot.
    pub fn contains(&self, stem: Stem) -> bool {
        self.iter().any(|s| s == stem)
    }
}

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// CJK glyph.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based cycle position (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from a cycle position, normalized modulo 12.
    pub const fn from_index(index: i64) -> Branch {
        ALL_BRANCHES[(index.rem_euclid(12)) as usize]
    }

    /// Fixed element affinity.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Even positions are yang, odd positions yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Branch `offset` steps forward in the cycle.
    pub const fn next(self, offset: i64) -> Branch {
        Branch::from_index(self.index() as i64 + offset)
    }

    /// Branch `offset` steps backward in the cycle.
    pub const fn previous(self, offset: i64) -> Branch {
        Branch::from_index(self.index() as i64 - offset)
    }

    /// The hidden stems of this branch.
    pub const fn hidden_stems(self) -> HiddenStems {
        match self {
            Self::Zi => HiddenStems {
                main: Stem::Gui,
                middle: None,
                residual: None,
            },
            Self::Chou => HiddenStems {
                main: Stem::Ji,
                middle: Some(Stem::Xin),
                residual: Some(Stem::Gui),
            },
            Self::Yin => HiddenStems {
                main: Stem::Jia,
                middle: Some(Stem::Bing),
                residual: Some(Stem::Wu),
            },
            Self::Mao => HiddenStems {
                main: Stem::Yi,
                middle: None,
                residual: None,
            },
            Self::Chen => HiddenStems {
                main: Stem::Wu,
                middle: Some(Stem::Gui),
                residual: Some(Stem::Yi),
            },
            Self::Si => HiddenStems {
                main: Stem::Bing,
                middle: Some(Stem::Geng),
                residual: Some(Stem::Wu),
            },
            Self::Wu => HiddenStems {
                main: Stem::Ding,
                middle: Some(Stem::Ji),
                residual: None,
            },
            Self::Wei => HiddenStems {
                main: Stem::Ji,
                middle: Some(Stem::Yi),
                residual: Some(Stem::Ding),
            },
            Self::Shen => HiddenStems {
                main: Stem::Geng,
                middle: Some(Stem::Ren),
                residual: Some(Stem::Wu),
            },
            Self::You => HiddenStems {
                main: Stem::Xin,
                middle: None,
                residual: None,
            },
            Self::Xu => HiddenStems {
                main: Stem::Wu,
                middle: Some(Stem::Ding),
                residual: Some(Stem::Xin),
            },
            Self::Hai => HiddenStems {
                main: Stem::Ren,
                middle: Some(Stem::Jia),
                residual: None,
            },
        }
    }

    /// Main qi of this branch.
    pub const fn main_qi(self) -> Stem {
        self.hidden_stems().main
    }
}

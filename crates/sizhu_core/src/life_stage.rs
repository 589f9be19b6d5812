//! The twelve life stages (Shi Er Chang Sheng).
//!
//! A stem's vitality in a branch is read off a 12-step wheel starting at the
//! stem's birth branch. Yang stems walk the wheel forward, yin stems walk it
//! backward. Fire and earth share a palace: Bing/Wu are born in Yin, Ding/Ji
//! in You.

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;

/// The twelve stages in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeStage {
    /// Birth (Chang Sheng).
    Birth,
    /// Bath (Mu Yu).
    Bath,
    /// Attire (Guan Dai).
    Attire,
    /// Thriving official (Lin Guan).
    ThrivingOfficial,
    /// Peak (Di Wang).
    Peak,
    /// Decline (Shuai).
    Decline,
    /// Sickness (Bing).
    Sickness,
    /// Death (Si).
    Death,
    /// Grave (Mu).
    Grave,
    /// Extinction (Jue).
    Extinction,
    /// Conception (Tai).
    Conception,
    /// Nourishment (Yang).
    Nourishment,
}

/// All twelve stages in wheel order.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bath,
    LifeStage::Attire,
    LifeStage::ThrivingOfficial,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Grave,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nourishment,
];

impl LifeStage {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "Birth",
            Self::Bath => "Bath",
            Self::Attire => "Attire",
            Self::ThrivingOfficial => "Thriving Official",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Grave => "Grave",
            Self::Extinction => "Extinction",
            Self::Conception => "Conception",
            Self::Nourishment => "Nourishment",
        }
    }

    /// CJK glyph(s).
    pub const fn character(self) -> &'static str {
        match self {
            Self::Birth => "长生",
            Self::Bath => "沐浴",
            Self::Attire => "冠带",
            Self::ThrivingOfficial => "临官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Grave => "墓",
            Self::Extinction => "绝",
            Self::Conception => "胎",
            Self::Nourishment => "养",
        }
    }

    /// 0-based wheel position (Birth=0 .. Nourishment=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Birth => 0,
            Self::Bath => 1,
            Self::Attire => 2,
            Self::ThrivingOfficial => 3,
            Self::Peak => 4,
            Self::Decline => 5,
            Self::Sickness => 6,
            Self::Death => 7,
            Self::Grave => 8,
            Self::Extinction => 9,
            Self::Conception => 10,
            Self::Nourishment => 11,
        }
    }
}

impl Stem {
    /// The branch where this stem sits in the Birth stage. Fire and earth
    /// share a palace.
    pub const fn birth_branch(self) -> Branch {
        match self {
            Self::Jia => Branch::Hai,
            Self::Yi => Branch::Wu,
            Self::Bing | Self::Wu => Branch::Yin,
            Self::Ding | Self::Ji => Branch::You,
            Self::Geng => Branch::Si,
            Self::Xin => Branch::Zi,
            Self::Ren => Branch::Shen,
            Self::Gui => Branch::Mao,
        }
    }

    /// Life stage of this stem in `branch`: distance along the wheel from
    /// the birth branch, forward for yang stems and backward for yin.
    pub fn life_stage(self, branch: Branch) -> LifeStage {
        let start = self.birth_branch().index() as i64;
        let target = branch.index() as i64;
        let distance = match self.polarity() {
            Polarity::Yang => (target - start).rem_euclid(12),
            Polarity::Yin => (start - target).rem_euclid(12),
        };
        ALL_LIFE_STAGES[distance as usize]
    }
}

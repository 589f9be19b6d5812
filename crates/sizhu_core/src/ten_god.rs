//! The Ten Gods (Shi Shen): relational categories against the Day Master.
//!
//! The category of a target is a pure function of two comparisons with the
//! Day Master: element relation (same, output, wealth, officer, resource)
//! and polarity (same or different). Ten combinations, ten gods.

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenGod {
    /// Same element, same polarity (Bi Jian).
    Friend,
    /// Same element, different polarity (Jie Cai).
    RobWealth,
    /// Day Master generates target, same polarity (Shi Shen).
    EatingGod,
    /// Day Master generates target, different polarity (Shang Guan).
    HurtingOfficer,
    /// Day Master controls target, different polarity (Zheng Cai).
    DirectWealth,
    /// Day Master controls target, same polarity (Pian Cai).
    IndirectWealth,
    /// Target controls Day Master, different polarity (Zheng Guan).
    DirectOfficer,
    /// Target controls Day Master, same polarity (Qi Sha).
    SevenKillings,
    /// Target generates Day Master, different polarity (Zheng Yin).
    DirectResource,
    /// Target generates Day Master, same polarity (Pian Yin).
    IndirectResource,
}

/// All ten gods, peer pair first.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::DirectWealth,
    TenGod::IndirectWealth,
    TenGod::DirectOfficer,
    TenGod::SevenKillings,
    TenGod::DirectResource,
    TenGod::IndirectResource,
];

impl TenGod {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::DirectWealth => "Direct Wealth",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectOfficer => "Direct Officer",
            Self::SevenKillings => "Seven Killings",
            Self::DirectResource => "Direct Resource",
            Self::IndirectResource => "Indirect Resource",
        }
    }

    /// CJK glyph pair.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::DirectWealth => "正财",
            Self::IndirectWealth => "偏财",
            Self::DirectOfficer => "正官",
            Self::SevenKillings => "七杀",
            Self::DirectResource => "正印",
            Self::IndirectResource => "偏印",
        }
    }

    /// Position in [`ALL_TEN_GODS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Friend => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::DirectWealth => 4,
            Self::IndirectWealth => 5,
            Self::DirectOfficer => 6,
            Self::SevenKillings => 7,
            Self::DirectResource => 8,
            Self::IndirectResource => 9,
        }
    }

    /// Whether this god is one of the two peer categories.
    pub const fn is_peer(self) -> bool {
        matches!(self, Self::Friend | Self::RobWealth)
    }

    /// Category of a (target element, target polarity) pair relative to the
    /// Day Master stem.
    pub fn calculate(day_master: Stem, target_element: Element, target_polarity: Polarity) -> TenGod {
        let dm_element = day_master.element();
        let same_polarity = day_master.polarity() == target_polarity;

        if dm_element == target_element {
            if same_polarity { TenGod::Friend } else { TenGod::RobWealth }
        } else if dm_element.generates(target_element) {
            if same_polarity { TenGod::EatingGod } else { TenGod::HurtingOfficer }
        } else if dm_element.controls(target_element) {
            if same_polarity { TenGod::IndirectWealth } else { TenGod::DirectWealth }
        } else if target_element.controls(dm_element) {
            if same_polarity { TenGod::SevenKillings } else { TenGod::DirectOfficer }
        } else {
            // target generates day master
            if same_polarity { TenGod::IndirectResource } else { TenGod::DirectResource }
        }
    }

    /// Category of a target stem relative to the Day Master.
    pub fn of_stem(day_master: Stem, target: Stem) -> TenGod {
        TenGod::calculate(day_master, target.element(), target.polarity())
    }

    /// Category of a branch relative to the Day Master, judged by the
    /// branch's main qi stem.
    pub fn of_branch(day_master: Stem, target: Branch) -> TenGod {
        TenGod::of_stem(day_master, target.main_qi())
    }

    /// The element this god occupies relative to a Day Master element.
    pub const fn element_for(self, day_master_element: Element) -> Element {
        match self {
            Self::Friend | Self::RobWealth => day_master_element,
            Self::EatingGod | Self::HurtingOfficer => day_master_element.child(),
            Self::DirectWealth | Self::IndirectWealth => day_master_element.controlled(),
            Self::DirectOfficer | Self::SevenKillings => day_master_element.controller(),
            Self::DirectResource | Self::IndirectResource => day_master_element.generator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::element::ALL_ELEMENTS;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_comparison_is_friend() {
        for dm in ALL_STEMS {
            assert_eq!(TenGod::of_stem(dm, dm), TenGod::Friend);
        }
    }

    #[test]
    fn coverage_over_all_pairs() {
        // Every (day master, target) pair maps to exactly one god, and each
        // day master sees all ten gods across the 10 targets.
        for dm in ALL_STEMS {
            let mut seen = std::collections::HashSet::new();
            for target in ALL_STEMS {
                seen.insert(TenGod::of_stem(dm, target));
            }
            assert_eq!(seen.len(), 10, "{dm:?}");
        }
    }

    #[test]
    fn known_relations() {
        // Geng (yang metal) controls Jia (yang wood): Seven Killings.
        assert_eq!(TenGod::of_stem(Stem::Jia, Stem::Geng), TenGod::SevenKillings);
        // Xin (yin metal) vs Jia: Direct Officer.
        assert_eq!(TenGod::of_stem(Stem::Jia, Stem::Xin), TenGod::DirectOfficer);
        // Bing (yang fire) vs Jia: Eating God.
        assert_eq!(TenGod::of_stem(Stem::Jia, Stem::Bing), TenGod::EatingGod);
        // Gui (yin water) vs Jia: Direct Resource.
        assert_eq!(TenGod::of_stem(Stem::Jia, Stem::Gui), TenGod::DirectResource);
        // Yi day master vs Xin stem: both yin, metal controls wood.
        assert_eq!(TenGod::of_stem(Stem::Yi, Stem::Xin), TenGod::SevenKillings);
    }

    #[test]
    fn branch_uses_main_qi() {
        // Zi main qi is Gui (yin water); vs Ren day master: Rob Wealth.
        assert_eq!(TenGod::of_branch(Stem::Ren, Branch::Zi), TenGod::RobWealth);
        for b in ALL_BRANCHES {
            assert_eq!(
                TenGod::of_branch(Stem::Jia, b),
                TenGod::of_stem(Stem::Jia, b.main_qi())
            );
        }
    }

    #[test]
    fn element_for_round_trip() {
        for dm_elem in ALL_ELEMENTS {
            assert_eq!(TenGod::Friend.element_for(dm_elem), dm_elem);
            assert_eq!(TenGod::EatingGod.element_for(dm_elem), dm_elem.child());
            assert_eq!(TenGod::DirectWealth.element_for(dm_elem), dm_elem.controlled());
            assert_eq!(TenGod::SevenKillings.element_for(dm_elem), dm_elem.controller());
            assert_eq!(TenGod::DirectResource.element_for(dm_elem), dm_elem.generator());
        }
    }
}

//! The ten Heavenly Stems (Tian Gan).
//!
//! Stems pair off by element (two per element, yang first) and cycle with
//! period 10. Offset arithmetic is modular; `from_index` accepts any integer.

use crate::element::{Element, Polarity};

/// The ten Heavenly Stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (Jia=0 .. Gui=9).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// CJK glyph.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based cycle position (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem from a cycle position, normalized modulo 10.
    pub const fn from_index(index: i64) -> Stem {
        ALL_STEMS[(index.rem_euclid(10)) as usize]
    }

    /// Fixed element affinity: two consecutive stems share an element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
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

    /// Stem `offset` steps forward in the cycle.
    pub const fn next(self, offset: i64) -> Stem {
        Stem::from_index(self.index() as i64 + offset)
    }

    /// Stem `offset` steps backward in the cycle.
    pub const fn previous(self, offset: i64) -> Stem {
        Stem::from_index(self.index() as i64 - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn cyclic_closure() {
        for s in ALL_STEMS {
            for k in [0i64, 1, 3, 9, 10, 25, -7] {
                assert_eq!(s.next(k).previous(k), s, "{s:?} offset {k}");
            }
        }
    }

    #[test]
    fn from_index_negative() {
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(-10), Stem::Jia);
    }

    #[test]
    fn element_pairs() {
        for s in ALL_STEMS {
            // Jia/Yi wood, Bing/Ding fire, ...
            assert_eq!(s.element(), Element::from_index(s.index() as i64 / 2));
        }
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }
}

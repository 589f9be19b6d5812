//! The sexagenary (60-term) stem-branch cycle.
//!
//! Only 60 of the 120 stem/branch pairings occur: stem and branch must agree
//! in parity, i.e. `stem_index mod 5 == branch_index mod 6` never fails for
//! a pair built from a shared cycle position. The cycle index round-trips via
//! `(6*stem - 5*branch) mod 60`.

use crate::branch::Branch;
use crate::stem::Stem;

/// One term of the sexagenary cycle: a (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Term at a 0-59 cycle position, normalized modulo 60.
    pub const fn from_index(index: i64) -> StemBranch {
        StemBranch {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// 0-59 cycle position. Inverse of [`StemBranch::from_index`] for the
    /// 60 valid pairs.
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        ((6 * s - 5 * b + 60) % 60) as u8
    }

    /// Two-glyph CJK form, e.g. "甲子".
    pub fn character(self) -> String {
        format!("{}{}", self.stem.character(), self.branch.character())
    }

    /// Hyphenated pinyin form, e.g. "Jia-Zi".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Term `offset` steps forward; both members advance together, which
    /// preserves validity.
    pub const fn next(self, offset: i64) -> StemBranch {
        StemBranch {
            stem: self.stem.next(offset),
            branch: self.branch.next(offset),
        }
    }

    /// Term `offset` steps backward.
    pub const fn previous(self, offset: i64) -> StemBranch {
        StemBranch {
            stem: self.stem.previous(offset),
            branch: self.branch.previous(offset),
        }
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for i in 0..60i64 {
            let sb = StemBranch::from_index(i);
            assert_eq!(sb.index() as i64, i, "index {i}");
        }
    }

    #[test]
    fn cycle_endpoints() {
        let jia_zi = StemBranch::from_index(0);
        assert_eq!(jia_zi.character(), "甲子");
        let gui_hai = StemBranch::from_index(59);
        assert_eq!(gui_hai.character(), "癸亥");
    }

    #[test]
    fn next_previous_wrap() {
        let jia_zi = StemBranch::from_index(0);
        assert_eq!(jia_zi.next(1).character(), "乙丑");
        assert_eq!(jia_zi.previous(1).character(), "癸亥");
        assert_eq!(jia_zi.next(60), jia_zi);
    }

    #[test]
    fn from_index_normalizes() {
        assert_eq!(StemBranch::from_index(-1), StemBranch::from_index(59));
        assert_eq!(StemBranch::from_index(120), StemBranch::from_index(0));
    }

    #[test]
    fn parity_invariant() {
        // stem mod 5 == branch mod 6 for every valid term.
        for i in 0..60i64 {
            let sb = StemBranch::from_index(i);
            assert_eq!(sb.stem.index() % 5, sb.branch.index() % 6);
        }
    }

    #[test]
    fn display_uses_pinyin() {
        let sb = StemBranch::new(Stem::Wu, Branch::Zi);
        assert_eq!(sb.to_string(), "Wu-Zi");
    }
}

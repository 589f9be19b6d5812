//! The Five Elements (Wu Xing) and the yin/yang polarity.
//!
//! The five elements form two fixed cycles: generation (Wood feeds Fire,
//! Fire makes Earth, Earth bears Metal, Metal carries Water, Water nourishes
//! Wood) and control (Wood parts Earth, Earth dams Water, Water quenches
//! Fire, Fire melts Metal, Metal chops Wood). Control is "skip one" in the
//! generation order. Every pairwise score in the engine reduces to these two
//! relations plus a polarity comparison.

/// Yin/yang polarity carried by every stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn opposite(self) -> Polarity {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

/// The Five Elements in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order (Wood=0 .. Water=4).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// CJK glyph.
    pub const fn character(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based position in the generation cycle (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element from a cycle position, normalized modulo 5.
    pub const fn from_index(index: i64) -> Element {
        ALL_ELEMENTS[(index.rem_euclid(5)) as usize]
    }

    /// Whether `self` generates `other` (next in the cycle).
    pub const fn generates(self, other: Element) -> bool {
        (self.index() + 1) % 5 == other.index()
    }

    /// Whether `self` controls `other` (skip one in the cycle).
    pub const fn controls(self, other: Element) -> bool {
        (self.index() + 2) % 5 == other.index()
    }

    /// The element that generates `self` ("resource").
    pub const fn generator(self) -> Element {
        Element::from_index(self.index() as i64 - 1)
    }

    /// The element `self` generates ("output").
    pub const fn child(self) -> Element {
        Element::from_index(self.index() as i64 + 1)
    }

    /// The element `self` controls ("wealth").
    pub const fn controlled(self) -> Element {
        Element::from_index(self.index() as i64 + 2)
    }

    /// The element that controls `self` ("officer").
    pub const fn controller(self) -> Element {
        Element::from_index(self.index() as i64 - 2)
    }
}

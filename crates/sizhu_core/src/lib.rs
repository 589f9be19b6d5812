//! Core value types of the Four Pillars engine.
//!
//! Two cyclic symbol sets (ten Heavenly Stems, twelve Earthly Branches)
//! compose into the 60-term sexagenary cycle. Every derived quantity in the
//! engine — Ten God categories, life stages, pairwise interactions — is a
//! pure function over these closed enumerations and their static tables.
//! No I/O, no state, no failure modes.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod life_stage;
pub mod relations;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch, HiddenStems};
pub use cycle::StemBranch;
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use life_stage::{ALL_LIFE_STAGES, LifeStage};
pub use relations::{PairRelation, analyze};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod};

//! Chart interpretation: pattern classification, useful-god recommendation,
//! major luck cycles, and symbolic stars.

pub mod luck;
pub mod pattern;
pub mod shensha;
pub mod useful_god;

pub use luck::{Gender, MajorCycle, major_cycles, runs_forward};
pub use pattern::{Pattern, PatternMethod, branch_at_stage, classify};
pub use shensha::{ALL_STARS, CustomRuleRegistry, Star, stars_at, stars_by_pillar};
pub use useful_god::{UsefulGodAnalysis, UsefulGodMethod, useful_god};

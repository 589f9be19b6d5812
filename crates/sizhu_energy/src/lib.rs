//! The elemental energy model.
//!
//! Scores a Four Pillars chart: per-pillar stem/branch energy (seasonal
//! weighting, rooting with distance decay), branch combination bonuses, the
//! aggregated Five-Element and Ten-God strength vectors, and the thermal
//! balance used by the climate method.

pub mod combos;
pub mod energy;
pub mod seasonal;
pub mod strength;
pub mod thermal;

pub use combos::{BranchCombo, ComboKind, detect_combos, has_full_combo};
pub use energy::{branch_energy, root_score, stem_energy};
pub use seasonal::seasonal_coefficient;
pub use strength::{StrengthReport, analyze_strengths};
pub use thermal::{ThermalBalance, thermal_balance};

//! Four Pillars chart construction.
//!
//! Turns a civil timestamp (and optionally a birthplace) into the four
//! sexagenary pillars. The year and month pillars follow the solar terms
//! computed by `sizhu_solar`; the day pillar is a pure calendar-day count;
//! the hour pillar honours the double-hour system, optionally after a true
//! solar time correction for the birthplace.

pub mod construct;
pub mod location;
pub mod pillars;

pub use construct::{chart_from_civil, chart_from_civil_at};
pub use location::Location;
pub use pillars::{ALL_ROLES, FourPillars, PillarRole};

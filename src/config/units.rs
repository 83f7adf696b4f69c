//! Unit names accepted by unit-aware lookups.
//!
//! A `UNITS` entry may name a unit instead of giving a number. Names resolve to
//! machine units per millimetre (linear) or per degree (angular).

use core::f64::consts::PI;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Linear unit names and their value in units per millimetre.
pub const LINEAR_UNITS: [(&str, f64); 5] = [
    ("mm", 1.0),
    ("metric", 1.0),
    ("in", 1.0 / MM_PER_INCH),
    ("inch", 1.0 / MM_PER_INCH),
    ("imperial", 1.0 / MM_PER_INCH),
];

/// Angular unit names and their value in units per degree.
pub const ANGULAR_UNITS: [(&str, f64); 6] = [
    ("deg", 1.0),
    ("degree", 1.0),
    ("grad", 0.9),
    ("gon", 0.9),
    ("rad", PI / 180.0),
    ("radian", PI / 180.0),
];

/// Resolve a linear unit name (case-insensitive).
pub fn linear_unit(name: &str) -> Option<f64> {
    lookup(&LINEAR_UNITS, name)
}

/// Resolve an angular unit name (case-insensitive).
pub fn angular_unit(name: &str) -> Option<f64> {
    lookup(&ANGULAR_UNITS, name)
}

fn lookup(table: &[(&str, f64)], name: &str) -> Option<f64> {
    let name = name.trim();
    table
        .iter()
        .find(|(unit, _)| unit.eq_ignore_ascii_case(name))
        .map(|&(_, value)| value)
}

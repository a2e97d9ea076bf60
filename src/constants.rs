//! # Constants and type definitions for rvbasis
//!
//! This module centralizes the **numerical constants** and **parameter key names**
//! shared by the basis registry, the geometric converter and the parameter tables.
//!
//! ## Overview
//!
//! - Angular conversion factors (degrees ↔ radians)
//! - The eccentricity clamp applied to unphysical fits
//! - Key names of the canonical (CPS) basis

// -------------------------------------------------------------------------------------------------
// Numerical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// One full turn in degrees
pub const FULL_TURN_DEG: f64 = 360.0;

/// Eccentricity substituted when `sqrt(ecosw² + esinw²) >= 1`.
///
/// Fitting pipelines regularly wander through unphysical regions of parameter
/// space; the conversion keeps going with this bounded value instead of failing.
pub const MAX_ECCENTRICITY: f64 = 0.99;

// -------------------------------------------------------------------------------------------------
// Parameter keys
// -------------------------------------------------------------------------------------------------

/// Per-planet keys of the canonical (CPS) basis, in output order.
pub const CPS_PARAMS: [&str; 5] = ["per", "tp", "e", "w", "k"];

/// Number of per-planet parameters in every supported basis.
pub const PARAMS_PER_PLANET: usize = 5;

/// Namespaced parameter key, e.g. `planet_key("per", 2) == "per2"`.
pub fn planet_key(key: &str, planet: usize) -> String {
    format!("{key}{planet}")
}

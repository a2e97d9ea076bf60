//! # Unit-bearing angles
//!
//! The canonical basis stores the argument of periastron in **degrees**, while the
//! `"per tc e w k"` fitting basis carries it in **radians**. Both show up as a bare
//! `f64` inside a [`ParamRecord`](crate::params::ParamRecord), so the conversion
//! code wraps them in [`Degrees`] and [`Radians`] as soon as they are read and
//! unwraps them only when writing back.
//!
//! ## Normalization
//!
//! [`Degrees::normalized`] maps any finite angle into `[0, 360)` with a Euclidean
//! remainder, then folds an exact `360.0` (produced by rounding on tiny negative
//! inputs) back to `0.0`. For the `[-180, 180]` output of `atan2` this is the same
//! as adding one full turn to negative angles.

use std::fmt;

use crate::constants::{FULL_TURN_DEG, RADEG};

/// Angle expressed in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f64);

/// Angle expressed in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Degrees {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> Radians {
        Radians(self.0 * RADEG)
    }

    /// Bring the angle into `[0, 360)`.
    ///
    /// Return
    /// ------
    /// * The normalized angle. `NaN` is returned unchanged, infinities become `NaN`.
    pub fn normalized(self) -> Degrees {
        if self.0.is_infinite() {
            return Degrees(f64::NAN);
        }
        let mut w = self.0.rem_euclid(FULL_TURN_DEG);
        // (-1e-300).rem_euclid(360.0) rounds to 360.0
        if w == FULL_TURN_DEG {
            w = 0.0;
        }
        Degrees(w)
    }
}

impl Radians {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 / RADEG)
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} rad", self.0)
    }
}

#[cfg(test)]
mod angle_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_unit_conversion() {
        assert_relative_eq!(Degrees(180.0).to_radians().value(), PI, epsilon = 1e-15);
        assert_relative_eq!(Radians(PI / 4.0).to_degrees().value(), 45.0, epsilon = 1e-12);

        let d: Degrees = Radians(PI / 2.0).into();
        assert_relative_eq!(d.value(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_range() {
        assert_eq!(Degrees(-90.0).normalized(), Degrees(270.0));
        assert_eq!(Degrees(-180.0).normalized(), Degrees(180.0));
        assert_eq!(Degrees(0.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(-720.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(45.0).normalized(), Degrees(45.0));
    }

    #[test]
    fn test_normalized_tiny_negative_folds_to_zero() {
        let w = Degrees(-1e-300).normalized();
        assert_eq!(w, Degrees(0.0));
        assert!(w.value() < 360.0);
    }

    #[test]
    fn test_normalized_large_angles() {
        let w = Degrees(-1e20).normalized();
        assert!((0.0..360.0).contains(&w.value()), "w = {w}");

        assert_relative_eq!(Degrees(725.0).normalized().value(), 5.0, epsilon = 1e-12);
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(-360.0).normalized(), Degrees(0.0));
    }

    #[test]
    fn test_normalized_matches_single_turn_shift() {
        for w in [-179.5, -90.25, -1e-9, -45.0, 0.0, 12.5, 180.0] {
            let shifted = if w < 0.0 { w + 360.0 } else { w };
            assert_eq!(Degrees(w).normalized(), Degrees(shifted), "w = {w}");
        }
    }

    #[test]
    fn test_normalized_non_finite() {
        assert!(Degrees(f64::NAN).normalized().value().is_nan());
        assert!(Degrees(f64::NEG_INFINITY).normalized().value().is_nan());
    }
}

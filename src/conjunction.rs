//! # Conjunction ↔ periastron conversion
//!
//! Radial-velocity fits are usually parameterized by the **time of inferior
//! conjunction** `tc` (directly constrained by transits), whereas the canonical
//! Keplerian model needs the **time of periastron** `tp`. At conjunction the true
//! anomaly is known in closed form, `f = π/2 − ω`, so the two epochs are related by
//! Kepler's equation without any iterative solve:
//!
//! ```text
//! E  = 2·atan( tan(f/2) · sqrt((1−e)/(1+e)) )
//! tp = tc − P/(2π) · (E − e·sin E)
//! ```
//!
//! ## Provided functionality
//!
//! - [`conjunction_to_periastron`] – `(P, tc, e·cosω, e·sinω) → (tp, e, ω[deg])`
//! - [`periastron_to_conjunction`] – exact inverse for `tc` given `(P, tp, e, ω[deg])`
//! - [`true_to_eccentric`] / [`eccentric_to_mean`] – anomaly helpers
//!
//! ## Degeneracies
//!
//! An eccentricity `>= 1` is **not** an error: it is silently replaced by
//! [`MAX_ECCENTRICITY`] so that optimizers stepping through unphysical regions
//! keep running. Non-finite inputs propagate through the formulas unchanged.

use tracing::trace;

use crate::{
    angle::{Degrees, Radians},
    constants::{DPI, MAX_ECCENTRICITY},
};

/// Result of a conjunction → periastron conversion.
///
/// Units
/// -----
/// * `time_of_periastron`: same time unit as the input `tc`.
/// * `eccentricity`: unitless, in `[0, 1)` (clamped at 0.99).
/// * `periastron_argument`: degrees, in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriastronSolution {
    pub time_of_periastron: f64,
    pub eccentricity: f64,
    pub periastron_argument: Degrees,
}

/// Convert a true anomaly into the eccentric anomaly of an elliptic orbit.
///
/// Uses `tan(E/2) = sqrt((1−e)/(1+e)) · tan(f/2)`, which keeps `E` on the same
/// branch as `f` within `(−π, π)`.
pub fn true_to_eccentric(true_anomaly: Radians, e: f64) -> Radians {
    let tan_half_f = (true_anomaly.value() / 2.0).tan();
    Radians(2.0 * (tan_half_f * ((1.0 - e) / (1.0 + e)).sqrt()).atan())
}

/// Mean anomaly from eccentric anomaly (Kepler's equation).
pub fn eccentric_to_mean(eccentric_anomaly: Radians, e: f64) -> Radians {
    let ee = eccentric_anomaly.value();
    Radians(ee - e * ee.sin())
}

/// Mean anomaly swept between periastron and inferior conjunction.
fn mean_anomaly_at_conjunction(e: f64, w: Degrees) -> Radians {
    // true anomaly during conjunction
    let f = Radians(std::f64::consts::FRAC_PI_2 - w.to_radians().value());
    eccentric_to_mean(true_to_eccentric(f, e), e)
}

/// Convert `(P, tc, e·cosω, e·sinω)` into `(tp, e, ω)`.
///
/// Arguments
/// ---------
/// * `period` – Orbital period `P`.
/// * `time_of_conjunction` – Epoch of inferior conjunction `tc`.
/// * `ecosw` – `e·cos(ω)`.
/// * `esinw` – `e·sin(ω)`.
///
/// Return
/// ------
/// * A [`PeriastronSolution`] with `tp`, `e` (clamped to 0.99 when `>= 1`) and
///   `ω` in degrees within `[0, 360)`.
///
/// Example
/// -------
/// ```rust
/// use rvbasis::conjunction::conjunction_to_periastron;
///
/// let sol = conjunction_to_periastron(1.0, 0.0, 0.5, 0.5);
/// assert!((sol.eccentricity - 0.707_106_78).abs() < 1e-8);
/// assert!((sol.periastron_argument.value() - 45.0).abs() < 1e-10);
/// assert!((sol.time_of_periastron + 0.016_573_54).abs() < 1e-7);
/// ```
pub fn conjunction_to_periastron(
    period: f64,
    time_of_conjunction: f64,
    ecosw: f64,
    esinw: f64,
) -> PeriastronSolution {
    let mut e = (ecosw.powi(2) + esinw.powi(2)).sqrt();
    if e >= 1.0 {
        trace!(eccentricity = e, "eccentricity >= 1, clamping to {MAX_ECCENTRICITY}");
        e = MAX_ECCENTRICITY;
    }

    let w = Radians(esinw.atan2(ecosw)).to_degrees().normalized();

    let mean_anomaly = mean_anomaly_at_conjunction(e, w);
    let tp = time_of_conjunction - period / DPI * mean_anomaly.value();

    PeriastronSolution {
        time_of_periastron: tp,
        eccentricity: e,
        periastron_argument: w,
    }
}

/// Recover the time of conjunction from canonical elements.
///
/// This is the algebraic inverse of the last step of [`conjunction_to_periastron`]:
/// `tc = tp + P/(2π) · (E − e·sin E)` with `E` evaluated at `f = π/2 − ω`.
/// The eccentricity is used as given (no clamping).
///
/// Arguments
/// ---------
/// * `period` – Orbital period `P`.
/// * `time_of_periastron` – Epoch of periastron `tp`.
/// * `eccentricity` – `e`, expected in `[0, 1)`.
/// * `periastron_argument` – `ω` in degrees.
pub fn periastron_to_conjunction(
    period: f64,
    time_of_periastron: f64,
    eccentricity: f64,
    periastron_argument: Degrees,
) -> f64 {
    let mean_anomaly = mean_anomaly_at_conjunction(eccentricity, periastron_argument);
    time_of_periastron + period / DPI * mean_anomaly.value()
}

#[cfg(test)]
mod conjunction_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_values() {
        let sol = conjunction_to_periastron(1.0, 0.0, 0.5, 0.5);

        assert_relative_eq!(sol.time_of_periastron, -1.657354e-02, max_relative = 1e-5);
        assert_relative_eq!(sol.eccentricity, 7.071067e-01, max_relative = 1e-5);
        assert_relative_eq!(sol.periastron_argument.value(), 45.0, max_relative = 1e-5);
    }

    #[test]
    fn test_eccentricity_clamp() {
        for (ecosw, esinw) in [(1.0, 0.0), (0.8, 0.8), (-3.0, 2.0), (0.0, -1.0)] {
            let sol = conjunction_to_periastron(10.0, 100.0, ecosw, esinw);
            assert_eq!(sol.eccentricity, MAX_ECCENTRICITY);
            assert!(sol.time_of_periastron.is_finite());
        }
    }

    #[test]
    fn test_argument_in_range() {
        let mut ecosw = -0.7;
        while ecosw <= 0.7 {
            let mut esinw = -0.7;
            while esinw <= 0.7 {
                let w = conjunction_to_periastron(3.0, 0.0, ecosw, esinw).periastron_argument;
                assert!(
                    (0.0..360.0).contains(&w.value()),
                    "w = {w} for ({ecosw}, {esinw})"
                );
                esinw += 0.05;
            }
            ecosw += 0.05;
        }
    }

    #[test]
    fn test_negative_quadrant() {
        let sol = conjunction_to_periastron(5.0, 0.0, 0.0, -0.3);
        assert_relative_eq!(sol.periastron_argument.value(), 270.0, epsilon = 1e-10);
        assert_relative_eq!(sol.eccentricity, 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_circular_orbit() {
        // e = 0, ω = 0: conjunction sits a quarter period after periastron
        let sol = conjunction_to_periastron(4.0, 10.0, 0.0, 0.0);
        assert_eq!(sol.eccentricity, 0.0);
        assert_eq!(sol.periastron_argument, Degrees(0.0));
        assert_abs_diff_eq!(sol.time_of_periastron, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_tc() {
        let cases = [
            (1.0, 0.0, 0.5, 0.5),
            (12.3, 2455000.1, -0.2, 0.1),
            (365.25, 2458849.5, 0.05, -0.6),
            (0.8, -3.0, -0.4, -0.4),
        ];
        for (per, tc, ecosw, esinw) in cases {
            let sol = conjunction_to_periastron(per, tc, ecosw, esinw);
            let tc_back = periastron_to_conjunction(
                per,
                sol.time_of_periastron,
                sol.eccentricity,
                sol.periastron_argument,
            );
            assert_relative_eq!(tc_back, tc, epsilon = 1e-9, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let sol = conjunction_to_periastron(f64::NAN, 0.0, 0.1, 0.1);
        assert!(sol.time_of_periastron.is_nan());
        assert_relative_eq!(sol.eccentricity, 0.1 * 2f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_anomaly_helpers() {
        let e = 0.3;
        assert_abs_diff_eq!(true_to_eccentric(Radians(0.0), e).value(), 0.0);
        assert_abs_diff_eq!(eccentric_to_mean(Radians(0.0), e).value(), 0.0);

        let big_e = true_to_eccentric(Radians(1.0), e);
        assert!(big_e.value() < 1.0);
        assert_abs_diff_eq!(true_to_eccentric(Radians(1.0), 0.0).value(), 1.0, epsilon = 1e-14);
    }
}

//! # Keplerian fitting bases
//!
//! A **basis** is the set of five per-planet parameters a radial-velocity fit
//! samples in. Every basis can be converted to the canonical **CPS basis**
//! `per tp e w k` (period, time of periastron, eccentricity, argument of
//! periastron in degrees, velocity semi-amplitude).
//!
//! Supported bases:
//!
//! | name                          | variant                              |
//! |-------------------------------|--------------------------------------|
//! | `per tc secosw sesinw logk`   | [`BasisKind::SecoswSesinwLogk`]      |
//! | `per tc secosw sesinw k`      | [`BasisKind::SecoswSesinwK`]         |
//! | `per tc e w k`                | [`BasisKind::EccentricityArgument`]  |
//!
//! The `secosw`/`sesinw` pair (`√e·cos ω`, `√e·sin ω`) avoids the pile-up of
//! samples at `e = 0`, and `logk` keeps the semi-amplitude positive.
//!
//! ## Typical workflow
//!
//! ```rust
//! use rvbasis::basis::{is_valid_basis, transform::Basis};
//! use rvbasis::params::ParamRecord;
//!
//! assert!(is_valid_basis("per tc secosw sesinw k"));
//!
//! let basis = Basis::new("per tc secosw sesinw k", 1).unwrap();
//! let record: ParamRecord = [
//!     ("per1", 10.0),
//!     ("tc1", 2455000.0),
//!     ("secosw1", 0.1),
//!     ("sesinw1", 0.2),
//!     ("k1", 5.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let cps = basis.to_canonical(&record).unwrap();
//! assert!(cps.contains_key("tp1"));
//! assert!(cps.contains_key("secosw1"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{constants::PARAMS_PER_PLANET, rvbasis_errors::BasisError};

/// Conversion of parameter records between a fitting basis and the CPS basis.
pub mod transform;

/// Names of all supported bases, in registry order.
pub const BASIS_NAMES: [&str; 3] = [
    "per tc secosw sesinw logk",
    "per tc secosw sesinw k",
    "per tc e w k",
];

/// Closed set of supported fitting bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisKind {
    /// `per tc secosw sesinw logk`
    SecoswSesinwLogk,
    /// `per tc secosw sesinw k`
    SecoswSesinwK,
    /// `per tc e w k`, with `w` in radians
    EccentricityArgument,
}

impl BasisKind {
    pub const ALL: [BasisKind; 3] = [
        BasisKind::SecoswSesinwLogk,
        BasisKind::SecoswSesinwK,
        BasisKind::EccentricityArgument,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BasisKind::SecoswSesinwLogk => BASIS_NAMES[0],
            BasisKind::SecoswSesinwK => BASIS_NAMES[1],
            BasisKind::EccentricityArgument => BASIS_NAMES[2],
        }
    }

    /// Per-planet parameter keys, in the order they appear in the basis name.
    pub fn params(self) -> [&'static str; PARAMS_PER_PLANET] {
        match self {
            BasisKind::SecoswSesinwLogk => ["per", "tc", "secosw", "sesinw", "logk"],
            BasisKind::SecoswSesinwK => ["per", "tc", "secosw", "sesinw", "k"],
            BasisKind::EccentricityArgument => ["per", "tc", "e", "w", "k"],
        }
    }
}

impl FromStr for BasisKind {
    type Err = BasisError;

    /// Look a basis up by its exact registry name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BasisKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| BasisError::InvalidBasis(name.to_string()))
    }
}

impl fmt::Display for BasisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `name` is one of [`BASIS_NAMES`].
pub fn is_valid_basis(name: &str) -> bool {
    BASIS_NAMES.contains(&name)
}

/// All supported basis names, in registry order.
pub fn list_basis_names() -> &'static [&'static str] {
    &BASIS_NAMES
}

/// Human-readable listing of the supported bases, for CLI output.
///
/// ```text
/// Available bases:
/// per tc secosw sesinw logk
/// per tc secosw sesinw k
/// per tc e w k
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasisListing;

impl fmt::Display for BasisListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available bases:")?;
        write!(f, "{}", list_basis_names().join("\n"))
    }
}

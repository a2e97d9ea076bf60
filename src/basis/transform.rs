//! # Basis transformer
//!
//! [`Basis`] binds a [`BasisKind`] to a planet count and converts
//! [`ParamRecord`]s (or whole [`ParamTable`]s) between that basis and the
//! canonical CPS basis `per tp e w k`.
//!
//! ## Conventions
//!
//! - Outputs are **augmented copies** of the inputs: canonical keys are added next
//!   to the original ones, never in place of the whole record. Keys shared by both
//!   bases (`per`, `k`, and `e`/`w` for `per tc e w k`) are overwritten.
//! - Canonical `w` is in **degrees**; the `w` of `per tc e w k` is in **radians**.
//! - Either every planet of a record converts or the call fails; a table fails as
//!   a whole on its first bad row.
//! - Eccentricities `>= 1` are clamped to `0.99`, see
//!   [`conjunction_to_periastron`].

use tracing::debug;

use crate::{
    angle::{Degrees, Radians},
    basis::BasisKind,
    conjunction::{conjunction_to_periastron, periastron_to_conjunction},
    constants::{planet_key, CPS_PARAMS},
    params::{table::ParamTable, ParamRecord},
    rvbasis_errors::{BasisError, Result},
};

/// Canonical elements of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CpsElements {
    per: f64,
    tp: f64,
    e: f64,
    w: Degrees,
    k: f64,
}

impl CpsElements {
    fn read(record: &ParamRecord, planet: usize) -> Result<Self> {
        Ok(CpsElements {
            per: record.planet_value("per", planet)?,
            tp: record.planet_value("tp", planet)?,
            e: record.planet_value("e", planet)?,
            w: Degrees(record.planet_value("w", planet)?),
            k: record.planet_value("k", planet)?,
        })
    }

    fn write(&self, record: &mut ParamRecord, planet: usize) {
        record.set_planet_value("per", planet, self.per);
        record.set_planet_value("tp", planet, self.tp);
        record.set_planet_value("e", planet, self.e);
        record.set_planet_value("w", planet, self.w.value());
        record.set_planet_value("k", planet, self.k);
    }
}

/// `(√e·cos ω, √e·sin ω) → (e·cos ω, e·sin ω)`
fn sqrt_e_to_e_components(secosw: f64, sesinw: f64) -> (f64, f64) {
    let e = secosw.powi(2) + sesinw.powi(2);
    let se = e.sqrt();
    (se * secosw, se * sesinw)
}

/// Converter between one fitting basis and the CPS basis for a fixed number of planets.
///
/// A `Basis` can only be obtained through [`Basis::new`] or [`Basis::from_kind`],
/// both of which validate their inputs, so every instance is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basis {
    kind: BasisKind,
    num_planets: usize,
}

impl Basis {
    /// Build a transformer for the basis called `name`.
    ///
    /// Arguments
    /// ---------
    /// * `name` – One of [`BASIS_NAMES`](crate::basis::BASIS_NAMES), matched exactly.
    /// * `num_planets` – Number of planets in each record, at least 1.
    ///
    /// Errors
    /// ------
    /// * [`BasisError::InvalidBasis`] if `name` is not a supported basis.
    /// * [`BasisError::InvalidPlanetCount`] if `num_planets == 0`.
    pub fn new(name: &str, num_planets: usize) -> Result<Self> {
        Basis::from_kind(name.parse()?, num_planets)
    }

    pub fn from_kind(kind: BasisKind, num_planets: usize) -> Result<Self> {
        if num_planets == 0 {
            return Err(BasisError::InvalidPlanetCount(num_planets));
        }
        debug!(basis = kind.name(), num_planets, "basis transformer ready");
        Ok(Basis { kind, num_planets })
    }

    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn num_planets(&self) -> usize {
        self.num_planets
    }

    fn planets(&self) -> impl Iterator<Item = usize> {
        1..=self.num_planets
    }

    /// Namespaced keys of the bound basis, planet-major (`per1 tc1 ... per2 ...`).
    pub fn basis_columns(&self) -> Vec<String> {
        self.planets()
            .flat_map(|p| self.kind.params().map(|key| planet_key(key, p)))
            .collect()
    }

    /// Namespaced CPS keys, planet-major (`per1 tp1 e1 w1 k1 per2 ...`).
    pub fn canonical_columns(&self) -> Vec<String> {
        self.planets()
            .flat_map(|p| CPS_PARAMS.map(|key| planet_key(key, p)))
            .collect()
    }

    /// Read one planet in the bound basis and convert it to CPS elements.
    fn planet_to_canonical(&self, record: &ParamRecord, planet: usize) -> Result<CpsElements> {
        let per = record.planet_value("per", planet)?;
        let tc = record.planet_value("tc", planet)?;

        let (ecosw, esinw, k) = match self.kind {
            BasisKind::EccentricityArgument => {
                let e = record.planet_value("e", planet)?;
                let w = Radians(record.planet_value("w", planet)?);
                let k = record.planet_value("k", planet)?;
                (e * w.cos(), e * w.sin(), k)
            }
            BasisKind::SecoswSesinwLogk => {
                let secosw = record.planet_value("secosw", planet)?;
                let sesinw = record.planet_value("sesinw", planet)?;
                let logk = record.planet_value("logk", planet)?;
                let (ecosw, esinw) = sqrt_e_to_e_components(secosw, sesinw);
                (ecosw, esinw, logk.exp())
            }
            BasisKind::SecoswSesinwK => {
                let secosw = record.planet_value("secosw", planet)?;
                let sesinw = record.planet_value("sesinw", planet)?;
                let k = record.planet_value("k", planet)?;
                let (ecosw, esinw) = sqrt_e_to_e_components(secosw, sesinw);
                (ecosw, esinw, k)
            }
        };

        let sol = conjunction_to_periastron(per, tc, ecosw, esinw);
        Ok(CpsElements {
            per,
            tp: sol.time_of_periastron,
            e: sol.eccentricity,
            w: sol.periastron_argument,
            k,
        })
    }

    /// Convert one record from the bound basis to the CPS basis.
    ///
    /// Return
    /// ------
    /// * A copy of `params_in` extended with `per{i} tp{i} e{i} w{i} k{i}` for
    ///   every planet `i` in `1..=num_planets`.
    ///
    /// Errors
    /// ------
    /// * [`BasisError::MissingField`] naming the first absent key; nothing is returned
    ///   for the other planets.
    pub fn to_canonical(&self, params_in: &ParamRecord) -> Result<ParamRecord> {
        let elements = self
            .planets()
            .map(|p| self.planet_to_canonical(params_in, p).map(|el| (p, el)))
            .collect::<Result<Vec<_>>>()?;

        let mut params_out = params_in.clone();
        for (planet, el) in elements {
            el.write(&mut params_out, planet);
        }
        Ok(params_out)
    }

    /// Convert every row of `table` to the CPS basis, preserving row order.
    ///
    /// The output columns are the input columns followed by the CPS columns not
    /// already present.
    pub fn to_canonical_table(&self, table: &ParamTable) -> Result<ParamTable> {
        debug!(basis = self.name(), rows = table.len(), "converting table to CPS basis");
        let rows = table
            .iter()
            .map(|row| self.to_canonical(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.assemble_table(table, self.canonical_columns(), rows))
    }

    /// Convert one record from the CPS basis to the bound basis.
    ///
    /// Each planet must provide `per tp e w k` with `w` in degrees. The time of
    /// conjunction is recovered with [`periastron_to_conjunction`]; the remaining
    /// fields invert the forward formulas:
    ///
    /// * `per tc e w k`: `w` written back in radians.
    /// * `per tc secosw sesinw k`: `secosw = √e·cos ω`, `sesinw = √e·sin ω`.
    /// * `per tc secosw sesinw logk`: as above with `logk = ln k`.
    ///
    /// A non-positive `k` yields a non-finite `logk` rather than an error.
    pub fn from_canonical(&self, params_in: &ParamRecord) -> Result<ParamRecord> {
        let elements = self
            .planets()
            .map(|p| CpsElements::read(params_in, p).map(|el| (p, el)))
            .collect::<Result<Vec<_>>>()?;

        let mut params_out = params_in.clone();
        for (planet, el) in elements {
            let tc = periastron_to_conjunction(el.per, el.tp, el.e, el.w);
            let w = el.w.to_radians();

            params_out.set_planet_value("per", planet, el.per);
            params_out.set_planet_value("tc", planet, tc);
            match self.kind {
                BasisKind::EccentricityArgument => {
                    params_out.set_planet_value("e", planet, el.e);
                    params_out.set_planet_value("w", planet, w.value());
                    params_out.set_planet_value("k", planet, el.k);
                }
                BasisKind::SecoswSesinwLogk | BasisKind::SecoswSesinwK => {
                    let se = el.e.sqrt();
                    params_out.set_planet_value("secosw", planet, se * w.cos());
                    params_out.set_planet_value("sesinw", planet, se * w.sin());
                    if self.kind == BasisKind::SecoswSesinwLogk {
                        params_out.set_planet_value("logk", planet, el.k.ln());
                    } else {
                        params_out.set_planet_value("k", planet, el.k);
                    }
                }
            }
        }
        Ok(params_out)
    }

    /// Convert every row of `table` from the CPS basis to the bound basis.
    pub fn from_canonical_table(&self, table: &ParamTable) -> Result<ParamTable> {
        debug!(basis = self.name(), rows = table.len(), "converting table from CPS basis");
        let rows = table
            .iter()
            .map(|row| self.from_canonical(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.assemble_table(table, self.basis_columns(), rows))
    }

    fn assemble_table(
        &self,
        input: &ParamTable,
        added_columns: Vec<String>,
        rows: Vec<ParamRecord>,
    ) -> ParamTable {
        let mut out = ParamTable::with_columns(input.columns().to_vec());
        out.extend_columns(added_columns);
        rows.into_iter().for_each(|row| out.push(row));
        out
    }
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Basis Object <{}>", self.kind)
    }
}

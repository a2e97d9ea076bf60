//! # Parameter records
//!
//! A [`ParamRecord`] holds every orbital parameter of every planet for **one**
//! sample, keyed by a namespaced name `{key}{planet}` (`per1`, `tc1`, `k2`, ...).
//! Records are the unit of work of the basis transformer: a conversion never
//! mutates its input record, it clones it and adds the new keys alongside the
//! original ones.
//!
//! A [`ParamTable`](crate::params::table::ParamTable) is an ordered sequence of
//! records sharing a column layout, typically one row per posterior draw.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::planet_key,
    rvbasis_errors::{BasisError, Result},
};

/// Tabular parameter sets and their CSV representation.
pub mod table;

/// Namespaced parameter values for all planets of one sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamRecord(BTreeMap<String, f64>);

impl ParamRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Value of `key`, or [`BasisError::MissingField`] if absent.
    fn require(&self, key: &str) -> Result<f64> {
        self.get(key)
            .ok_or_else(|| BasisError::MissingField(key.to_string()))
    }

    /// Value of `{key}{planet}`, or [`BasisError::MissingField`] naming the full key.
    pub fn planet_value(&self, key: &str, planet: usize) -> Result<f64> {
        self.require(&planet_key(key, planet))
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn set_planet_value(&mut self, key: &str, planet: usize, value: f64) {
        self.0.insert(planet_key(key, planet), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParamRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        ParamRecord(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for ParamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "  {key:<10} = {value}")?;
        }
        Ok(())
    }
}

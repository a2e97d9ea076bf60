//! # Parameter tables
//!
//! Row-aligned collections of [`ParamRecord`]s, e.g. one row per posterior draw,
//! plus their CSV representation.
//!
//! The table keeps an explicit column order next to the rows: records themselves
//! are sorted maps, but a CSV written back to disk should keep the columns of the
//! file it came from, followed by the columns added during conversion.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use itertools::Itertools;

use crate::{
    params::ParamRecord,
    rvbasis_errors::{BasisError, Result},
};

/// Ordered rows of parameter records with a shared column layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamTable {
    columns: Vec<String>,
    rows: Vec<ParamRecord>,
}

impl ParamTable {
    /// Empty table with a fixed column layout.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamTable {
            columns: columns.into_iter().map(Into::into).unique().collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from records, taking columns in first-seen order.
    pub fn from_records(records: Vec<ParamRecord>) -> Self {
        let columns = records
            .iter()
            .flat_map(|r| r.keys().map(str::to_string))
            .unique()
            .collect();
        ParamTable {
            columns,
            rows: records,
        }
    }

    /// Append a row. Keys unknown to the table are added as new columns.
    pub fn push(&mut self, record: ParamRecord) {
        let new_columns: Vec<String> = record
            .keys()
            .filter(|k| !self.columns.iter().any(|c| c == k))
            .map(str::to_string)
            .collect();
        self.columns.extend(new_columns);
        self.rows.push(record);
    }

    /// Append columns that are not already part of the layout, keeping their order.
    pub fn extend_columns<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let merged = self
            .columns
            .drain(..)
            .chain(columns.into_iter().map(Into::into))
            .unique()
            .collect();
        self.columns = merged;
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ParamRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read a table from CSV data with a header row; every cell must be a float.
    ///
    /// Errors
    /// ------
    /// * [`BasisError::CsvError`] for malformed CSV or non-numeric cells.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let rows = csv_reader
            .deserialize::<ParamRecord>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        let mut table = ParamTable::with_columns(columns);
        table.rows = rows;
        Ok(table)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Write the table as CSV, columns in table order.
    ///
    /// Errors
    /// ------
    /// * [`BasisError::MissingColumn`] if a row lacks one of the table columns.
    /// * [`BasisError::CsvError`] / [`BasisError::IoError`] on write failure.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.columns)?;

        for (row_idx, row) in self.rows.iter().enumerate() {
            let fields = self
                .columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map(|v| v.to_string())
                        .ok_or_else(|| BasisError::MissingColumn {
                            row: row_idx,
                            column: column.clone(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            csv_writer.write_record(&fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.to_csv_writer(file)
    }
}

impl FromIterator<ParamRecord> for ParamTable {
    fn from_iter<I: IntoIterator<Item = ParamRecord>>(iter: I) -> Self {
        ParamTable::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParamTable {
    type Item = &'a ParamRecord;
    type IntoIter = std::slice::Iter<'a, ParamRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

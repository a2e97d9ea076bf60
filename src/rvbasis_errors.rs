use thiserror::Error;

#[derive(Error, Debug)]
pub enum BasisError {
    #[error("{0} not valid basis")]
    InvalidBasis(String),

    #[error("Invalid number of planets: {0} (expected at least 1)")]
    InvalidPlanetCount(usize),

    #[error("Missing parameter: {0}")]
    MissingField(String),

    #[error("Row {row} has no value for column {column}")]
    MissingColumn { row: usize, column: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BasisError>;

impl PartialEq for BasisError {
    fn eq(&self, other: &Self) -> bool {
        use BasisError::*;
        match (self, other) {
            (InvalidBasis(a), InvalidBasis(b)) => a == b,
            (InvalidPlanetCount(a), InvalidPlanetCount(b)) => a == b,
            (MissingField(a), MissingField(b)) => a == b,
            (
                MissingColumn { row: ra, column: ca },
                MissingColumn { row: rb, column: cb },
            ) => ra == rb && ca == cb,

            // not comparable: same variant is enough
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}

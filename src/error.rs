//! Custom error types for Gastos
//!
//! `LoadError` covers everything that can go wrong while reading the ledger.
//! It is fatal: without data there is nothing to show. `GastosError` is the
//! general error for the rest of the application and wraps `LoadError`.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PeriodError;

/// Failure while loading the expense ledger
#[derive(Error, Debug)]
pub enum LoadError {
    /// The ledger file does not exist
    #[error("Ledger file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The ledger file exists but could not be read
    #[error("Failed to read ledger: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed (bad quoting, wrong field count, invalid UTF-8)
    #[error("Malformed ledger: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Ledger is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row carries a date that none of the accepted formats understand
    #[error("Line {line}: invalid date '{value}'")]
    InvalidDate { line: u64, value: String },

    /// A row carries an amount that is not a number
    #[error("Line {line}: invalid amount '{value}'")]
    InvalidAmount { line: u64, value: String },

    /// A row has a blank category
    #[error("Line {line}: category is empty")]
    EmptyCategory { line: u64 },
}

impl LoadError {
    /// Line number of the offending row, if the error is tied to one
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::InvalidDate { line, .. }
            | Self::InvalidAmount { line, .. }
            | Self::EmptyCategory { line } => Some(*line),
            _ => None,
        }
    }
}

/// The main error type for Gastos operations
#[derive(Error, Debug)]
pub enum GastosError {
    /// The ledger could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid user input (period bounds, amounts typed on the command line)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl GastosError {
    /// Check if this is a ledger load failure
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GastosError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GastosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for GastosError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for GastosError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<PeriodError> for GastosError {
    fn from(err: PeriodError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for Gastos operations
pub type GastosResult<T> = Result<T, GastosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GastosError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::InvalidDate {
            line: 4,
            value: "31/02/2025".into(),
        };
        assert_eq!(err.to_string(), "Line 4: invalid date '31/02/2025'");
        assert_eq!(err.line(), Some(4));

        let err = LoadError::MissingColumn("valor");
        assert_eq!(err.to_string(), "Ledger is missing required column 'valor'");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_load_error_is_transparent() {
        let err: GastosError = LoadError::EmptyCategory { line: 2 }.into();
        assert!(err.is_load());
        assert_eq!(err.to_string(), "Line 2: category is empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GastosError = io_err.into();
        assert!(matches!(err, GastosError::Io(_)));
    }

    #[test]
    fn test_from_period_error() {
        let err: GastosError = PeriodError::InvalidMonth(13).into();
        assert!(err.is_validation());
    }
}

//! Storage layer for Gastos
//!
//! The record store: the expense ledger read once from CSV and kept in
//! memory, read-only, for the rest of the run. Also hosts the atomic file
//! helpers used for settings and exports.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use ledger::ColumnMapping;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::ExpenseRecord;

/// Immutable, ordered collection of expense records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    source: Option<PathBuf>,
    records: Vec<ExpenseRecord>,
}

impl RecordStore {
    /// Load the ledger from a CSV file
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or unreadable, lacks a required column,
    /// or any row is malformed. Nothing is loaded in that case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;

        let mut store = Self::from_reader(file)?;
        store.source = Some(path.to_path_buf());
        info!(path = %path.display(), records = store.len(), "ledger loaded");
        Ok(store)
    }

    /// Load the ledger from any CSV source (header row required)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mapping = ColumnMapping::from_headers(reader.headers()?)?;
        debug!(?mapping, "resolved ledger columns");

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row?;
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            records.push(mapping.parse_record(&row, line)?);
        }

        Ok(Self {
            source: None,
            records,
        })
    }

    /// Build a store from records already in memory
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    /// All records, in file order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the store was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct months (1-12) that have at least one record, sorted
    pub fn months(&self) -> Vec<u32> {
        self.records
            .iter()
            .map(ExpenseRecord::month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
data,descricao,valor,categoria
05/01/2025,Mercado,100.00,Food
2025-02-10,Aluguel,400.00,Rent
01/03/2025,\"Padaria, centro\",50.00,Food
";

    #[test]
    fn test_from_reader() {
        let store = RecordStore::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[1].category, "Rent");
        assert_eq!(
            store.records()[1].date,
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
        );
        assert_eq!(store.records()[2].description, "Padaria, centro");
        assert_eq!(store.records()[2].amount, Money::from_cents(5000));
        assert!(store.source().is_none());
    }

    #[test]
    fn test_categories_and_months() {
        let store = RecordStore::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.categories(), vec!["Food", "Rent"]);
        assert_eq!(store.months(), vec![1, 2, 3]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let store =
            RecordStore::from_reader("data,descricao,valor,categoria\n".as_bytes()).unwrap();
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn test_bad_row_aborts_load() {
        let csv = "data,descricao,valor,categoria\n05/01/2025,a,1.00,Food\nnope,b,2.00,Food\n";
        let err = RecordStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 3, .. }));
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let csv = "data,descricao,valor,categoria\n05/01/2025,a,1.00\n";
        let err = RecordStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_column() {
        let csv = "data,descricao,categoria\n05/01/2025,a,Food\n";
        let err = RecordStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("valor")));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gastos.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let store = RecordStore::load(&path).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = RecordStore::load(temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_out_of_range_amount_is_load_error() {
        let csv = "data,descricao,valor,categoria\n\
                   05/01/2025,a,50000000000000000.00,Food\n\
                   06/01/2025,b,50000000000000000.00,Food\n";
        let err = RecordStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidAmount { line: 2, .. }));
    }
}

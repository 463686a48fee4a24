//! CSV Export functionality
//!
//! Writes records back in the ledger's own layout, so an export can be
//! loaded again as a ledger.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{GastosError, GastosResult};
use crate::models::ExpenseRecord;
use crate::storage::ledger::{AMOUNT_COLUMN, CATEGORY_COLUMN, DATE_COLUMN, DESCRIPTION_COLUMN};
use crate::storage::write_atomic;

/// Default file name offered for downloads
pub const EXPORT_FILE_NAME: &str = "gastos.csv";

/// MIME type of the export
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Date format used in exported rows
pub const EXPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Write records as CSV: `data,descricao,valor,categoria`
pub fn export_records_csv<'a, W, I>(records: I, writer: W) -> GastosResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([DATE_COLUMN, DESCRIPTION_COLUMN, AMOUNT_COLUMN, CATEGORY_COLUMN])?;

    let mut count = 0;
    for record in records {
        let date = record.date.format(EXPORT_DATE_FORMAT).to_string();
        let amount = record.amount.to_decimal_string();
        csv_writer.write_record([
            date.as_str(),
            record.description.as_str(),
            amount.as_str(),
            record.category.as_str(),
        ])?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(e.to_string()))?;
    Ok(count)
}

/// Export records to a file, replacing it atomically
pub fn export_records_to_file<'a, I>(records: I, path: &Path) -> GastosResult<usize>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut count = 0;
    write_atomic(path, |writer| {
        count = export_records_csv(records, writer)?;
        Ok(())
    })
    .map_err(|e| match e {
        GastosError::Io(msg) => GastosError::Export(format!(
            "Failed to write {}: {}",
            path.display(),
            msg
        )),
        other => other,
    })?;

    info!(path = %path.display(), records = count, "records exported");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterCriteria, Money, MonthRange};
    use crate::services::filter;
    use crate::storage::RecordStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                "Mercado",
                Money::from_cents(10000),
                "Food",
            ),
            ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
                "Aluguel, apto \"2B\"",
                Money::from_cents(40000),
                "Rent",
            ),
            ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                "Estorno",
                Money::from_cents(-5005),
                "Food",
            ),
        ]
    }

    #[test]
    fn test_export_format() {
        let records = sample();
        let mut output = Vec::new();
        let count = export_records_csv(&records, &mut output).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "data,descricao,valor,categoria");
        assert_eq!(lines[1], "05/01/2025,Mercado,100.00,Food");
        assert_eq!(lines[2], "10/02/2025,\"Aluguel, apto \"\"2B\"\"\",400.00,Rent");
        assert_eq!(lines[3], "01/03/2025,Estorno,-50.05,Food");
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut output = Vec::new();
        let count = export_records_csv(&[], &mut output).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(output).unwrap(), "data,descricao,valor,categoria\n");
    }

    #[test]
    fn test_round_trip_through_loader() {
        let records = sample();
        for criteria in [
            FilterCriteria::new(["Food"], MonthRange::new(1, 3).unwrap()),
            FilterCriteria::new(["Food", "Rent"], MonthRange::single(2).unwrap()),
            FilterCriteria::all_of(&records),
        ] {
            let filtered = filter(&records, &criteria);
            let mut output = Vec::new();
            export_records_csv(filtered.iter().copied(), &mut output).unwrap();

            let reloaded = RecordStore::from_reader(output.as_slice()).unwrap();
            let expected: Vec<ExpenseRecord> = filtered.into_iter().cloned().collect();
            assert_eq!(reloaded.records(), expected.as_slice());
        }
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(EXPORT_FILE_NAME);
        let records = sample();

        let count = export_records_to_file(&records, &path).unwrap();
        assert_eq!(count, 3);

        let store = RecordStore::load(&path).unwrap();
        assert_eq!(store.records(), records.as_slice());
    }
}

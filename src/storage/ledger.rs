//! Ledger CSV parsing
//!
//! Resolves the header row into a fixed column mapping once, then turns each
//! row into a validated `ExpenseRecord`. Any bad row aborts the whole load.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::error::LoadError;
use crate::models::record::normalize_category;
use crate::models::{ExpenseRecord, Money};

/// Header names of the required columns
pub const DATE_COLUMN: &str = "data";
pub const DESCRIPTION_COLUMN: &str = "descricao";
pub const AMOUNT_COLUMN: &str = "valor";
pub const CATEGORY_COLUMN: &str = "categoria";

/// Date formats accepted in the `data` column, day-first before ISO
///
/// `%Y` also takes two digits, so the two-digit year form has to come first.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// Date-time formats whose time component is dropped
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: usize,
    pub amount_column: usize,
    pub category_column: usize,
}

impl ColumnMapping {
    /// Find the required columns by name
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace and a
    /// leading byte-order mark. Column order is free and extra columns are
    /// ignored.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| {
                    h.trim_start_matches('\u{feff}')
                        .trim()
                        .eq_ignore_ascii_case(name)
                })
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            date_column: find(DATE_COLUMN)?,
            description_column: find(DESCRIPTION_COLUMN)?,
            amount_column: find(AMOUNT_COLUMN)?,
            category_column: find(CATEGORY_COLUMN)?,
        })
    }

    /// Turn one CSV row into a record
    ///
    /// `line` is the 1-based line number used in error messages.
    pub fn parse_record(
        &self,
        record: &StringRecord,
        line: u64,
    ) -> Result<ExpenseRecord, LoadError> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let date_str = field(self.date_column);
        let date = parse_date(date_str).ok_or_else(|| LoadError::InvalidDate {
            line,
            value: date_str.to_string(),
        })?;

        let amount_str = field(self.amount_column);
        let amount = Money::parse(amount_str).map_err(|_| LoadError::InvalidAmount {
            line,
            value: amount_str.to_string(),
        })?;

        let category = normalize_category(field(self.category_column))
            .ok_or(LoadError::EmptyCategory { line })?;

        Ok(ExpenseRecord {
            date,
            description: field(self.description_column).to_string(),
            amount,
            category,
        })
    }
}

/// Parse a date in any of the accepted forms
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.date())
        })
}

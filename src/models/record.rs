//! Expense record model
//!
//! One row of the ledger: when the money went out, what it was for, how much
//! and under which category.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single expense ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-text label
    #[serde(default)]
    pub description: String,

    /// Signed amount, currency implicit (BRL)
    pub amount: Money,

    /// Category label (open set, taken from the data)
    pub category: String,
}

impl ExpenseRecord {
    /// Create a new record
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Month of year (1-12) the expense falls in
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%d/%m/%Y"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Normalize a category label: surrounding whitespace is dropped and a
/// label left empty is rejected.
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

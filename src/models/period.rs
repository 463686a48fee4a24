//! Period representation
//!
//! A period is an inclusive range of months of the year. The year itself is
//! never compared: a ledger covers a single year, so "March" is unambiguous.
//! Ledgers spanning several years would fold the same month of different
//! years together; this is a known limitation.
//!
//! The dashboard selector only offers the first four months, labelled in
//! Portuguese (`Jan`, `Fev`, `Mar`, `Abr`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

use chrono::{Datelike, NaiveDate};

/// Portuguese three-letter month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Errors building a period
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("period start ({start}) is after its end ({end})")]
    Reversed { start: u32, end: u32 },

    #[error("unknown period '{0}', expected one of Jan, Fev, Mar, Abr")]
    UnknownLabel(String),
}

/// Abbreviation for a month number, or `None` outside 1-12
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_ABBREVIATIONS.get(idx as usize))
        .copied()
}

/// Inclusive month-of-year range, `start <= end`, both in 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthRange", into = "RawMonthRange")]
pub struct MonthRange {
    start: u32,
    end: u32,
}

impl MonthRange {
    /// The whole year
    pub const FULL_YEAR: MonthRange = MonthRange { start: 1, end: 12 };

    /// Create a range, validating both bounds
    pub fn new(start: u32, end: u32) -> Result<Self, PeriodError> {
        for month in [start, end] {
            if !(1..=12).contains(&month) {
                return Err(PeriodError::InvalidMonth(month));
            }
        }
        if start > end {
            return Err(PeriodError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single month
    pub fn single(month: u32) -> Result<Self, PeriodError> {
        Self::new(month, month)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Check whether a month number (1-12) is inside the range
    pub fn contains_month(&self, month: u32) -> bool {
        self.start <= month && month <= self.end
    }

    /// Check whether a date falls inside the range, ignoring its year
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_month(date.month())
    }

    /// Iterate over the month numbers in the range
    pub fn months(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn is_full_year(&self) -> bool {
        *self == Self::FULL_YEAR
    }
}

impl Default for MonthRange {
    fn default() -> Self {
        Self::FULL_YEAR
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = month_abbreviation(self.start).unwrap_or("?");
        let end = month_abbreviation(self.end).unwrap_or("?");
        if self.start == self.end {
            write!(f, "{}", start)
        } else {
            write!(f, "{}-{}", start, end)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawMonthRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawMonthRange> for MonthRange {
    type Error = PeriodError;

    fn try_from(raw: RawMonthRange) -> Result<Self, Self::Error> {
        MonthRange::new(raw.start, raw.end)
    }
}

impl From<MonthRange> for RawMonthRange {
    fn from(range: MonthRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// One of the fixed labels offered by the dashboard period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodLabel {
    Jan,
    Fev,
    Mar,
    Abr,
}

impl PeriodLabel {
    /// All selector labels in order
    pub const ALL: [PeriodLabel; 4] = [Self::Jan, Self::Fev, Self::Mar, Self::Abr];

    /// Month number for this label (Jan = 1)
    pub fn month(self) -> u32 {
        match self {
            Self::Jan => 1,
            Self::Fev => 2,
            Self::Mar => 3,
            Self::Abr => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Fev => "Fev",
            Self::Mar => "Mar",
            Self::Abr => "Abr",
        }
    }

    /// Label for a month number, if the selector offers it
    pub fn from_month(month: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.month() == month)
    }

    /// Next label in the selector, saturating at the last one
    pub fn next(self) -> Self {
        Self::from_month(self.month() + 1).unwrap_or(self)
    }

    /// Previous label in the selector, saturating at the first one
    pub fn prev(self) -> Self {
        Self::from_month(self.month().saturating_sub(1)).unwrap_or(self)
    }

    /// Parse a label ("fev", "Mar") or a month number ("2")
    pub fn parse(s: &str) -> Result<Self, PeriodError> {
        let s = s.trim();
        if let Ok(month) = s.parse::<u32>() {
            return Self::from_month(month).ok_or_else(|| PeriodError::UnknownLabel(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PeriodError::UnknownLabel(s.to_string()))
    }
}

impl FromStr for PeriodLabel {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build a month range from two selector labels
pub fn selector_range(start: PeriodLabel, end: PeriodLabel) -> Result<MonthRange, PeriodError> {
    MonthRange::new(start.month(), end.month())
}

/// The selector's default: its full span, `Jan` through `Abr`
pub fn default_period() -> MonthRange {
    MonthRange {
        start: PeriodLabel::Jan.month(),
        end: PeriodLabel::Abr.month(),
    }
}

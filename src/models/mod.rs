//! Core data models for Gastos
//!
//! Money, expense records, month periods and the filter criteria built from
//! user input.

pub mod criteria;
pub mod money;
pub mod period;
pub mod record;

pub use criteria::FilterCriteria;
pub use money::{Money, MoneyParseError};
pub use period::{default_period, selector_range, MonthRange, PeriodError, PeriodLabel};
pub use record::ExpenseRecord;

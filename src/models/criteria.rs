//! Filter criteria
//!
//! The category set and month range picked by the user. Rebuilt (or mutated)
//! on every interaction and never persisted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::period::MonthRange;
use super::record::ExpenseRecord;

/// Current category and period selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Categories a record may belong to. Empty means nothing passes.
    pub allowed_categories: BTreeSet<String>,

    /// Months a record may fall in
    pub period: MonthRange,
}

impl FilterCriteria {
    /// Create criteria from a category list and a period
    pub fn new<I, S>(categories: I, period: MonthRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_categories: categories.into_iter().map(Into::into).collect(),
            period,
        }
    }

    /// Every category present in `records`, over the whole year
    ///
    /// Applying this to the same records keeps all of them.
    pub fn all_of(records: &[ExpenseRecord]) -> Self {
        Self {
            allowed_categories: records.iter().map(|r| r.category.clone()).collect(),
            period: MonthRange::FULL_YEAR,
        }
    }

    /// Replace the period
    pub fn with_period(mut self, period: MonthRange) -> Self {
        self.period = period;
        self
    }

    /// Replace the category set
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn allows_category(&self, category: &str) -> bool {
        self.allowed_categories.contains(category)
    }

    /// Both predicates: category membership AND month inside the period
    pub fn allows(&self, record: &ExpenseRecord) -> bool {
        self.allows_category(&record.category) && self.period.contains(record.date)
    }

    /// Add the category if absent, remove it otherwise.
    /// Returns whether the category is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        if self.allowed_categories.remove(category) {
            false
        } else {
            self.allowed_categories.insert(category.to_string());
            true
        }
    }

    pub fn has_no_categories(&self) -> bool {
        self.allowed_categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn record(month: u32, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, month, 10).unwrap(),
            "x",
            Money::from_cents(100),
            category,
        )
    }

    #[test]
    fn test_allows_requires_both_predicates() {
        let criteria = FilterCriteria::new(["Food"], MonthRange::new(1, 2).unwrap());
        assert!(criteria.allows(&record(1, "Food")));
        assert!(!criteria.allows(&record(3, "Food")));
        assert!(!criteria.allows(&record(1, "Rent")));
    }

    #[test]
    fn test_empty_set_allows_nothing() {
        let criteria = FilterCriteria::new(Vec::<String>::new(), MonthRange::FULL_YEAR);
        assert!(criteria.has_no_categories());
        assert!(!criteria.allows(&record(1, "Food")));
    }

    #[test]
    fn test_all_of() {
        let records = vec![record(1, "Food"), record(5, "Rent"), record(9, "Food")];
        let criteria = FilterCriteria::all_of(&records);
        assert_eq!(criteria.allowed_categories.len(), 2);
        assert!(records.iter().all(|r| criteria.allows(r)));
    }

    #[test]
    fn test_toggle_category() {
        let mut criteria = FilterCriteria::new(["Food"], MonthRange::FULL_YEAR);
        assert!(!criteria.toggle_category("Food"));
        assert!(criteria.has_no_categories());
        assert!(criteria.toggle_category("Food"));
        assert!(criteria.allows_category("Food"));
    }
}

//! Aggregator
//!
//! Totals, mean and per-category sums over a (usually filtered) set of
//! records. Pure: the result depends only on the input and is recomputed
//! from scratch every time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ExpenseRecord, Money};

/// Summary statistics over a record set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AggregateResult {
    /// Sum of all amounts, zero when there are no records
    pub total: Money,

    /// Mean amount rounded to the centavo; `None` when there are no records
    pub mean: Option<Money>,

    /// Number of records aggregated
    pub count: usize,

    /// Sum per category. Only categories with records appear; iteration is
    /// sorted by name.
    pub per_category: BTreeMap<String, Money>,

    /// Sum per calendar day, in date order
    pub per_day: BTreeMap<NaiveDate, Money>,
}

/// Share of the total taken by one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    /// Percentage of the overall total (0.0 when that total is zero)
    pub percentage: f64,
}

/// Aggregate a set of records
pub fn aggregate<'a, I>(records: I) -> AggregateResult
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut result = AggregateResult::default();

    // Saturating sums: a ledger of extreme amounts clamps instead of panicking
    for record in records {
        result.total = result.total.saturating_add(record.amount);
        result.count += 1;
        let category = result
            .per_category
            .entry(record.category.clone())
            .or_insert_with(Money::zero);
        *category = category.saturating_add(record.amount);
        let day = result
            .per_day
            .entry(record.date)
            .or_insert_with(Money::zero);
        *day = day.saturating_add(record.amount);
    }

    result.mean = result.total.div_round(result.count);
    result
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the total is strictly above `limit`
    pub fn exceeds(&self, limit: Money) -> bool {
        self.total > limit
    }

    /// Per-category share of the total, sorted by category
    pub fn shares(&self) -> Vec<CategoryShare> {
        self.per_category
            .iter()
            .map(|(category, total)| CategoryShare {
                category: category.clone(),
                total: *total,
                percentage: total.percentage_of(self.total),
            })
            .collect()
    }

    /// The `limit` categories with the largest totals, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<(&str, Money)> {
        let mut all: Vec<(&str, Money)> = self
            .per_category
            .iter()
            .map(|(c, m)| (c.as_str(), *m))
            .collect();
        // Stable sort keeps name order among equal totals
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.truncate(limit);
        all
    }
}

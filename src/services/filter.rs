//! Filter engine
//!
//! Narrows a record slice by category membership and month range. The output
//! borrows from the input and keeps its relative order.

use tracing::debug;

use crate::models::{ExpenseRecord, FilterCriteria};

/// Records passing both the category and the period predicate, in order
///
/// An empty category set yields an empty result; it never means "all".
pub fn filter<'a>(
    records: &'a [ExpenseRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ExpenseRecord> {
    let filtered: Vec<&ExpenseRecord> = records.iter().filter(|r| criteria.allows(r)).collect();

    debug!(
        input = records.len(),
        output = filtered.len(),
        categories = criteria.allowed_categories.len(),
        period = %criteria.period,
        "filtered records"
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthRange};
    use chrono::NaiveDate;

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
                "Aluguel",
                Money::from_cents(40000),
                "Rent",
            ),
            ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                "Padaria",
                Money::from_cents(5000),
                "Food",
            ),
        ]
    }

    #[test]
    fn test_category_and_period() {
        let records = sample();
        let criteria = FilterCriteria::new(["Food"], MonthRange::new(1, 3).unwrap());

        let filtered = filter(&records, &criteria);
        assert_eq!(filtered, vec![&records[0], &records[2]]);
    }

    #[test]
    fn test_single_month() {
        let records = sample();
        let criteria = FilterCriteria::new(["Food", "Rent"], MonthRange::single(2).unwrap());

        let filtered = filter(&records, &criteria);
        assert_eq!(filtered, vec![&records[1]]);
    }

    #[test]
    fn test_empty_categories_yield_nothing() {
        let records = sample();
        for period in [MonthRange::FULL_YEAR, MonthRange::single(1).unwrap()] {
            let criteria = FilterCriteria::new(Vec::<String>::new(), period);
            assert!(filter(&records, &criteria).is_empty());
        }
    }

    #[test]
    fn test_unknown_category_yields_nothing() {
        let records = sample();
        let criteria = FilterCriteria::new(["Travel"], MonthRange::FULL_YEAR);
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_order_preserving_subsequence() {
        let records = sample();
        let criteria = FilterCriteria::new(["Food", "Rent"], MonthRange::new(1, 3).unwrap());
        let filtered = filter(&records, &criteria);

        // Every output element appears in the input after the previous one
        let mut cursor = 0;
        for item in &filtered {
            let pos = records[cursor..]
                .iter()
                .position(|r| std::ptr::eq(r, *item))
                .expect("filtered record must come from the input");
            cursor += pos + 1;
        }
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_full_criteria_is_identity() {
        let records = sample();
        let criteria = FilterCriteria::all_of(&records);
        let filtered: Vec<ExpenseRecord> =
            filter(&records, &criteria).into_iter().cloned().collect();
        assert_eq!(filtered, records);
    }
}

//! Dashboard session
//!
//! Holds the selection of one user session and recomputes the filtered view
//! on demand. The record store is borrowed read-only; the criteria are owned
//! by the session, so separate sessions never see each other's selection.
//!
//! There is no hidden reactivity: presentation code mutates the selection
//! and then calls [`Dashboard::refresh`] once per input event.

use tracing::debug;

use crate::models::{default_period, ExpenseRecord, FilterCriteria, Money, MonthRange};
use crate::storage::RecordStore;

use super::aggregate::{aggregate, AggregateResult};
use super::filter::filter;

/// Spending limit above which the warning fires
pub const DEFAULT_SPENDING_LIMIT: Money = Money::from_reais_cents(500, 0);

/// Dashboard heading
pub const DASHBOARD_TITLE: &str = "Rastreador de Gastos (Jan-Abr 2025)";

/// Dashboard subheading
pub const DASHBOARD_DESCRIPTION: &str =
    "Acompanhe seus gastos e visualize seus padrões de consumo.";

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    /// Filtered records, in ledger order
    pub records: Vec<&'a ExpenseRecord>,
    /// Aggregates over `records`
    pub aggregate: AggregateResult,
    /// Spending-limit warning, if the total is above the limit
    pub warning: Option<String>,
}

/// One user's dashboard session
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    store: &'a RecordStore,
    criteria: FilterCriteria,
    limit: Money,
    currency_symbol: String,
}

impl<'a> Dashboard<'a> {
    /// Start a session with every category selected over the selector's
    /// default span
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::new(store.categories(), default_period()),
            limit: DEFAULT_SPENDING_LIMIT,
            currency_symbol: crate::models::money::DEFAULT_SYMBOL.to_string(),
        }
    }

    /// Use a different spending limit
    pub fn with_limit(mut self, limit: Money) -> Self {
        self.limit = limit;
        self
    }

    /// Use a different currency symbol in messages
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Replace the whole selection
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Categories offered by the multi-select, sorted
    pub fn available_categories(&self) -> Vec<String> {
        self.store.categories()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.criteria.allows_category(category)
    }

    /// Flip one category. Returns whether it is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.criteria.toggle_category(category)
    }

    pub fn select_all_categories(&mut self) {
        self.criteria.allowed_categories = self.store.categories().into_iter().collect();
    }

    pub fn clear_categories(&mut self) {
        self.criteria.allowed_categories.clear();
    }

    pub fn set_period(&mut self, period: MonthRange) {
        self.criteria.period = period;
    }

    /// Run the pipeline for the current selection
    pub fn refresh(&self) -> DashboardView<'a> {
        let records = filter(self.store.records(), &self.criteria);
        let aggregate = aggregate(records.iter().copied());
        let warning = spending_warning(&aggregate, self.limit, &self.currency_symbol);

        debug!(
            records = records.len(),
            total = %aggregate.total,
            warning = warning.is_some(),
            "dashboard refreshed"
        );

        DashboardView {
            records,
            aggregate,
            warning,
        }
    }

    /// Aggregates over the whole ledger, ignoring the selection
    ///
    /// Feeds the category proportion chart, which always shows every
    /// category.
    pub fn overall(&self) -> AggregateResult {
        aggregate(self.store.records())
    }
}

/// Greeting echoed back for the name field
pub fn greeting(name: &str) -> String {
    format!("Olá, {}!", name)
}

/// Warning text when the total is strictly above `limit`
pub fn spending_warning(aggregate: &AggregateResult, limit: Money, symbol: &str) -> Option<String> {
    aggregate.exceeds(limit).then(|| {
        format!(
            "Seu gasto total ultrapassou o limite de {}!",
            limit.format_compact(symbol)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store() -> RecordStore {
        let record = |m: u32, d: u32, category: &str, cents: i64| {
            ExpenseRecord::new(
                NaiveDate::from_ymd_opt(2025, m, d).unwrap(),
                "x",
                Money::from_cents(cents),
                category,
            )
        };
        RecordStore::from_records(vec![
            record(1, 5, "Food", 10000),
            record(2, 10, "Rent", 40000),
            record(3, 1, "Food", 5000),
        ])
    }

    #[test]
    fn test_defaults_select_everything() {
        let store = store();
        let dashboard = Dashboard::new(&store);

        assert!(dashboard.is_selected("Food"));
        assert!(dashboard.is_selected("Rent"));
        assert_eq!(dashboard.criteria().period, MonthRange::new(1, 4).unwrap());

        let view = dashboard.refresh();
        assert_eq!(view.records.len(), 3);
        assert_eq!(view.aggregate.total, Money::from_cents(55000));
        assert!(view.warning.is_some());
    }

    #[test]
    fn test_warning_threshold() {
        let store = store();
        let mut dashboard = Dashboard::new(&store);
        dashboard.set_period(MonthRange::single(2).unwrap());

        let view = dashboard.refresh();
        assert_eq!(view.aggregate.total, Money::from_cents(40000));
        assert_eq!(view.warning, None);

        let dashboard = dashboard.with_limit(Money::from_reais_cents(300, 0));
        let view = dashboard.refresh();
        assert_eq!(
            view.warning.as_deref(),
            Some("Seu gasto total ultrapassou o limite de R$300!")
        );
    }

    #[test]
    fn test_clear_categories_gives_empty_view() {
        let store = store();
        let mut dashboard = Dashboard::new(&store);
        dashboard.clear_categories();

        let view = dashboard.refresh();
        assert!(view.records.is_empty());
        assert_eq!(view.aggregate.total, Money::zero());
        assert_eq!(view.aggregate.mean, None);
        assert_eq!(view.warning, None);
    }

    #[test]
    fn test_toggle_and_select_all() {
        let store = store();
        let mut dashboard = Dashboard::new(&store);

        assert!(!dashboard.toggle_category("Rent"));
        let view = dashboard.refresh();
        assert_eq!(view.aggregate.total, Money::from_cents(15000));
        assert_eq!(view.aggregate.mean, Some(Money::from_cents(7500)));

        dashboard.select_all_categories();
        assert_eq!(dashboard.refresh().records.len(), 3);
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = store();
        let mut first = Dashboard::new(&store);
        let second = Dashboard::new(&store);

        first.clear_categories();
        assert!(first.refresh().records.is_empty());
        assert_eq!(second.refresh().records.len(), 3);
    }

    #[test]
    fn test_overall_ignores_selection() {
        let store = store();
        let mut dashboard = Dashboard::new(&store);
        dashboard.clear_categories();
        assert_eq!(dashboard.overall().total, Money::from_cents(55000));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("Ana"), "Olá, Ana!");
        assert_eq!(greeting(""), "Olá, !");
    }
}

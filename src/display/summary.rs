//! Dashboard text output
//!
//! Renders a refreshed dashboard view for the `show` command: records
//! table, metrics, the three charts as text, greeting and warning.

use crate::config::Settings;
use crate::models::Money;
use crate::services::{
    greeting, AggregateResult, DashboardView, DASHBOARD_DESCRIPTION, DASHBOARD_TITLE,
};

use super::records::format_records_table;
use super::report::{
    format_bar, format_date, format_optional_money, format_percentage, format_section, pad_right,
    truncate,
};

/// Width of the bar charts, in cells
pub const BAR_WIDTH: usize = 30;

const LABEL_WIDTH: usize = 16;

/// "Gasto Total" / "Gasto Médio" lines
pub fn format_metrics(aggregate: &AggregateResult, symbol: &str) -> String {
    format!(
        "Gasto Total: {}\nGasto Médio: {}\n",
        aggregate.total.format_with_symbol(symbol),
        format_optional_money(aggregate.mean, symbol)
    )
}

/// One bar per category present in the selection, sorted by name
pub fn format_category_bars(aggregate: &AggregateResult, symbol: &str) -> String {
    let max = aggregate
        .per_category
        .values()
        .copied()
        .max()
        .unwrap_or_else(Money::zero);

    aggregate
        .per_category
        .iter()
        .map(|(category, total)| {
            format!(
                "{} {} {}\n",
                pad_right(&truncate(category, LABEL_WIDTH), LABEL_WIDTH),
                format_bar(*total, max, BAR_WIDTH),
                total.format_with_symbol(symbol)
            )
        })
        .collect()
}

/// Daily totals in date order
pub fn format_timeline(aggregate: &AggregateResult, date_format: &str, symbol: &str) -> String {
    let max = aggregate
        .per_day
        .values()
        .copied()
        .max()
        .unwrap_or_else(Money::zero);

    aggregate
        .per_day
        .iter()
        .map(|(day, total)| {
            format!(
                "{} {} {}\n",
                format_date(*day, date_format),
                format_bar(*total, max, BAR_WIDTH),
                total.format_with_symbol(symbol)
            )
        })
        .collect()
}

/// Share of each category in `aggregate`
pub fn format_proportion(aggregate: &AggregateResult) -> String {
    aggregate
        .shares()
        .iter()
        .map(|share| {
            format!(
                "{} {:>6}\n",
                pad_right(&truncate(&share.category, LABEL_WIDTH), LABEL_WIDTH),
                format_percentage(share.percentage)
            )
        })
        .collect()
}

/// Full dashboard
///
/// `overall` feeds the proportion section, which covers the whole ledger
/// regardless of the selection.
pub fn format_dashboard(
    view: &DashboardView<'_>,
    overall: &AggregateResult,
    name: Option<&str>,
    settings: &Settings,
) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format_section(DASHBOARD_TITLE));
    output.push_str(DASHBOARD_DESCRIPTION);
    output.push_str("\n\n");

    output.push_str(&format_records_table(
        view.records.iter().copied(),
        &settings.date_format,
        symbol,
    ));
    output.push_str("\n\n");

    output.push_str(&format_metrics(&view.aggregate, symbol));
    output.push('\n');

    output.push_str(&format_section("Gastos por Categoria"));
    output.push_str(&format_category_bars(&view.aggregate, symbol));
    output.push('\n');

    output.push_str(&format_section("Gastos ao Longo do Tempo"));
    output.push_str(&format_timeline(&view.aggregate, &settings.date_format, symbol));
    output.push('\n');

    output.push_str(&format_section("Proporção de Gastos por Categoria"));
    output.push_str(&format_proportion(overall));

    if let Some(name) = name {
        output.push('\n');
        output.push_str(&greeting(name));
        output.push('\n');
    }

    if let Some(warning) = &view.warning {
        output.push('\n');
        output.push_str(&format!("⚠ {}\n", warning));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, FilterCriteria, MonthRange};
    use crate::services::Dashboard;
    use crate::storage::RecordStore;
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
    fn test_metrics_with_and_without_data() {
        let store = store();
        let dashboard = Dashboard::new(&store);
        let view = dashboard.refresh();
        assert_eq!(
            format_metrics(&view.aggregate, "R$"),
            "Gasto Total: R$ 550.00\nGasto Médio: R$ 183.33\n"
        );

        assert_eq!(
            format_metrics(&AggregateResult::default(), "R$"),
            "Gasto Total: R$ 0.00\nGasto Médio: —\n"
        );
    }

    #[test]
    fn test_category_bars_sorted() {
        let store = store();
        let view = Dashboard::new(&store).refresh();
        let bars = format_category_bars(&view.aggregate, "R$");
        let lines: Vec<&str> = bars.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Food"));
        assert!(lines[0].ends_with("R$ 150.00"));
        assert!(lines[1].starts_with("Rent"));
        assert!(lines[1].contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_timeline_in_date_order() {
        let store = store();
        let view = Dashboard::new(&store).refresh();
        let timeline = format_timeline(&view.aggregate, "%d/%m/%Y", "R$");
        let lines: Vec<&str> = timeline.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("05/01/2025"));
        assert!(lines[2].starts_with("01/03/2025"));
    }

    #[test]
    fn test_timeline_with_bad_date_format() {
        let store = store();
        let view = Dashboard::new(&store).refresh();
        let timeline = format_timeline(&view.aggregate, "%Q", "R$");
        assert!(timeline.starts_with("05/01/2025"));
    }

    #[test]
    fn test_dashboard_with_warning_and_greeting() {
        let store = store();
        let dashboard = Dashboard::new(&store);
        let view = dashboard.refresh();
        let text = format_dashboard(&view, &dashboard.overall(), Some("Ana"), &Settings::default());

        assert!(text.starts_with(DASHBOARD_TITLE));
        assert!(text.contains("Olá, Ana!"));
        assert!(text.contains("Seu gasto total ultrapassou o limite de R$500!"));
        assert!(text.contains("Proporção de Gastos por Categoria"));
    }

    #[test]
    fn test_dashboard_empty_selection_keeps_proportion() {
        let store = store();
        let dashboard = Dashboard::new(&store).with_criteria(FilterCriteria::new(
            Vec::<String>::new(),
            MonthRange::FULL_YEAR,
        ));
        let view = dashboard.refresh();
        let text = format_dashboard(&view, &dashboard.overall(), None, &Settings::default());

        assert!(text.contains("Gasto Médio: —"));
        assert!(!text.contains("ultrapassou"));
        assert!(!text.contains("Olá"));
        // proportion covers the whole ledger
        assert!(text.contains("Rent"));
    }
}

//! Records table
//!
//! The filtered ledger rendered with `tabled`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::ExpenseRecord;

use super::report::format_date;

/// Message shown instead of an empty table
pub const NO_RECORDS: &str = "Nenhum gasto encontrado para a seleção.";

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Descrição")]
    description: String,
    #[tabled(rename = "Valor")]
    amount: String,
    #[tabled(rename = "Categoria")]
    category: String,
}

/// Format records as a table, in the order given
pub fn format_records_table<'a, I>(records: I, date_format: &str, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let rows: Vec<RecordRow> = records
        .into_iter()
        .map(|record| RecordRow {
            date: format_date(record.date, date_format),
            description: record.description.clone(),
            amount: record.amount.format_with_symbol(symbol),
            category: record.category.clone(),
        })
        .collect();

    if rows.is_empty() {
        return NO_RECORDS.to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(2), Alignment::right())
        .to_string()
}

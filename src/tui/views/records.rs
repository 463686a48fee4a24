//! Records table view
//!
//! Shows the filtered records in ledger order

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::records::NO_RECORDS;
use crate::display::report::format_date;
use crate::tui::app::{App, FocusedPanel};

use super::border_style;

/// Render the records table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" Gastos ({}) ", app.view.records.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app.focused_panel == FocusedPanel::Main));

    if app.view.records.is_empty() {
        let text = Paragraph::new(NO_RECORDS)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let date_format = app.settings.date_format.as_str();
    let symbol = app.settings.currency_symbol.as_str();

    let header = Row::new(vec!["Data", "Descrição", "Valor", "Categoria"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .view
        .records
        .iter()
        .map(|record| {
            let amount_color = if record.amount.is_negative() {
                Color::Green
            } else {
                Color::White
            };
            Row::new(vec![
                Cell::from(format_date(record.date, date_format)),
                Cell::from(record.description.clone()),
                Cell::from(record.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(amount_color)),
                Cell::from(record.category.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_record_index));
    frame.render_stateful_widget(table, area, &mut state);
}

//! Metrics and charts
//!
//! Gasto Total / Gasto Médio, spending per category, spending over time and
//! each category's share of the whole ledger.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};

use crate::display::report::{format_optional_money, format_percentage, truncate, NO_DATA};
use crate::models::Money;
use crate::tui::app::App;

/// Whole reais for chart heights; charts cannot show negative bars
fn chart_value(amount: Money) -> u64 {
    u64::try_from(amount.div_round(100).map(|m| m.cents()).unwrap_or(0)).unwrap_or(0)
}

/// Render the metric line
pub fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let aggregate = &app.view.aggregate;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" Gasto Total: ", Style::default().fg(Color::Gray)),
        Span::styled(aggregate.total.format_with_symbol(symbol), value_style),
        Span::raw("   │   "),
        Span::styled("Gasto Médio: ", Style::default().fg(Color::Gray)),
        Span::styled(format_optional_money(aggregate.mean, symbol), value_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render spending per category as a bar chart
pub fn render_category_bars(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Gastos por Categoria ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let per_category = &app.view.aggregate.per_category;
    if per_category.is_empty() {
        render_empty(frame, block, area);
        return;
    }

    let data: Vec<(&str, u64)> = per_category
        .iter()
        .map(|(category, total)| (category.as_str(), chart_value(*total)))
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = data.len() as u16;
    let bar_width = (inner_width / count.max(1)).saturating_sub(1).clamp(1, 12);

    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

/// Render daily totals as a sparkline
pub fn render_timeline(frame: &mut Frame, app: &App, area: Rect) {
    let per_day = &app.view.aggregate.per_day;

    let title = match (per_day.keys().next(), per_day.keys().next_back()) {
        (Some(first), Some(last)) => format!(
            " Gastos ao Longo do Tempo ({} - {}) ",
            first.format("%d/%m"),
            last.format("%d/%m")
        ),
        _ => " Gastos ao Longo do Tempo ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if per_day.is_empty() {
        render_empty(frame, block, area);
        return;
    }

    let data: Vec<u64> = per_day.values().map(|total| chart_value(*total)).collect();
    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .style(Style::default().fg(Color::Blue));

    frame.render_widget(sparkline, area);
}

/// Render each category's share of the whole ledger
pub fn render_proportion(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Proporção ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let shares = app.overall.shares();
    if shares.is_empty() {
        render_empty(frame, block, area);
        return;
    }

    let label_width = usize::from(area.width.saturating_sub(10)).max(4);
    let items: Vec<ListItem> = shares
        .iter()
        .map(|share| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate(&share.category, label_width),
                        width = label_width
                    ),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>6}", format_percentage(share.percentage)),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_empty(frame: &mut Frame, block: Block, area: Rect) {
    let text = Paragraph::new(NO_DATA)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

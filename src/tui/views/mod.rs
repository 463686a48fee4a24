//! TUI Views module
//!
//! Header, sidebar filters, records table, charts and the status bar.

pub mod charts;
pub mod records;
pub mod sidebar;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::{DASHBOARD_DESCRIPTION, DASHBOARD_TITLE};

use super::app::App;
use super::layout::{AppLayout, MainPanelLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    sidebar::render(frame, app, layout.sidebar);

    let main = MainPanelLayout::new(layout.main);
    records::render(frame, app, main.records);
    charts::render_metrics(frame, app, main.metrics);
    charts::render_category_bars(frame, app, main.bar_chart);
    charts::render_timeline(frame, app, main.timeline);
    charts::render_proportion(frame, app, main.proportion);

    status_bar::render(frame, app, layout.status_bar);
}

/// Title, description and greeting
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", DASHBOARD_TITLE))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![Line::from(Span::styled(
        DASHBOARD_DESCRIPTION,
        Style::default().fg(Color::Gray),
    ))];
    if let Some(greeting) = app.greeting() {
        lines.push(Line::from(Span::styled(
            greeting,
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Border colour for a panel, brighter when it has focus
pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

//! Sidebar view
//!
//! Category multi-select, period selector and the name field

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::PeriodLabel;
use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::layout::SidebarLayout;

use super::border_style;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_categories(frame, app, layout.categories);
    render_period(frame, app, layout.period);
    render_name(frame, app, layout.name);
}

/// Render the category multi-select
fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Categorias ")
        .borders(Borders::ALL)
        .border_style(border_style(app.focused_panel == FocusedPanel::Sidebar));

    if app.categories.is_empty() {
        let text = Paragraph::new("Nenhuma categoria")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = app
        .categories
        .iter()
        .map(|category| {
            let (mark, color) = if app.is_selected(category) {
                ("[x] ", Color::White)
            } else {
                ("[ ] ", Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Cyan)),
                Span::styled(category.as_str(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the period selector: every label, the selected span highlighted
fn render_period(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Período ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut spans = Vec::new();
    for label in PeriodLabel::ALL {
        let style = if label >= app.period_start && label <= app.period_end {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "[ ] início  { } fim",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the name field
fn render_name(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let block = Block::default()
        .title(" Digite seu nome ")
        .borders(Borders::ALL)
        .border_style(border_style(editing));

    let text = if editing {
        Line::from(vec![
            Span::raw(app.name_input.as_str()),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ])
    } else if app.name.is_empty() {
        Line::from(Span::styled("i para editar", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(app.name.as_str())
    };

    frame.render_widget(Paragraph::new(text).block(block), area);
}

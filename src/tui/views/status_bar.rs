//! Status bar view
//!
//! Shows the spending warning or the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

const NORMAL_HINTS: &str =
    " space:Toggle a:All n:None [ ]:Start { }:End i:Name e:Export Tab:Focus q:Quit ";
const EDITING_HINTS: &str = " Enter:Save  Esc:Cancel ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.dashboard.criteria().period),
        Style::default().fg(Color::Cyan),
    )];

    // A status message wins over the warning until the next key press
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(ref warning) = app.view.warning {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("⚠ {}", warning),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => NORMAL_HINTS,
        InputMode::Editing => EDITING_HINTS,
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = usize::from(area.width)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Text chart helpers shared by the dashboard output

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::settings::DEFAULT_DATE_FORMAT;
use crate::models::Money;

/// Placeholder shown instead of a mean when there is no data
pub const NO_DATA: &str = "—";

/// Format an optional amount, falling back to the no-data placeholder
pub fn format_optional_money(amount: Option<Money>, symbol: &str) -> String {
    amount
        .map(|m| m.format_with_symbol(symbol))
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Format a date, falling back to `DD/MM/YYYY` when `format` is not a
/// valid strftime pattern
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(format)).is_err() {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max`
///
/// Negative and zero values render as an empty track.
pub fn format_bar(value: Money, max: Money, width: usize) -> String {
    if !max.is_positive() || !value.is_positive() {
        return "░".repeat(width);
    }

    let filled = ((value.cents() as f64 / max.cents() as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section heading followed by a rule of the same width
pub fn format_section(title: &str) -> String {
    let width = title.chars().count().max(3);
    format!("{}\n{}\n", title, separator(width))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending in "..." when shortened
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Pad on the right to `width` characters
pub fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

//! Layout definitions for the TUI
//!
//! Header on top, filters on the left, data on the right, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, description and greeting
    pub header: Rect,
    /// Filters (categories, period, name)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Category multi-select
    pub categories: Rect,
    /// Period selector
    pub period: Rect,
    /// Name field
    pub name: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Categories
                Constraint::Length(4), // Period
                Constraint::Length(3), // Name
            ])
            .split(area);

        Self {
            categories: chunks[0],
            period: chunks[1],
            name: chunks[2],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Filtered records
    pub records: Rect,
    /// Gasto Total / Gasto Médio
    pub metrics: Rect,
    /// Per-category bar chart
    pub bar_chart: Rect,
    /// Spending over time
    pub timeline: Rect,
    /// Category proportion over the whole ledger
    pub proportion: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40), // Records
                Constraint::Length(3),      // Metrics
                Constraint::Min(8),         // Charts
            ])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ])
            .split(vertical[2]);

        Self {
            records: vertical[0],
            metrics: vertical[1],
            bar_chart: charts[0],
            timeline: charts[1],
            proportion: charts[2],
        }
    }
}

//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every change to the selection is followed by one `refresh`, which reruns
//! filter and aggregate over the store.

use std::path::PathBuf;

use tracing::warn;

use crate::cli::EXPORT_SUCCESS;
use crate::config::Settings;
use crate::export::export_records_to_file;
use crate::models::{selector_range, PeriodLabel};
use crate::services::{greeting, AggregateResult, Dashboard, DashboardView};
use crate::storage::RecordStore;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the name field
    Editing,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Selection and pipeline
    pub dashboard: Dashboard<'a>,

    /// Result of the last refresh
    pub view: DashboardView<'a>,

    /// Aggregates over the whole ledger, for the proportion chart
    pub overall: AggregateResult,

    /// Categories offered by the multi-select, sorted
    pub categories: Vec<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Cursor in the category list
    pub selected_category_index: usize,

    /// Cursor in the records table
    pub selected_record_index: usize,

    /// Period selector bounds
    pub period_start: PeriodLabel,
    pub period_end: PeriodLabel,

    /// Name entered by the user
    pub name: String,

    /// Name being typed while editing
    pub name_input: String,

    /// Where `e` writes the filtered records
    pub export_path: PathBuf,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dashboard: Dashboard<'a>, settings: &'a Settings, export_path: PathBuf) -> Self {
        let store: &'a RecordStore = dashboard.store();
        let period = dashboard.criteria().period;
        let view = dashboard.refresh();
        let overall = dashboard.overall();

        Self {
            settings,
            categories: store.categories(),
            view,
            overall,
            dashboard,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            selected_category_index: 0,
            selected_record_index: 0,
            period_start: PeriodLabel::from_month(period.start()).unwrap_or(PeriodLabel::Jan),
            period_end: PeriodLabel::from_month(period.end()).unwrap_or(PeriodLabel::Abr),
            name: String::new(),
            name_input: String::new(),
            export_path,
            status_message: None,
        }
    }

    /// Rerun the pipeline for the current selection
    pub fn refresh(&mut self) {
        self.view = self.dashboard.refresh();
        let max = self.view.records.len().saturating_sub(1);
        self.selected_record_index = self.selected_record_index.min(max);
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Category under the cursor
    pub fn current_category(&self) -> Option<&str> {
        self.categories
            .get(self.selected_category_index)
            .map(String::as_str)
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.dashboard.is_selected(category)
    }

    /// Flip the category under the cursor
    pub fn toggle_current_category(&mut self) {
        let Some(category) = self.current_category().map(str::to_string) else {
            return;
        };
        self.dashboard.toggle_category(&category);
        self.refresh();
    }

    pub fn select_all_categories(&mut self) {
        self.dashboard.select_all_categories();
        self.refresh();
    }

    pub fn clear_categories(&mut self) {
        self.dashboard.clear_categories();
        self.refresh();
    }

    /// Move the period start one label forward or back; never past the end
    pub fn shift_period_start(&mut self, forward: bool) {
        let next = if forward {
            self.period_start.next()
        } else {
            self.period_start.prev()
        };
        if next <= self.period_end {
            self.period_start = next;
            self.apply_period();
        }
    }

    /// Move the period end one label forward or back; never before the start
    pub fn shift_period_end(&mut self, forward: bool) {
        let next = if forward {
            self.period_end.next()
        } else {
            self.period_end.prev()
        };
        if next >= self.period_start {
            self.period_end = next;
            self.apply_period();
        }
    }

    fn apply_period(&mut self) {
        match selector_range(self.period_start, self.period_end) {
            Ok(period) => {
                self.dashboard.set_period(period);
                self.refresh();
            }
            Err(e) => {
                warn!(error = %e, "rejected period selection");
                self.set_status(e.to_string());
            }
        }
    }

    /// Start typing into the name field
    pub fn start_editing_name(&mut self) {
        self.name_input = self.name.clone();
        self.input_mode = InputMode::Editing;
    }

    /// Keep the typed name
    pub fn commit_name(&mut self) {
        self.name = self.name_input.trim().to_string();
        self.input_mode = InputMode::Normal;
    }

    /// Discard the typed name
    pub fn cancel_editing(&mut self) {
        self.name_input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Greeting for the entered name, once there is one
    pub fn greeting(&self) -> Option<String> {
        (!self.name.is_empty()).then(|| greeting(&self.name))
    }

    /// Write the filtered records to the export path
    pub fn export(&mut self) {
        match export_records_to_file(self.view.records.iter().copied(), &self.export_path) {
            Ok(count) => self.set_status(format!(
                "{} ({} → {})",
                EXPORT_SUCCESS,
                count,
                self.export_path.display()
            )),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }

    /// Move the cursor of the focused panel up
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.selected_category_index = self.selected_category_index.saturating_sub(1);
            }
            FocusedPanel::Main => {
                self.selected_record_index = self.selected_record_index.saturating_sub(1);
            }
        }
    }

    /// Move the cursor of the focused panel down
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_category_index + 1 < self.categories.len() {
                    self.selected_category_index += 1;
                }
            }
            FocusedPanel::Main => {
                if self.selected_record_index + 1 < self.view.records.len() {
                    self.selected_record_index += 1;
                }
            }
        }
    }
}

//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: category multi-select, period
//! selector, records table, metrics and charts, all recomputed after every
//! key press.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;

//! Gastos - terminal expense tracker
//!
//! Reads an expense ledger from CSV, filters it by category and month, and
//! reports totals, means and per-category sums as text, JSON, YAML or an
//! interactive dashboard. The filtered view can be exported back to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, records, periods, filter criteria)
//! - `storage`: CSV ledger loading and atomic file writes
//! - `services`: Filter, aggregate and the dashboard session
//! - `export`: CSV, JSON and YAML output
//! - `display`: Plain-text rendering
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::models::{FilterCriteria, MonthRange};
//! use gastos::services::{aggregate, filter};
//! use gastos::storage::RecordStore;
//!
//! let store = RecordStore::load("gastos.csv")?;
//! let criteria = FilterCriteria::new(["Food"], MonthRange::new(1, 3)?);
//! let result = aggregate(filter(store.records(), &criteria));
//! println!("{} over {} records", result.total, result.count);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{GastosError, GastosResult, LoadError};

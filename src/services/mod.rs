//! Business logic layer for Gastos
//!
//! The filter engine and the aggregator are plain functions over record
//! slices; the dashboard ties them to one user's selection.

pub mod aggregate;
pub mod dashboard;
pub mod filter;

pub use aggregate::{aggregate, AggregateResult, CategoryShare};
pub use dashboard::{
    greeting, spending_warning, Dashboard, DashboardView, DASHBOARD_DESCRIPTION, DASHBOARD_TITLE,
    DEFAULT_SPENDING_LIMIT,
};
pub use filter::filter;

//! Configuration module for Gastos
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GastosPaths;
pub use settings::Settings;

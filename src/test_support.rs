//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use log::LevelFilter;

use crate::Tab;
use crate::core::config::ResolvedConfig;
use crate::core::converter::Category;
use crate::core::state::App;

/// Resolved config with every default, independent of env vars and files.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        tab: Tab::Calculator,
        category: Category::Temperature,
        history_limit: 20,
        log_level: LevelFilter::Off,
    }
}

/// Creates a test App from `test_config()`.
pub fn test_app() -> App {
    App::from_config(&test_config())
}

/// Flattens a rendered test buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

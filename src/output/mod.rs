//! Output formatting for check reports
//!
//! This module provides:
//! - Table output for human-readable display
//! - Output configuration derived from CLI options

mod table;

pub use table::TableFormatter;

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(no_color: bool) -> Self {
        Self { color: !no_color }
    }
}

/// Create the report formatter for a configuration
pub fn create_formatter(config: &OutputConfig) -> TableFormatter {
    TableFormatter::new(config.color)
}

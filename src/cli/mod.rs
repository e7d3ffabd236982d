//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting and the export and
//! config command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_export, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ExportOptions};
pub use presenter::Presenter;

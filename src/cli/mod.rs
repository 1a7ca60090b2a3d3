//! CLI command handlers

pub mod commands;

pub use commands::{exit_code, inspect, report_failure, EXIT_ERROR, EXIT_NOT_FOUND, EXIT_SUCCESS};

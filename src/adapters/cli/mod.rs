//! CLI Adapter
//!
//! Command-line interface for Quote Courier.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{execute, is_usage_error, CliApp, Command};

//! Library component for the hbrake CLI application.
//!
//! This contains the argument definitions and command logic that the binary
//! crate uses. The library is organized into modules for different aspects
//! of the CLI.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup and helpers
pub mod logging;

/// Console output helpers
pub mod output;

// Re-exports for convenience
pub use cli::{Cli, Commands, CompileArgs, EncodeArgs, ValidateArgs, parse_cli, parse_cli_from};
pub use commands::compile::execute_compile;
pub use commands::encode::execute_encode;
pub use commands::validate::execute_validate;

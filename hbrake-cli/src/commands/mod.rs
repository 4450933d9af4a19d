//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one subcommand.

use std::path::{Path, PathBuf};

use hbrake_core::{SchemaValidator, handbrake_binary_name};

use crate::error::CliResult;

/// The `compile` command.
pub mod compile;

/// The `encode` command.
pub mod encode;

/// The `validate` command.
pub mod validate;

/// Loads the schema chosen on the command line, or the bundled one.
pub(crate) fn load_validator(schema: Option<&Path>) -> CliResult<SchemaValidator> {
    match schema {
        Some(path) => SchemaValidator::from_file(path),
        None => SchemaValidator::bundled(),
    }
}

/// Resolves the HandBrakeCLI binary to invoke.
///
/// An explicit `--handbrake` path is used verbatim. Otherwise the platform
/// binary name is looked up on PATH; when the lookup fails the bare name is
/// returned so that purely textual operations (`compile`) still work, and
/// the pre-flight check in `encode` reports the missing tool.
pub(crate) fn resolve_handbrake(explicit: Option<PathBuf>) -> PathBuf {
    match explicit {
        Some(path) => path,
        None => match which::which(handbrake_binary_name()) {
            Ok(path) => {
                log::debug!("Found HandBrakeCLI at {}", path.display());
                path
            }
            Err(_) => PathBuf::from(handbrake_binary_name()),
        },
    }
}

//! Error types shared across the hbrake core library.
//!
//! Every fallible operation in the crate returns [`CoreResult`], so failures
//! from schema validation, command compilation, and process supervision all
//! surface through the single [`CoreError`] enum with enough location
//! information (a JSON pointer or an option name) to act on.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the hbrake core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Underlying I/O failure while reading configuration or schema files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration (or schema) document is not parseable JSON.
    #[error("Failed to parse JSON document: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The schema document itself is malformed.
    ///
    /// This is a contract failure between the caller and the schema author,
    /// not something a configuration edit can fix.
    #[error("Schema error: {message} (at {path})")]
    Schema {
        /// Human-readable description of the schema defect.
        message: String,
        /// JSON pointer into the schema document.
        path: String,
    },

    /// The configuration does not conform to the schema.
    #[error("Validation error: {message} (at {path})")]
    Validation {
        /// Human-readable description of the violation.
        message: String,
        /// JSON pointer into the configuration document.
        path: String,
    },

    /// A required top-level field (`source` or `output_file`) is absent.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// A top-level key does not name any known configuration section.
    #[error("Unknown configuration section '{0}'")]
    UnknownSection(String),

    /// An option value has a shape the formatter cannot render.
    #[error("Cannot format option '{option}': {reason}")]
    Format {
        /// The option (or section) whose value was rejected.
        option: String,
        /// Why the value cannot be rendered.
        reason: String,
    },

    /// An external tool failed to start.
    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    /// Launching an external tool was interrupted by the operator.
    #[error("Launch of {0} was interrupted")]
    Interrupted(String),

    /// An external tool ran but exited unsuccessfully.
    #[error("{tool} failed with {status}: {stderr}")]
    CommandFailed {
        /// The tool that failed.
        tool: String,
        /// The process exit status.
        status: ExitStatus,
        /// Captured stderr output, for diagnostics.
        stderr: String,
    },

    /// A required external tool is not present on the system.
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    /// Catch-all for failures wrapped with caller context.
    #[error("{0}")]
    OperationFailed(String),
}

/// Convenience alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Maps a spawn-time I/O error to the appropriate [`CoreError`] variant.
///
/// An interrupted spawn means the operator cancelled the run, which callers
/// treat differently from a tool that could not be started at all.
pub fn command_start_error(tool: impl Into<String>, err: std::io::Error) -> CoreError {
    let tool = tool.into();
    if err.kind() == std::io::ErrorKind::Interrupted {
        CoreError::Interrupted(tool)
    } else {
        CoreError::CommandStart(tool, err)
    }
}

/// Builds a [`CoreError::CommandFailed`] from a tool's exit status and stderr.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status,
        stderr: stderr.into(),
    }
}

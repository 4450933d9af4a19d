//! Error handling utilities for the CLI.
//!
//! The CLI reuses [`CoreError`] end to end rather than introducing a second
//! error type; CLI-local failures are wrapped in
//! [`CoreError::OperationFailed`] with a context message.

use std::fmt;

use hbrake_core::{CoreError, CoreResult};

/// Result type for CLI operations.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for attaching context to errors at the CLI edge.
pub trait CliErrorContext<T> {
    /// Wraps the error with a context message.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| CoreError::OperationFailed(format!("{context}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_the_original_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk on fire"));
        let err = result.cli_context("Failed to create log directory").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("Failed to create log directory"));
        assert!(rendered.contains("disk on fire"));
    }
}

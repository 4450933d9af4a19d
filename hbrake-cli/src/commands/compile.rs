//! Implementation of the `compile` command.

use hbrake_core::CommandCompiler;

use crate::cli::CompileArgs;
use crate::commands::{load_validator, resolve_handbrake};
use crate::error::CliResult;

/// Compiles a configuration and prints the resulting command.
///
/// Only the shell-quoted command goes to stdout, so the output can be piped
/// or captured directly.
pub fn execute_compile(args: CompileArgs) -> CliResult<()> {
    let validator = load_validator(args.schema.as_deref())?;
    let config = validator.validated_from_file(&args.config)?;

    let binary = resolve_handbrake(args.handbrake);
    let command = CommandCompiler::new(binary).compile(&config)?;
    log::info!("Compiled {} tokens", command.tokens().len());

    println!("{command}");
    Ok(())
}

//! Implementation of the `validate` command.

use crate::cli::ValidateArgs;
use crate::commands::load_validator;
use crate::error::CliResult;
use crate::output::{print_section, print_status, print_success};

/// Validates a configuration file and reports what it describes.
pub fn execute_validate(args: ValidateArgs) -> CliResult<()> {
    print_section("Configuration Validation");
    print_status("Config file", args.config.display());

    let validator = load_validator(args.schema.as_deref())?;
    log::info!("Validating {}", args.config.display());
    let config = validator.validated_from_file(&args.config)?;

    print_status("Source", config.source()?);
    print_status("Output file", config.output_file()?);
    print_status("Sections", config.sections().count());
    print_success("Configuration is valid");
    Ok(())
}

//! Implementation of the `encode` command.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use hbrake_core::{
    CommandCompiler, FfprobeFrameProber, NullProgressSink, ProgressBarSink, ProgressSink,
    check_dependency, run_encode,
};

use crate::cli::EncodeArgs;
use crate::commands::{load_validator, resolve_handbrake};
use crate::error::CliResult;
use crate::output::{print_section, print_status, print_success};

/// Validates, compiles, and runs an encode to completion.
pub fn execute_encode(args: EncodeArgs) -> CliResult<()> {
    print_section("Encode");

    let validator = load_validator(args.schema.as_deref())?;
    let config = validator.validated_from_file(&args.config)?;

    let binary = resolve_handbrake(args.handbrake);
    check_dependency(&binary.to_string_lossy(), "--version")?;

    let command = CommandCompiler::new(&binary).compile(&config)?;
    let source = PathBuf::from(config.source()?);

    print_status("Source", config.source()?);
    print_status("Output file", config.output_file()?);
    print_status("Command", command.to_shell_string());

    let sink: Box<dyn ProgressSink> = if args.quiet {
        Box::new(NullProgressSink)
    } else {
        Box::new(ProgressBarSink::new())
    };

    let start = Instant::now();
    run_encode(command, &source, &FfprobeFrameProber, sink.as_ref())?;

    print_success(&format!(
        "Encode finished in {}",
        format_elapsed(start.elapsed())
    ));
    Ok(())
}

fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

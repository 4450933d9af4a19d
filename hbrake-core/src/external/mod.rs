//! External tool boundary.
//!
//! Everything that touches a process outside this crate lives here: the
//! HandBrakeCLI supervisor, the ffprobe-backed frame prober, and the
//! dependency pre-flight check. The prober and progress sink are traits so
//! consumers (and tests) can inject their own implementations.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// FFprobe-backed frame counting.
pub mod ffprobe_executor;

/// HandBrakeCLI process supervision.
pub mod handbrake;

pub use ffprobe_executor::{FfprobeFrameProber, FrameProber};
pub use handbrake::{parse_progress_fraction, run_encode};

/// The HandBrakeCLI binary name on this platform.
pub fn handbrake_binary_name() -> &'static str {
    if cfg!(windows) {
        "HandBrakeCLI.exe"
    } else {
        "HandBrakeCLI"
    }
}

/// Checks that an external command is present and executable.
///
/// Runs the command with its version argument and discards the output; the
/// exit status is irrelevant, only whether the process could start.
pub fn check_dependency(cmd_name: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(err) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {err}");
            Err(CoreError::CommandStart(cmd_name.to_string(), err))
        }
    }
}

//! HandBrakeCLI process supervision.
//!
//! [`run_encode`] launches a compiled command and turns the tool's streamed
//! output into progress updates. Both pipes feed one channel through reader
//! threads, and the supervising loop blocks on that channel with a fixed
//! poll timeout: lines are handled the moment they arrive, and a silent
//! process is re-checked for exit once per interval instead of being waited
//! on blindly.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::CompiledCommand;
use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::external::FrameProber;
use crate::progress::ProgressSink;

/// How long the supervising loop waits for the next output line before
/// re-checking whether the process has exited.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Matches the decimal completion fraction in HandBrakeCLI's `--json`
/// progress stream.
static PROGRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""Progress"\s*:\s*([0-9]*\.?[0-9]+)"#).unwrap());

/// A line read from the supervised process, tagged with its pipe.
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Extracts the completion fraction from one output line, if present.
///
/// Lines that do not carry a progress report are not an error; the stream
/// mixes progress objects with plenty of other output.
pub fn parse_progress_fraction(line: &str) -> Option<f64> {
    PROGRESS_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Frames completed at `fraction` of a `total`-frame encode.
fn completed_frames(fraction: f64, total: u64) -> u64 {
    (fraction * total as f64).floor() as u64
}

/// Runs a compiled command to completion, reporting progress to `sink`.
///
/// The frame prober is consulted once up front; a probe failure degrades to
/// an unbounded total rather than aborting the run. `--json` is appended to
/// the command when absent, since only the JSON stream carries the progress
/// fraction this supervisor parses. A non-zero exit is returned as
/// [`CommandFailed`](crate::CoreError::CommandFailed) carrying the captured
/// stderr; an interrupted launch aborts immediately with
/// [`Interrupted`](crate::CoreError::Interrupted).
pub fn run_encode(
    command: CompiledCommand,
    source: &Path,
    prober: &dyn FrameProber,
    sink: &dyn ProgressSink,
) -> CoreResult<()> {
    let total = match prober.total_frames(source) {
        Ok(total) => total,
        Err(err) => {
            log::warn!(
                "Frame count probe failed for {}: {}. Progress will be unbounded.",
                source.display(),
                err
            );
            None
        }
    };

    let mut command = command;
    command.ensure_json_progress();
    let tool = command.program().to_string();
    log::info!("Running: {}", command.to_shell_string());

    let mut child = Command::new(command.program())
        .args(command.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| command_start_error(&tool, err))?;

    let label = format!(
        "HandBrake >> {}",
        source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string())
    );
    sink.begin(&label, total);

    let (tx, rx) = mpsc::channel::<OutputLine>();
    if let Some(stdout) = child.stdout.take() {
        spawn_reader(stdout, OutputLine::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(stderr, OutputLine::Stderr, tx.clone());
    }
    // Only the reader threads hold senders now, so the channel disconnects
    // exactly when both pipes reach EOF.
    drop(tx);

    let mut stderr_lines: Vec<String> = Vec::new();
    let status: ExitStatus = loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => handle_line(line, total, sink, &mut stderr_lines),
            Err(RecvTimeoutError::Timeout) => {
                if let Some(status) = child.try_wait()? {
                    // The process is gone but something still holds a pipe
                    // open. Take what already arrived and stop; nothing is
                    // parsed past exit.
                    while let Ok(line) = rx.try_recv() {
                        handle_line(line, total, sink, &mut stderr_lines);
                    }
                    break status;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                break child.wait()?;
            }
        }
    };

    sink.finish();

    if status.success() {
        log::info!("{tool} finished successfully");
        Ok(())
    } else {
        Err(command_failed_error(tool, status, stderr_lines.join("\n")))
    }
}

fn handle_line(
    line: OutputLine,
    total: Option<u64>,
    sink: &dyn ProgressSink,
    stderr_lines: &mut Vec<String>,
) {
    let text = match line {
        OutputLine::Stdout(text) => {
            log::debug!("STDOUT: {text}");
            text
        }
        OutputLine::Stderr(text) => {
            log::debug!("STDERR: {text}");
            stderr_lines.push(text.clone());
            text
        }
    };

    if let Some(fraction) = parse_progress_fraction(&text) {
        match total {
            Some(total) => sink.advance(completed_frames(fraction, total)),
            None => sink.advance_fraction(fraction),
        }
    }
}

/// Forwards lines from one pipe into the shared channel. The thread ends
/// at pipe EOF or when the receiver hangs up.
fn spawn_reader<R>(reader: R, tag: fn(String) -> OutputLine, tx: Sender<OutputLine>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        for line in BufReader::new(reader).lines() {
            match line {
                Ok(line) => {
                    if tx.send(tag(line)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_progress_fractions() {
        assert_eq!(parse_progress_fraction(r#""Progress": 0.5"#), Some(0.5));
        assert_eq!(parse_progress_fraction(r#""Progress":0.25,"#), Some(0.25));
        assert_eq!(parse_progress_fraction(r#""Progress": 1.0"#), Some(1.0));
    }

    #[test]
    fn extracts_fractions_from_full_json_lines() {
        let line = r#"{"State": "WORKING", "Working": {"Progress": 0.123456, "Rate": 24.5}}"#;
        assert_eq!(parse_progress_fraction(line), Some(0.123456));
    }

    #[test]
    fn ignores_lines_without_progress() {
        assert_eq!(parse_progress_fraction("Encoding: task 1 of 1"), None);
        assert_eq!(parse_progress_fraction(r#"{"State": "WORKING"}"#), None);
        assert_eq!(parse_progress_fraction(""), None);
    }

    #[test]
    fn completed_frames_floors_the_product() {
        assert_eq!(completed_frames(0.5, 1001), 500);
        assert_eq!(completed_frames(0.0, 2000), 0);
        assert_eq!(completed_frames(1.0, 2000), 2000);
        assert_eq!(completed_frames(0.333, 100), 33);
    }
}

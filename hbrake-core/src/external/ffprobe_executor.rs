//! FFprobe integration for frame-count probing.
//!
//! The supervisor sizes its progress task from the number of video frames
//! in the source. The probe goes through the [`FrameProber`] trait so tests
//! can substitute a stub for the real ffprobe invocation.

use std::path::Path;

use ffprobe::{FfProbeError, ffprobe};

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

/// Determines the total video frame count of a source file.
pub trait FrameProber: Send + Sync {
    /// Total frames in the first video stream of `source`.
    ///
    /// `Ok(None)` means the source was readable but the count could not be
    /// determined; callers treat that as an unbounded total.
    fn total_frames(&self, source: &Path) -> CoreResult<Option<u64>>;
}

/// Production prober backed by the ffprobe crate.
#[derive(Debug, Clone, Default)]
pub struct FfprobeFrameProber;

impl FrameProber for FfprobeFrameProber {
    fn total_frames(&self, source: &Path) -> CoreResult<Option<u64>> {
        log::debug!(
            "Running ffprobe (via crate) for frame count on: {}",
            source.display()
        );
        let metadata = match ffprobe(source) {
            Ok(metadata) => metadata,
            Err(err) => return Err(map_ffprobe_error(err, "frame count")),
        };

        let Some(stream) = metadata
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("video"))
        else {
            log::warn!("No video stream found by ffprobe for {}", source.display());
            return Ok(None);
        };

        // nb_frames is exact when the container records it.
        if let Some(frames) = stream
            .nb_frames
            .as_deref()
            .and_then(|f| f.parse::<u64>().ok())
        {
            return Ok(Some(frames));
        }

        // Otherwise estimate from duration and frame rate.
        let duration = stream
            .duration
            .as_deref()
            .or(metadata.format.duration.as_deref())
            .and_then(|d| d.parse::<f64>().ok());
        let rate = parse_frame_rate(&stream.r_frame_rate);
        match (duration, rate) {
            (Some(duration), Some(rate)) => {
                let estimate = (duration * rate).round() as u64;
                Ok((estimate > 0).then_some(estimate))
            }
            _ => {
                log::warn!(
                    "Could not determine frame count for {}",
                    source.display()
                );
                Ok(None)
            }
        }
    }
}

/// Parses ffprobe's `num/den` frame-rate notation (a bare number is also
/// accepted).
fn parse_frame_rate(rate: &str) -> Option<f64> {
    match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            (den != 0.0 && num > 0.0).then(|| num / den)
        }
        None => rate.trim().parse().ok().filter(|rate| *rate > 0.0),
    }
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::ConfigParse(err),
        _ => CoreError::OperationFailed(format!(
            "Unknown ffprobe error during {context}: {err:?}"
        )),
    }
}

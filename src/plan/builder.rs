//! Turning a [`PlanRequest`] into an [`ExtractionPlan`].

use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, warn};

use super::naming::{ClipStamp, is_same_file, output_path};
use super::{ExtractionPlan, PlanRequest, Planned, StreamMode};
use crate::config::EncodingConfig;
use crate::error::{Error, Result};
use crate::time::Duration;

/// Build the extraction plan for `request`.
///
/// Relative paths are resolved against `cwd`, which is also where the output
/// is written.
///
/// # Errors
///
/// Returns [`Error::NegativeDuration`] when the end precedes the start,
/// [`Error::EmptyClip`] for a zero-length clip, and
/// [`Error::OutputOverwritesInput`] when the derived output is the input.
pub fn build_plan(request: &PlanRequest, encoding: &EncodingConfig, cwd: &Path) -> Result<Planned> {
    if !request.has_work() {
        return Ok(Planned::NoOp);
    }

    let input = cwd.join(&request.input);
    let start = request.start.unwrap_or(Duration::ZERO);
    let span = resolve_span(start, request.end, request.duration)?;
    let mode = select_mode(request, encoding);

    let clip = (request.start.is_some() || request.duration.is_some()).then_some(ClipStamp {
        start,
        end: span.map(|(end, _)| end),
    });

    let extension = match (&request.format, &mode) {
        (Some(format), _) => Some(OsStr::new(format.as_str())),
        (None, StreamMode::AudioOnly { .. }) => Some(OsStr::new(encoding.audio_format.as_str())),
        (None, _) => input.extension(),
    };

    let output = output_path(&input, clip, extension, cwd);
    if is_same_file(&input, &output) {
        return Err(Error::OutputOverwritesInput { path: output });
    }

    debug!(
        "Planned {} -> {} ({mode})",
        input.display(),
        output.display()
    );

    Ok(Planned::Extract(ExtractionPlan::new(
        input, output, start, span, mode,
    )))
}

/// Resolve `(end, duration)`; `None` means the clip runs to end of file.
///
/// An explicit end wins over an explicit duration.
fn resolve_span(
    start: Duration,
    end: Option<Duration>,
    duration: Option<Duration>,
) -> Result<Option<(Duration, Duration)>> {
    let span = match (end, duration) {
        (Some(end), duration) => {
            if let Some(ignored) = duration {
                warn!("Both end time and duration given; using end time {end} and ignoring duration {ignored}");
            }
            let length = end
                .checked_sub(start)
                .ok_or(Error::NegativeDuration { start, end })?;
            Some((end, length))
        }
        (None, Some(length)) => Some((start + length, length)),
        (None, None) => None,
    };

    if span.is_some_and(|(_, length)| length.is_zero()) {
        return Err(Error::EmptyClip { start });
    }

    Ok(span)
}

/// Pick the stream policy: audio-only, then copy, then re-encode.
fn select_mode(request: &PlanRequest, encoding: &EncodingConfig) -> StreamMode {
    if request.extract_audio {
        StreamMode::AudioOnly {
            quality: encoding.audio_quality,
        }
    } else if request.copy {
        StreamMode::Copy
    } else {
        StreamMode::Reencode {
            preset: encoding.preset.clone(),
            crf: encoding.crf,
        }
    }
}

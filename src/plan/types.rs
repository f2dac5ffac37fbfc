//! Plan type definitions.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::time::Duration;

/// How streams are handled by the external tool. Exactly one applies per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreamMode {
    /// Drop video and encode audio at a VBR quality.
    AudioOnly {
        /// ffmpeg `-q:a` value.
        quality: u8,
    },
    /// Re-mux every stream without re-encoding.
    Copy,
    /// Re-encode with an encoder preset and constant rate factor.
    Reencode {
        /// Encoder preset name.
        preset: String,
        /// Constant rate factor.
        crf: u8,
    },
}

impl fmt::Display for StreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AudioOnly { quality } => write!(f, "audio only (quality {quality})"),
            Self::Copy => write!(f, "stream copy"),
            Self::Reencode { preset, crf } => write!(f, "re-encode (preset {preset}, crf {crf})"),
        }
    }
}

/// What the user asked for, before any defaults are resolved.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Input media file, relative to the working directory or absolute.
    pub input: PathBuf,
    /// Clip start.
    pub start: Option<Duration>,
    /// Clip end; takes precedence over `duration`.
    pub end: Option<Duration>,
    /// Clip length.
    pub duration: Option<Duration>,
    /// Extract the audio stream only.
    pub extract_audio: bool,
    /// Copy streams instead of re-encoding.
    pub copy: bool,
    /// Output extension override, without the leading dot.
    pub format: Option<String>,
}

impl PlanRequest {
    /// Whether the request asks for any work at all.
    #[must_use]
    pub const fn has_work(&self) -> bool {
        self.start.is_some() || self.duration.is_some() || self.extract_audio
    }
}

/// The resolved extraction.
///
/// End and duration are either both known or both unknown; when unknown the
/// clip runs to the end of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionPlan {
    input: PathBuf,
    output: PathBuf,
    start: Duration,
    end: Option<Duration>,
    duration: Option<Duration>,
    mode: StreamMode,
}

impl ExtractionPlan {
    pub(super) fn new(
        input: PathBuf,
        output: PathBuf,
        start: Duration,
        span: Option<(Duration, Duration)>,
        mode: StreamMode,
    ) -> Self {
        Self {
            input,
            output,
            start,
            end: span.map(|(end, _)| end),
            duration: span.map(|(_, duration)| duration),
            mode,
        }
    }

    /// Absolute input path.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Absolute output path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Seek offset.
    #[must_use]
    pub const fn start(&self) -> Duration {
        self.start
    }

    /// End offset, `None` when the clip runs to end of file.
    #[must_use]
    pub const fn end(&self) -> Option<Duration> {
        self.end
    }

    /// Clip length, `None` when the clip runs to end of file.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Stream handling policy.
    #[must_use]
    pub const fn mode(&self) -> &StreamMode {
        &self.mode
    }
}

/// Result of planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Planned {
    /// Nothing was requested; the input already is the desired output.
    NoOp,
    /// Run the extraction.
    Extract(ExtractionPlan),
}

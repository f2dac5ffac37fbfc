//! JSON envelope types for CLI output.
//!
//! With `--output-mode json` every run prints exactly one envelope on
//! stdout, so clipcut can be driven by scripts and frontends.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::plan::StreamMode;
use crate::time::Duration;

/// Current spec version for JSON envelope.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
    /// Error occurred.
    Error,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// A clip or audio track was extracted (or planned, in a dry run).
    Extraction,
    /// Nothing was requested.
    NoOp,
}

/// Payload for a completed or planned extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionPayload {
    /// Result discriminator.
    pub result_type: ResultType,
    /// Absolute input path.
    pub input: PathBuf,
    /// Absolute output path.
    pub output: PathBuf,
    /// Seek offset.
    pub start: Duration,
    /// End offset, `null` when open-ended.
    pub end: Option<Duration>,
    /// Clip length, `null` when open-ended.
    pub duration: Option<Duration>,
    /// Stream handling mode.
    pub mode: StreamMode,
    /// The ffmpeg invocation.
    pub command: String,
    /// Whether ffmpeg was skipped.
    pub dry_run: bool,
}

/// Payload for a run with nothing to do.
#[derive(Debug, Clone, Serialize)]
pub struct NoOpPayload {
    /// Result discriminator.
    pub result_type: ResultType,
    /// Why nothing was done.
    pub message: String,
}

/// Error payload for error events.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    /// Error code (`snake_case` identifier).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

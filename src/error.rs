//! Error types for clipcut.

use std::path::PathBuf;

use crate::time::Duration;

/// Result type alias for clipcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for clipcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Time string does not match `[[hh:]mm:]ss[.SSS]`.
    #[error("invalid time \"{input}\": expected [[hh:]mm:]ss[.SSS]")]
    InvalidTimeFormat {
        /// The rejected input.
        input: String,
    },

    /// End time lies before the start time.
    #[error("end time {end} is before start time {start}")]
    NegativeDuration {
        /// Resolved start offset.
        start: Duration,
        /// Requested end offset.
        end: Duration,
    },

    /// The resolved clip has no length.
    #[error("clip starting at {start} has zero length")]
    EmptyClip {
        /// Resolved start offset.
        start: Duration,
    },

    /// The external media tool failed to launch or exited unsuccessfully.
    #[error("{tool} failed: {message}")]
    ExternalToolFailure {
        /// Tool that was invoked.
        tool: String,
        /// Message reported by the tool.
        message: String,
    },

    /// Input media file does not exist.
    #[error("input file does not exist: {path}")]
    InputNotFound {
        /// Path to the missing input.
        path: PathBuf,
    },

    /// Derived output path would replace the input file.
    #[error("output would overwrite the input file: {path} (use --format to pick another extension)")]
    OutputOverwritesInput {
        /// The colliding path.
        path: PathBuf,
    },

    /// Current working directory could not be determined.
    #[error("could not determine current directory")]
    CurrentDir {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Stable `snake_case` identifier used in JSON error events.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidTimeFormat { .. } => "invalid_time_format",
            Self::NegativeDuration { .. } => "negative_duration",
            Self::EmptyClip { .. } => "empty_clip",
            Self::ExternalToolFailure { .. } => "external_tool_failure",
            Self::InputNotFound { .. } => "input_not_found",
            Self::OutputOverwritesInput { .. } => "output_overwrites_input",
            Self::CurrentDir { .. } => "current_dir",
            Self::ConfigDirNotFound => "config_dir_not_found",
            Self::ConfigRead { .. } => "config_read",
            Self::ConfigParse { .. } => "config_parse",
            Self::ConfigValidation { .. } => "config_validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_duration_message_uses_clock_format() {
        let err = Error::NegativeDuration {
            start: Duration::from_parts(0, 0, 15, 0),
            end: Duration::from_parts(0, 0, 10, 0),
        };
        assert_eq!(
            err.to_string(),
            "end time 00:00:10.000 is before start time 00:00:15.000"
        );
    }

    #[test]
    fn test_external_tool_failure_message() {
        let err = Error::ExternalToolFailure {
            tool: "ffmpeg".to_string(),
            message: "clip.mp4: No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ffmpeg failed: clip.mp4: No such file or directory"
        );
    }
}

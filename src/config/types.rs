//! Configuration type definitions.

use crate::constants::{
    DEFAULT_AUDIO_FORMAT, DEFAULT_AUDIO_QUALITY, DEFAULT_CRF, DEFAULT_FFMPEG_PATH, DEFAULT_PRESET,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External tool settings.
    pub ffmpeg: FfmpegConfig,

    /// Encoding defaults.
    pub encoding: EncodingConfig,
}

/// Location of the ffmpeg binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FfmpegConfig {
    /// Path or bare command name of the ffmpeg binary.
    pub path: PathBuf,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FFMPEG_PATH),
        }
    }
}

/// Encoding parameters for each stream mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodingConfig {
    /// Output extension for audio-only extraction.
    pub audio_format: String,

    /// VBR quality for audio-only extraction (0 best, 9 worst).
    pub audio_quality: u8,

    /// Encoder preset for re-encoding.
    pub preset: String,

    /// Constant rate factor for re-encoding.
    pub crf: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            audio_quality: DEFAULT_AUDIO_QUALITY,
            preset: DEFAULT_PRESET.to_string(),
            crf: DEFAULT_CRF,
        }
    }
}

/// How results are reported on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable log lines.
    #[default]
    Human,
    /// A single JSON result envelope.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

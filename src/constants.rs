//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "clipcut";

/// Default ffmpeg binary, resolved through `PATH`.
pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

/// Extension used for audio-only extraction when no format is requested.
pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

/// Default VBR quality for audio-only extraction (ffmpeg `-q:a`).
pub const DEFAULT_AUDIO_QUALITY: u8 = 2;

/// Default encoder preset used when re-encoding.
pub const DEFAULT_PRESET: &str = "veryfast";

/// Default constant rate factor used when re-encoding.
pub const DEFAULT_CRF: u8 = 23;

/// Separator between the input stem and the clip range in output names.
pub const CLIP_SUFFIX_PREFIX: &str = "--clip-";

/// Separator between the start and end stamps in output names.
pub const CLIP_RANGE_SEPARATOR: &str = "--";

/// Placeholder for an open-ended clip in output names.
pub const OPEN_END_MARKER: &str = "end";

/// Valid ranges for encoding settings.
pub mod encoding {
    /// Best (lowest) VBR audio quality value.
    pub const AUDIO_QUALITY_MIN: u8 = 0;
    /// Worst (highest) VBR audio quality value.
    pub const AUDIO_QUALITY_MAX: u8 = 9;
    /// Lowest accepted CRF (lossless for x264).
    pub const CRF_MIN: u8 = 0;
    /// Highest accepted CRF.
    pub const CRF_MAX: u8 = 51;
    /// Encoder presets understood by x264/x265, fastest first.
    pub const PRESETS: &[&str] = &[
        "ultrafast",
        "superfast",
        "veryfast",
        "faster",
        "fast",
        "medium",
        "slow",
        "slower",
        "veryslow",
        "placebo",
    ];
}

/// Arguments passed to every ffmpeg invocation before the seek offset.
pub mod ffmpeg {
    /// Quiet the banner and only print errors to stderr.
    pub const COMMON_ARGS: &[&str] = &["-hide_banner", "-loglevel", "error", "-y"];
}

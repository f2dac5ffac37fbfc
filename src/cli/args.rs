//! CLI argument definitions.

use crate::config::OutputMode;
use crate::plan::PlanRequest;
use crate::time::Duration;
use clap::Parser;
use std::path::PathBuf;

use super::validators::{parse_format, parse_time_arg};

/// Extract part of a media file.
///
/// Times use the form [[hh:]mm:]ss[.SSS], e.g. 90, 1:30 or 0:01:30.250.
#[derive(Debug, Parser)]
#[command(name = "clipcut")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path to input file.
    #[arg(value_name = "IN_FILE")]
    pub input: PathBuf,

    /// Start position.
    #[arg(value_name = "START_TIME", value_parser = parse_time_arg)]
    pub start_time: Option<Duration>,

    /// End position (takes precedence over --duration).
    #[arg(value_name = "END_TIME", value_parser = parse_time_arg)]
    pub end_time: Option<Duration>,

    /// Optional duration instead of end time.
    #[arg(short, long, value_name = "TIME", value_parser = parse_time_arg)]
    pub duration: Option<Duration>,

    /// Extract audio stream only.
    #[arg(short = 'x', long)]
    pub extract_audio: bool,

    /// Output container/format (file extension), e.g. mkv or ogg.
    #[arg(short, long, value_name = "EXT", value_parser = parse_format)]
    pub format: Option<String>,

    /// Copy streams instead of re-encoding (ignored with --extract-audio).
    #[arg(short, long)]
    pub copy: bool,

    /// Path to the ffmpeg binary (overrides config).
    #[arg(long, value_name = "PATH")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Audio extension used by --extract-audio when --format is not given.
    #[arg(long, value_name = "EXT", value_parser = parse_format, hide = true)]
    pub audio_format: Option<String>,

    /// Configuration file (default: platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show what would be run without running it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output mode for results.
    #[arg(long, value_enum, default_value_t = OutputMode::Human)]
    pub output_mode: OutputMode,

    /// No console output except for errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the ffmpeg invocation (-vv: debug logs, -vvv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The extraction request described by these arguments.
    #[must_use]
    pub fn plan_request(&self) -> PlanRequest {
        PlanRequest {
            input: self.input.clone(),
            start: self.start_time,
            end: self.end_time,
            duration: self.duration,
            extract_audio: self.extract_audio,
            copy: self.copy,
            format: self.format.clone(),
        }
    }
}

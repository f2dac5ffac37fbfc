//! Process-spawning [`MediaTool`] backed by the ffmpeg binary.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration as StdDuration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{MediaTool, build_args, command_line};
use crate::error::{Error, Result};
use crate::plan::ExtractionPlan;

/// Spinner redraw interval while ffmpeg is running.
const SPINNER_TICK: StdDuration = StdDuration::from_millis(120);

/// Runs ffmpeg as a child process and waits for it to finish.
#[derive(Debug, Clone)]
pub struct FfmpegTool {
    binary: PathBuf,
    show_progress: bool,
}

impl FfmpegTool {
    /// Create a runner for the given ffmpeg binary.
    #[must_use]
    pub fn new(binary: PathBuf) -> Self {
        Self {
            binary,
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while ffmpeg runs.
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn tool_name(&self) -> String {
        self.binary.display().to_string()
    }

    fn spinner(&self, plan: &ExtractionPlan) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        // Template is hardcoded and known to be valid
        #[allow(clippy::expect_used)]
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .expect("valid spinner template"),
        );
        pb.set_message(format!(
            "Writing {}",
            plan.output()
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
        ));
        pb.enable_steady_tick(SPINNER_TICK);
        pb
    }
}

impl MediaTool for FfmpegTool {
    fn run(&self, plan: &ExtractionPlan) -> Result<()> {
        let args = build_args(plan);
        debug!("Spawning {} with {} arguments", self.binary.display(), args.len());

        let pb = self.spinner(plan);
        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();
        pb.finish_and_clear();

        let output = output.map_err(|e| Error::ExternalToolFailure {
            tool: self.tool_name(),
            message: format!("could not be started: {e}"),
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            reported => reported.to_string(),
        };

        Err(Error::ExternalToolFailure {
            tool: self.tool_name(),
            message,
        })
    }

    fn command_line(&self, plan: &ExtractionPlan) -> String {
        command_line(&self.binary, &build_args(plan))
    }
}

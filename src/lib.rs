//! Clipcut - cut clips and audio tracks out of media files.
//!
//! This crate turns start/end times and a handful of flags into an ffmpeg
//! invocation: it parses the times, resolves the clip range, derives an
//! output name that records what was done and picks how streams are handled.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod ffmpeg;
pub mod output;
pub mod plan;
pub mod time;

use clap::Parser;
use cli::Cli;
use config::{Config, OutputMode};
use ffmpeg::{FfmpegTool, MediaTool};
use output::{NoOpPayload, ResultType, emit_json_error, emit_json_result, extraction_payload};
use plan::{ExtractionPlan, PlanRequest, Planned, build_plan};
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// Message reported when there is nothing to extract.
const NO_OP_MESSAGE: &str = "No start time given and not asked to extract audio, nothing to do";

/// Main entry point for clipcut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let structured = cli.output_mode.is_structured();

    // Keep stdout clean for the JSON envelope
    init_logging(cli.verbose, cli.quiet || structured);

    let result = run_cli(&cli);
    if structured && let Err(ref e) = result {
        emit_json_error(e);
    }
    result.map(|_| ())
}

/// Options controlling how a planned extraction is carried out.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report the plan but do not invoke the tool.
    pub dry_run: bool,
    /// Report the exact tool invocation.
    pub show_command: bool,
    /// How results are reported.
    pub output_mode: OutputMode,
}

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was requested.
    NoOp,
    /// The plan was reported but not executed.
    DryRun(ExtractionPlan),
    /// The tool ran successfully.
    Extracted(ExtractionPlan),
}

/// Plan `request` and carry it out with `tool`.
///
/// Relative paths resolve against `cwd`. Nothing is executed for a no-op or a
/// dry run.
pub fn execute(
    request: &PlanRequest,
    config: &Config,
    cwd: &Path,
    tool: &dyn MediaTool,
    options: RunOptions,
) -> Result<Outcome> {
    let structured = options.output_mode.is_structured();

    let plan = match build_plan(request, &config.encoding, cwd)? {
        Planned::NoOp => {
            if structured {
                emit_json_result(&NoOpPayload {
                    result_type: ResultType::NoOp,
                    message: NO_OP_MESSAGE.to_string(),
                });
            } else {
                info!("{NO_OP_MESSAGE}");
            }
            return Ok(Outcome::NoOp);
        }
        Planned::Extract(plan) => plan,
    };

    if !plan.input().exists() {
        return Err(Error::InputNotFound {
            path: plan.input().to_path_buf(),
        });
    }

    let command = tool.command_line(&plan);
    if !structured {
        output::log_summary(&plan);
        if options.show_command || options.dry_run {
            info!("Executing: {command}");
        }
    }

    if options.dry_run {
        if structured {
            emit_json_result(&extraction_payload(&plan, command, true));
        } else {
            info!("Dry run, ffmpeg not started");
        }
        return Ok(Outcome::DryRun(plan));
    }

    tool.run(&plan)?;

    if structured {
        emit_json_result(&extraction_payload(&plan, command, false));
    } else {
        info!("Wrote {}", plan.output().display());
    }

    Ok(Outcome::Extracted(plan))
}

fn run_cli(cli: &Cli) -> Result<Outcome> {
    let mut config = config::load_config(cli.config.as_deref())?;

    // Command-line overrides
    if let Some(path) = &cli.ffmpeg_path {
        config.ffmpeg.path.clone_from(path);
    }
    if let Some(format) = &cli.audio_format {
        config.encoding.audio_format.clone_from(format);
    }

    let cwd = std::env::current_dir().map_err(|source| Error::CurrentDir { source })?;

    let show_progress = !cli.quiet && !cli.dry_run && !cli.output_mode.is_structured();
    let tool = FfmpegTool::new(config.ffmpeg.path.clone()).with_progress(show_progress);

    let options = RunOptions {
        dry_run: cli.dry_run,
        show_command: cli.verbose > 0,
        output_mode: cli.output_mode,
    };

    execute(&cli.plan_request(), &config, &cwd, &tool, options)
}

/// Initialize logging based on verbosity.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // -v only shows the ffmpeg invocation; -vv and up raise the level.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 | 1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

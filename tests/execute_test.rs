//! Tests for planning and dispatching an extraction through a media tool.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use clipcut::config::Config;
use clipcut::ffmpeg::MediaTool;
use clipcut::plan::{ExtractionPlan, PlanRequest, StreamMode};
use clipcut::time::{Duration, parse_time};
use clipcut::{Error, Outcome, RunOptions, execute};
use tempfile::TempDir;

/// Records plans instead of running anything.
#[derive(Default)]
struct RecordingTool {
    runs: RefCell<Vec<ExtractionPlan>>,
    fail_with: Option<String>,
}

impl MediaTool for RecordingTool {
    fn run(&self, plan: &ExtractionPlan) -> clipcut::Result<()> {
        self.runs.borrow_mut().push(plan.clone());
        match &self.fail_with {
            Some(message) => Err(Error::ExternalToolFailure {
                tool: "recorder".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn command_line(&self, plan: &ExtractionPlan) -> String {
        format!("recorder {}", plan.output().display())
    }
}

fn workspace_with(file: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(file), b"not really media").unwrap();
    dir
}

fn request(input: &str) -> PlanRequest {
    PlanRequest {
        input: input.into(),
        ..PlanRequest::default()
    }
}

#[test]
fn test_noop_does_not_invoke_tool() {
    let dir = workspace_with("clip.mp4");
    let tool = RecordingTool::default();

    let outcome = execute(
        &request("clip.mp4"),
        &Config::default(),
        dir.path(),
        &tool,
        RunOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoOp);
    assert!(tool.runs.borrow().is_empty());
}

#[test]
fn test_noop_does_not_require_input() {
    let dir = TempDir::new().unwrap();
    let tool = RecordingTool::default();

    let outcome = execute(
        &request("missing.mp4"),
        &Config::default(),
        dir.path(),
        &tool,
        RunOptions::default(),
    );
    assert!(matches!(outcome, Ok(Outcome::NoOp)));
}

#[test]
fn test_clip_is_dispatched_once() {
    let dir = workspace_with("clip.mp4");
    let tool = RecordingTool::default();

    let mut req = request("clip.mp4");
    req.start = Some(parse_time("10").unwrap());
    req.end = Some(parse_time("15").unwrap());

    let outcome = execute(&req, &Config::default(), dir.path(), &tool, RunOptions::default())
        .unwrap();

    let runs = tool.runs.borrow();
    assert_eq!(runs.len(), 1);
    let plan = &runs[0];
    assert_eq!(outcome, Outcome::Extracted(plan.clone()));
    assert_eq!(plan.input(), dir.path().join("clip.mp4"));
    assert_eq!(
        plan.output(),
        dir.path().join("clip--clip-00-00-10-000--00-00-15-000.mp4")
    );
    assert_eq!(plan.duration(), Some(Duration::from_millis(5_000)));
}

#[test]
fn test_negative_duration_does_not_invoke_tool() {
    let dir = workspace_with("clip.mp4");
    let tool = RecordingTool::default();

    let mut req = request("clip.mp4");
    req.start = Some(parse_time("15").unwrap());
    req.end = Some(parse_time("10").unwrap());

    let result = execute(&req, &Config::default(), dir.path(), &tool, RunOptions::default());
    assert!(matches!(result, Err(Error::NegativeDuration { .. })));
    assert!(tool.runs.borrow().is_empty());
}

#[test]
fn test_missing_input_does_not_invoke_tool() {
    let dir = TempDir::new().unwrap();
    let tool = RecordingTool::default();

    let mut req = request("missing.mp4");
    req.extract_audio = true;

    let result = execute(&req, &Config::default(), dir.path(), &tool, RunOptions::default());
    assert!(matches!(result, Err(Error::InputNotFound { ref path })
        if path == &dir.path().join("missing.mp4")));
    assert!(tool.runs.borrow().is_empty());
}

#[test]
fn test_dry_run_does_not_invoke_tool() {
    let dir = workspace_with("talk.mkv");
    let tool = RecordingTool::default();

    let mut req = request("talk.mkv");
    req.extract_audio = true;

    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };
    let outcome = execute(&req, &Config::default(), dir.path(), &tool, options).unwrap();

    let Outcome::DryRun(plan) = outcome else {
        panic!("expected a dry run");
    };
    assert_eq!(plan.output(), dir.path().join("talk.mp3"));
    assert_eq!(plan.mode(), &StreamMode::AudioOnly { quality: 2 });
    assert!(tool.runs.borrow().is_empty());
}

#[test]
fn test_tool_failure_is_surfaced_as_is() {
    let dir = workspace_with("clip.mp4");
    let tool = RecordingTool {
        fail_with: Some("Invalid data found when processing input".to_string()),
        ..RecordingTool::default()
    };

    let mut req = request("clip.mp4");
    req.start = Some(parse_time("1").unwrap());

    let result = execute(&req, &Config::default(), dir.path(), &tool, RunOptions::default());
    assert!(matches!(result, Err(Error::ExternalToolFailure { ref message, .. })
        if message == "Invalid data found when processing input"));
    assert_eq!(tool.runs.borrow().len(), 1);
}

#[test]
fn test_encoding_config_flows_into_mode() {
    let dir = workspace_with("clip.mp4");
    let tool = RecordingTool::default();

    let mut config = Config::default();
    config.encoding.preset = "slow".to_string();
    config.encoding.crf = 18;

    let mut req = request("clip.mp4");
    req.duration = Some(parse_time("30").unwrap());

    execute(&req, &config, dir.path(), &tool, RunOptions::default()).unwrap();

    assert_eq!(
        tool.runs.borrow()[0].mode(),
        &StreamMode::Reencode {
            preset: "slow".to_string(),
            crf: 18
        }
    );
}

#[test]
fn test_output_next_to_input_is_not_overwritten() {
    let dir = workspace_with("song.mp3");
    let tool = RecordingTool::default();

    let mut req = request("song.mp3");
    req.extract_audio = true;

    let result = execute(&req, &Config::default(), dir.path(), &tool, RunOptions::default());
    assert!(matches!(result, Err(Error::OutputOverwritesInput { .. })));
    assert!(Path::new(&dir.path().join("song.mp3")).exists());
    assert!(tool.runs.borrow().is_empty());
}

//! ffmpeg argument construction.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::constants::ffmpeg::COMMON_ARGS;
use crate::plan::{ExtractionPlan, StreamMode};

/// Build the ffmpeg argument vector for `plan`.
///
/// The seek offset is always passed before `-i` (input seeking), `-t` only
/// when the clip length is known.
pub fn build_args(plan: &ExtractionPlan) -> Vec<OsString> {
    let mut args: Vec<OsString> = COMMON_ARGS.iter().map(OsString::from).collect();

    args.push("-ss".into());
    args.push(plan.start().ffmpeg_seconds().into());
    args.push("-i".into());
    args.push(plan.input().as_os_str().to_owned());

    if let Some(duration) = plan.duration() {
        args.push("-t".into());
        args.push(duration.ffmpeg_seconds().into());
    }

    args.extend(mode_args(plan.mode()));
    args.push(plan.output().as_os_str().to_owned());
    args
}

fn mode_args(mode: &StreamMode) -> Vec<OsString> {
    match mode {
        StreamMode::AudioOnly { quality } => {
            vec!["-vn".into(), "-q:a".into(), quality.to_string().into()]
        }
        StreamMode::Copy => vec!["-c".into(), "copy".into()],
        StreamMode::Reencode { preset, crf } => vec![
            "-preset".into(),
            preset.into(),
            "-crf".into(),
            crf.to_string().into(),
        ],
    }
}

/// Render `binary` and `args` as a single shell-style command line.
///
/// Arguments containing whitespace or quotes are single-quoted.
pub fn command_line(binary: &Path, args: &[OsString]) -> String {
    std::iter::once(binary.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();
    if !arg.is_empty()
        && !arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'))
    {
        return arg.into_owned();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

//! Output file naming.
//!
//! Output names record the operation performed:
//! `<stem>[--clip-<start>--<end|"end">][.<ext>]`, with times in `hh-mm-ss-SSS`.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::constants::{CLIP_RANGE_SEPARATOR, CLIP_SUFFIX_PREFIX, OPEN_END_MARKER};
use crate::time::Duration;

/// Time range encoded into a clip's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipStamp {
    /// Clip start.
    pub start: Duration,
    /// Clip end, `None` for open-ended clips.
    pub end: Option<Duration>,
}

impl ClipStamp {
    fn suffix(self) -> String {
        let end = self
            .end
            .map_or_else(|| OPEN_END_MARKER.to_string(), Duration::file_stamp);
        format!(
            "{CLIP_SUFFIX_PREFIX}{}{CLIP_RANGE_SEPARATOR}{end}",
            self.start.file_stamp()
        )
    }
}

/// Derive the output path for `input` inside `dir`.
///
/// The input's extension is stripped from its file name, the clip range is
/// appended when `clip` is set, and `extension` (if any) is added last.
pub fn output_path(
    input: &Path,
    clip: Option<ClipStamp>,
    extension: Option<&OsStr>,
    dir: &Path,
) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());

    if let Some(clip) = clip {
        name.push(clip.suffix());
    }

    if let Some(ext) = extension.filter(|ext| !ext.is_empty()) {
        name.push(".");
        name.push(ext);
    }

    dir.join(name)
}

/// Whether writing to `output` would clobber `input`.
///
/// Compares lexically first, then by canonical path when both exist.
pub fn is_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }

    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

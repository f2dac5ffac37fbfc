//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::config::is_bare_extension;
use crate::time::{Duration, parse_time};

/// Parse a `[[hh:]mm:]ss[.SSS]` argument.
pub fn parse_time_arg(s: &str) -> Result<Duration, String> {
    parse_time(s).map_err(|e| e.to_string())
}

/// Parse an output format, accepting an optional leading dot.
pub fn parse_format(s: &str) -> Result<String, String> {
    let ext = s.strip_prefix('.').unwrap_or(s);

    if !is_bare_extension(ext) {
        return Err(format!(
            "'{s}' is not a valid file extension (expected something like mp4 or mp3)"
        ));
    }

    Ok(ext.to_string())
}

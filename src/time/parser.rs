//! Parsing of `[[hh:]mm:]ss[.SSS]` time expressions.

use std::sync::LazyLock;

use regex::Regex;

use super::Duration;
use crate::error::{Error, Result};

// Hours and minutes are only omittable from the left; the fraction is 1-3 digits.
#[allow(clippy::expect_used)]
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:([0-9]+):)?([0-9]+):)?([0-9]+)(?:\.([0-9]{1,3}))?$").expect("valid time pattern")
});

/// Parse a human time expression into a [`Duration`].
///
/// Accepts `ss`, `mm:ss` or `hh:mm:ss`, each optionally followed by a
/// fraction of one to three digits. Missing components count as zero and a
/// short fraction is right-padded, so `"1:2:3.5"` is 1h 2m 3s 500ms and
/// `"90"` is ninety seconds.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] when the string does not match the
/// grammar or a component overflows.
pub fn parse_time(input: &str) -> Result<Duration> {
    let invalid = || Error::InvalidTimeFormat {
        input: input.to_string(),
    };

    let caps = TIME_PATTERN.captures(input.trim()).ok_or_else(invalid)?;

    let component = |idx: usize| -> Result<u64> {
        caps.get(idx)
            .map_or(Ok(0), |m| m.as_str().parse::<u64>().map_err(|_| invalid()))
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    let millis = match caps.get(4) {
        Some(m) => format!("{:0<3}", m.as_str())
            .parse::<u64>()
            .map_err(|_| invalid())?,
        None => 0,
    };

    Duration::checked_from_parts(hours, minutes, seconds, millis).ok_or_else(invalid)
}

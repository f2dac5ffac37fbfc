//! Millisecond-precision time spans.

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// A non-negative span of time with millisecond precision.
///
/// Components are summed on construction and never range-checked, so
/// `from_parts(0, 0, 90, 0)` and `from_parts(0, 1, 30, 0)` are the same span.
/// Rendering always zero-pads to `hh:mm:ss.SSS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Self = Self { millis: 0 };

    /// Create a span from a total number of milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a span from hour, minute, second and millisecond components.
    ///
    /// Saturates at `u64::MAX` milliseconds.
    #[must_use]
    pub const fn from_parts(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        Self {
            millis: hours
                .saturating_mul(MILLIS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE))
                .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND))
                .saturating_add(millis),
        }
    }

    /// Create a span from components, returning `None` on overflow.
    #[must_use]
    pub fn checked_from_parts(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Option<Self> {
        let total = hours
            .checked_mul(MILLIS_PER_HOUR)?
            .checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?)?
            .checked_add(seconds.checked_mul(MILLIS_PER_SECOND)?)?
            .checked_add(millis)?;
        Some(Self { millis: total })
    }

    /// Total length in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Whether this span is empty.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.millis == 0
    }

    /// Add two spans, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.millis.checked_add(rhs.millis).map(Self::from_millis)
    }

    /// Subtract `rhs`, returning `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.millis.checked_sub(rhs.millis).map(Self::from_millis)
    }

    /// Render as `hh-mm-ss-SSS` for use in file names.
    #[must_use]
    pub fn file_stamp(self) -> String {
        let (h, m, s, ms) = self.clock();
        format!("{h:02}-{m:02}-{s:02}-{ms:03}")
    }

    /// Render as exact decimal seconds (`S.SSS`), the form passed to ffmpeg.
    #[must_use]
    pub fn ffmpeg_seconds(self) -> String {
        format!(
            "{}.{:03}",
            self.millis / MILLIS_PER_SECOND,
            self.millis % MILLIS_PER_SECOND
        )
    }

    fn clock(self) -> (u64, u64, u64, u64) {
        (
            self.millis / MILLIS_PER_HOUR,
            self.millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            self.millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
            self.millis % MILLIS_PER_SECOND,
        )
    }
}

impl Add for Duration {
    type Output = Self;

    /// Saturating addition.
    fn add(self, rhs: Self) -> Self {
        Self::from_millis(self.millis.saturating_add(rhs.millis))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, ms) = self.clock();
        write!(f, "{h:02}:{m:02}:{s:02}.{ms:03}")
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

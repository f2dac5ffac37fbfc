//! Extraction planning.
//!
//! Combines the parsed times, flags and encoding configuration into a
//! concrete [`ExtractionPlan`]: seek offset, clip length, output path and
//! stream handling mode.

mod builder;
mod naming;
mod types;

pub use builder::build_plan;
pub use naming::{ClipStamp, output_path};
pub use types::{ExtractionPlan, PlanRequest, Planned, StreamMode};

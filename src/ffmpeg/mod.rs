//! The external media tool boundary.
//!
//! Planning never touches a process; everything that does goes through
//! [`MediaTool`], so the rest of the crate can be exercised with a stand-in.

mod args;
mod runner;

pub use args::{build_args, command_line};
pub use runner::FfmpegTool;

use crate::error::Result;
use crate::plan::ExtractionPlan;

/// Something that can carry out an extraction plan.
pub trait MediaTool {
    /// Execute `plan`, writing its output file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ExternalToolFailure`] when the tool cannot be
    /// started or reports a failure.
    fn run(&self, plan: &ExtractionPlan) -> Result<()>;

    /// The invocation `run` would perform, as a printable command line.
    fn command_line(&self, plan: &ExtractionPlan) -> String;
}

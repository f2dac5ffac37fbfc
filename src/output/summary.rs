//! Pre-execution summary of an extraction.

use tracing::info;

use super::{ExtractionPayload, ResultType};
use crate::plan::{ExtractionPlan, StreamMode};

/// Log the human-readable summary of `plan` at info level.
pub fn log_summary(plan: &ExtractionPlan) {
    info!("In: {}", plan.input().display());
    info!("Out: {}", plan.output().display());
    info!("Start: {}", plan.start());
    info!(
        "End: {}",
        plan.end().map_or_else(|| "Eof".to_string(), |end| end.to_string())
    );
    info!(
        "Duration: {}",
        plan.duration()
            .map_or_else(|| "Unknown".to_string(), |d| d.to_string())
    );
    info!("Mode: {}", plan.mode());

    if matches!(plan.mode(), StreamMode::AudioOnly { .. }) {
        info!("Extracting audio only");
    }
}

/// Build the JSON payload describing `plan`.
pub fn extraction_payload(plan: &ExtractionPlan, command: String, dry_run: bool) -> ExtractionPayload {
    ExtractionPayload {
        result_type: ResultType::Extraction,
        input: plan.input().to_path_buf(),
        output: plan.output().to_path_buf(),
        start: plan.start(),
        end: plan.end(),
        duration: plan.duration(),
        mode: plan.mode().clone(),
        command,
        dry_run,
    }
}

//! Result reporting.
//!
//! Human mode reports through `tracing`; JSON mode prints one envelope on
//! stdout.

mod json_envelope;
mod summary;

pub use json_envelope::{
    ErrorPayload, EventType, ExtractionPayload, JsonEnvelope, NoOpPayload, ResultType,
    SPEC_VERSION,
};
pub use summary::{extraction_payload, log_summary};

/// Emit a JSON result event to stdout.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    emit(EventType::Result, payload);
}

/// Emit a JSON error event to stdout.
pub fn emit_json_error(error: &crate::Error) {
    emit(
        EventType::Error,
        &ErrorPayload {
            code: error.code().to_string(),
            message: error.to_string(),
        },
    );
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn emit<T: serde::Serialize>(event: EventType, payload: &T) {
    let envelope = JsonEnvelope::new(event, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // Log to stderr so it doesn't corrupt JSON output stream
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}

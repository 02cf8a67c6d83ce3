// ── Core error types ──
//
// The aggregation engine itself never fails: partial telemetry is the normal
// case for a system that exists to describe communication failures. What can
// fail is the boundary around it — decoding backend payloads and handing
// snapshots to an updater that has already shut down.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backend payload could not be decoded into application records.
    #[error("Malformed backend payload: {message}")]
    MalformedPayload { message: String },

    /// The snapshot updater task is no longer running.
    #[error("Snapshot updater has shut down")]
    UpdaterClosed,
}

// ── Conversion from payload-layer errors ─────────────────────────────

impl From<roost_api::Error> for CoreError {
    fn from(err: roost_api::Error) -> Self {
        match err {
            roost_api::Error::Deserialization { message, .. } => {
                CoreError::MalformedPayload { message }
            }
        }
    }
}

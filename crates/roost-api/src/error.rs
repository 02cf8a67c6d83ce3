use thiserror::Error;

/// Top-level error type for the `roost-api` crate.
///
/// The aggregation core downstream is deliberately infallible, so the only
/// failure mode owned here is payload decoding. `roost-core` maps this into
/// its own diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    pub(crate) fn deserialization(err: &serde_json::Error, body: &str) -> Self {
        Self::Deserialization {
            message: err.to_string(),
            body: body.to_owned(),
        }
    }
}

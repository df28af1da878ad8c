//! Transport error taxonomy for fragment and JSON loads.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in the behavior layer is fatal. Callers match on [`FetchError`]
//! only to decide whether a tick is skipped or prior DOM is left intact;
//! application-level errors travel inside the decoded payload instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a request produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// No browser environment (host builds and tests).
    #[error("not available outside the browser")]
    Unavailable,
}

impl FetchError {
    /// True when a status code reached us, i.e. the server is alive.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

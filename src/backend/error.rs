use thiserror::Error;

/// Failure of a single backend call. Every variant is recoverable: the
/// caller logs it and waits for its next cadence tick.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("invalid backend URI: {0}")]
    InvalidUri(String),

    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("backend answered HTTP {0} without a JSON body")]
    Status(u16),

    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

use thiserror::Error;

/// Failure while talking to an upstream microservice.
///
/// The variants separate the cases callers need to tell apart:
///
/// - [`UpstreamError::Status`]: the service answered, but not with a 2xx
/// - [`UpstreamError::Transport`]: the request never got a usable answer
/// - [`UpstreamError::Decode`]: the body was not the JSON we expected
///
/// The identity resolver relies on this split: a rejected token is a
/// `Status`, everything else is a fault.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Returns `true` when the upstream answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::Status { .. })
    }
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

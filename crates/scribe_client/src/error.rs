use thiserror::Error;

/// Failure of a single remote API call.
///
/// During polling every variant is transient: the tick is warn-logged and
/// the next interval retries, with no backoff and no retry cap. Polling
/// itself is the retry mechanism.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("http status {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failure of a job submission. Submission errors stop the flow
/// immediately; the controller stays idle and no polling starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Empty source URL, rejected before any network call.
    #[error("no source URL provided")]
    Validation,
    /// The backend rejected the job-creation request.
    #[error("API Error: {status_text}")]
    Remote { status_text: String },
    #[error("network error: {0}")]
    Transport(String),
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::HttpStatus { status_text, .. } => Self::Remote { status_text },
            ApiError::Transport(message) | ApiError::Malformed(message) => {
                Self::Transport(message)
            }
        }
    }
}

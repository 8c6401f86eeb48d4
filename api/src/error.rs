use thiserror::Error;

/// Failures that keep a waitlist reply from reaching the caller.
///
/// Server-reported refusals are *not* errors here; they arrive as a
/// [`JoinReply`](crate::JoinReply) with `success == false`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("waitlist request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("waitlist response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

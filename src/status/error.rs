use std::result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusApiError {
    #[error("http client construction failed: {0}")]
    HttpClient(reqwest::Error),

    #[error("status request failed: {0}")]
    RequestFailed(reqwest::Error),

    #[error("status response body could not be read: {0}")]
    ResponseDecoding(reqwest::Error),

    #[error("status response is not valid JSON: {e}; raw response: {raw_response}")]
    ResponseJsonDeserializeFailed {
        raw_response: String,
        e: serde_json::Error,
    },
}

impl StatusApiError {
    /// Returns `true` for errors that end polling (a malformed response).
    ///
    /// Transport-class errors are transient; the poller retries them on the
    /// next tick.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ResponseJsonDeserializeFailed { .. })
    }
}

pub(crate) type Result<T> = result::Result<T, StatusApiError>;

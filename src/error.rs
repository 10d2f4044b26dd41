//! Unified SDK error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level SDK error.
///
/// Expected upstream failures (rate limiting, 5xx, malformed payloads) never
/// surface here from the domain sub-clients; they are folded into
/// `success == false` results. What remains is cancellation and misuse.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError {
        status: u16,
        body: String,
        retry_after_ms: Option<u64>,
    },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    /// The connection dropped while a successful response body was being read.
    #[error("Response body interrupted: {0}")]
    Interrupted(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        attempts: u32,
        last_error: Box<HttpError>,
    },
}

impl HttpError {
    /// Transient failures worth another attempt: 429, 5xx and transport errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            HttpError::RateLimited { .. }
            | HttpError::ServerError { .. }
            | HttpError::Timeout
            | HttpError::Interrupted(_) => true,
            #[cfg(feature = "http")]
            HttpError::Reqwest(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable && !re.is_decode()
            }
            _ => false,
        }
    }

    /// Whether the failure was (or ended in) upstream rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            HttpError::RateLimited { .. } => true,
            HttpError::MaxRetriesExceeded { last_error, .. } => last_error.is_rate_limited(),
            _ => false,
        }
    }

    /// Upstream-supplied `Retry-After`, already converted to milliseconds.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            HttpError::RateLimited { retry_after_ms }
            | HttpError::ServerError { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

/// Why a lookup came back with `success == false`.
///
/// Carried on result values instead of an `Err`, so a failed lookup never
/// unwinds the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// HTTP 429 with no retry budget configured.
    RateLimited,
    /// Non-success HTTP status that is not otherwise classified.
    Upstream { status: u16 },
    /// 401/403; the history endpoint answers this without a session.
    Unauthorized,
    /// Transport failure: connect, timeout, reset.
    Network,
    /// Body could not be decoded, was `null`, or lacked expected fields.
    Malformed,
    /// HTTP 200 with `"success": false`.
    Unsuccessful,
    /// Every attempt failed with a transient error.
    RetriesExhausted { attempts: u32, rate_limited: bool },
}

impl FailureReason {
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            FailureReason::RateLimited
                | FailureReason::RetriesExhausted {
                    rate_limited: true,
                    ..
                }
        )
    }
}

/// Cancellation is not a failure; it stays an `Err`.
impl TryFrom<HttpError> for FailureReason {
    type Error = SdkError;

    fn try_from(err: HttpError) -> Result<Self, Self::Error> {
        Ok(match err {
            HttpError::Cancelled => return Err(SdkError::Cancelled),
            HttpError::RateLimited { .. } => FailureReason::RateLimited,
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                FailureReason::Upstream { status }
            }
            HttpError::NotFound(_) => FailureReason::Upstream { status: 404 },
            HttpError::Unauthorized | HttpError::Forbidden => FailureReason::Unauthorized,
            #[cfg(feature = "http")]
            HttpError::Reqwest(_) => FailureReason::Network,
            HttpError::Timeout | HttpError::Interrupted(_) => FailureReason::Network,
            HttpError::Malformed(_) => FailureReason::Malformed,
            HttpError::MaxRetriesExceeded {
                attempts,
                ref last_error,
            } => FailureReason::RetriesExhausted {
                attempts,
                rate_limited: last_error.is_rate_limited(),
            },
        })
    }
}

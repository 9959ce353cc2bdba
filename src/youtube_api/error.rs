//! Error taxonomy for YouTube Data API calls.
//!
//! Callers branch on the variant, never on message text. The aggregation
//! layer relies on this to decide which failures abort a run (credential
//! rejection during enumeration) and which degrade to an empty
//! contribution (anything during a per-channel or per-batch call).

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The `reason` codes with which the API signals call-budget exhaustion
/// rather than a credential problem, all carried on a 403.
const QUOTA_REASONS: &[&str] = &[
    "quotaExceeded",
    "dailyLimitExceeded",
    "rateLimitExceeded",
    "userRateLimitExceeded",
];

/// A failed YouTube Data API call, classified by what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The credential was rejected: a 401, or a 403 whose error body names
    /// a non-quota reason (missing scope, suspended account, and so on).
    #[error("YouTube rejected the credential ({status}): {message}")]
    Auth {
        /// The HTTP status the API responded with.
        status: StatusCode,
        /// The human-readable message from the API's error body.
        message: String,
    },
    /// The API reports that the project's or user's call quota is spent.
    #[error("YouTube API quota exhausted: {message}")]
    Quota {
        /// The human-readable message from the API's error body.
        message: String,
    },
    /// A connection-level failure or a 5xx response. The call may have
    /// never reached the API; retrying later is reasonable.
    #[error("transient YouTube API failure: {message}")]
    Transient {
        /// A description of the underlying network or server failure.
        message: String,
    },
    /// Any other non-success response.
    #[error("YouTube API request failed ({status}): {message}")]
    Upstream {
        /// The HTTP status the API responded with.
        status: StatusCode,
        /// The human-readable message from the API's error body.
        message: String,
    },
    /// The response body did not match the documented schema.
    #[error("malformed YouTube API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Error envelope that Google APIs attach to non-2xx responses.
///
/// See: <https://developers.google.com/youtube/v3/docs/errors>
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    reason: Option<String>,
}

impl ApiError {
    /// Classifies a non-success response from its status code and body.
    ///
    /// The body is parsed as the structured error envelope; the envelope's
    /// `reason` codes decide between quota exhaustion and a credential
    /// problem on 403, where the status alone is ambiguous. A body that is
    /// not the documented envelope still classifies (by status), with the
    /// raw text carried as the message.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let envelope: Option<ErrorEnvelope> = serde_json::from_str(body).ok();
        let message = envelope
            .as_ref()
            .and_then(|envelope| envelope.error.message.clone())
            .unwrap_or_else(|| body.trim().to_string());

        if status.is_server_error() {
            return ApiError::Transient { message };
        }
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Auth { status, message };
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return ApiError::Quota { message };
        }
        if status == StatusCode::FORBIDDEN {
            let quota_reason = envelope.as_ref().is_some_and(|envelope| {
                envelope.error.errors.iter().any(|item| {
                    item.reason
                        .as_deref()
                        .is_some_and(|reason| QUOTA_REASONS.contains(&reason))
                })
            });
            return if quota_reason {
                ApiError::Quota { message }
            } else {
                ApiError::Auth { status, message }
            };
        }
        ApiError::Upstream { status, message }
    }

    /// Wraps a request that failed before a status code existed.
    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        ApiError::Transient {
            message: error.to_string(),
        }
    }
}

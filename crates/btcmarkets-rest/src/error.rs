//! Error types for REST API operations

use btcmarkets_auth::AuthError;
use btcmarkets_types::{ApiError, RecoveryStrategy};
use serde::Deserialize;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport failure: connection, TLS, or reading the body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials could not be prepared
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// The exchange answered with a non-2xx status
    #[error("API error: {0}")]
    Api(ApiError),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request body could not be serialized
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// JSON error body sent with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: Option<String>,
}

impl RestError {
    /// Build an API error from a non-2xx response body
    ///
    /// A body that is not JSON or lacks `code` is a malformed response and
    /// becomes [`RestError::Parse`].
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Self::Api(ApiError::new(status, parsed.code, parsed.message)),
            Err(e) => Self::Parse(format!(
                "HTTP {} with unreadable error body ({}): {}",
                status,
                e,
                String::from_utf8_lossy(body)
            )),
        }
    }

    /// The exchange's `code` string, for API errors
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api(error) => Some(error.code.as_str()),
            _ => None,
        }
    }

    /// HTTP status, for API errors and transport errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            Self::Api(error) => error.recovery_strategy(),
            Self::Http(error) if error.is_timeout() || error.is_connect() => RecoveryStrategy::Retry {
                max_attempts: 3,
                delay_ms: 1000,
            },
            Self::Http(_) => RecoveryStrategy::Manual,
            Self::Auth(_) => RecoveryStrategy::Fatal,
            Self::Parse(_) | Self::Serialize(_) | Self::InvalidParameter(_) => {
                RecoveryStrategy::Fatal
            }
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api(error) if error.is_rate_limit())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

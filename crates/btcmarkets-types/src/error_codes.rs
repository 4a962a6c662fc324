//! BTC Markets API error code mapping with recovery strategies
//!
//! Non-2xx responses carry a JSON body of the form
//! `{"code": "InsufficientFund", "message": "..."}`. The `code` string is the
//! stable part; this module classifies it so callers can decide how to react.
//! The client itself never retries.

use std::time::Duration;

/// Recovery strategy for handling API errors
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecoveryStrategy {
    /// Exponential backoff before retry
    Backoff {
        initial_ms: u64,
        max_ms: u64,
        multiplier: u32,
    },
    /// Fixed delay retry
    Retry { delay_ms: u64, max_attempts: u32 },
    /// Re-sign with fresh credentials or a fresh timestamp
    Reauthenticate,
    /// Cannot recover programmatically - fatal error
    Fatal,
    /// Requires user intervention (e.g., add funds)
    UserAction { message: &'static str },
    /// Drop the request, it will never succeed as sent
    Skip,
    /// Manual investigation needed
    #[default]
    Manual,
}

impl RecoveryStrategy {
    /// Default exponential backoff for rate limits
    pub fn rate_limit_backoff() -> Self {
        Self::Backoff {
            initial_ms: 1000,
            max_ms: 60000,
            multiplier: 2,
        }
    }

    /// Default retry for transient service errors
    pub fn service_retry() -> Self {
        Self::Retry {
            delay_ms: 5000,
            max_attempts: 3,
        }
    }

    /// Get the initial delay duration
    pub fn initial_delay(&self) -> Option<Duration> {
        match self {
            Self::Backoff { initial_ms, .. } => Some(Duration::from_millis(*initial_ms)),
            Self::Retry { delay_ms, .. } => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }
    }

    /// Check if this strategy allows retry
    pub fn allows_retry(&self) -> bool {
        matches!(
            self,
            Self::Backoff { .. } | Self::Retry { .. } | Self::Reauthenticate
        )
    }
}

/// Known BTC Markets error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    // === Authentication ===
    /// Timestamp header missing or too far from server time
    InvalidAuthTimestamp,
    /// Signature did not verify
    InvalidAuthSignature,
    /// Unknown or malformed API key
    InvalidApiKey,
    /// Key lacks the permission the endpoint needs
    InsufficientPermission,

    // === Throttling ===
    RateLimitExceeded,

    // === Validation ===
    BadRequest,
    InvalidMarket,
    InvalidAsset,
    InvalidPrice,
    InvalidAmount,
    InvalidOrderType,
    InvalidSide,
    InvalidTimeInForce,
    InvalidTriggerPrice,
    InvalidTimeWindow,
    InvalidPagination,

    // === Trading ===
    InsufficientFunds,
    OrderNotFound,
    OrderAlreadyClosed,
    MarketSuspended,

    // === Funding ===
    WithdrawalLimitExceeded,

    // === Service ===
    InternalError,
    ServiceUnavailable,
    ServiceTimeout,
}

impl ApiErrorCode {
    /// Parse an exchange `code` string
    ///
    /// Matching ignores case and separators, so `InsufficientFund`,
    /// `INSUFFICIENT_FUND` and `insufficient-fund` are the same code.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Some(match normalized.as_str() {
            "invalidauthtimestamp" => Self::InvalidAuthTimestamp,
            "invalidauthsignature" | "invalidsignature" => Self::InvalidAuthSignature,
            "invalidapikey" | "invalidapicredentials" | "unauthorized" | "unauthorizedaccess" => {
                Self::InvalidApiKey
            }
            "insufficientapipermission" | "permissiondenied" | "forbidden" => {
                Self::InsufficientPermission
            }
            "ratelimitexceeded" | "toomanyrequests" => Self::RateLimitExceeded,
            "badrequest" | "invalidrequest" | "validationerror" => Self::BadRequest,
            "invalidmarket" | "marketnotfound" | "invalidmarketid" => Self::InvalidMarket,
            "invalidasset" | "invalidassetname" | "assetnotfound" => Self::InvalidAsset,
            "invalidprice" => Self::InvalidPrice,
            "invalidamount" => Self::InvalidAmount,
            "invalidordertype" => Self::InvalidOrderType,
            "invalidside" => Self::InvalidSide,
            "invalidtimeinforce" => Self::InvalidTimeInForce,
            "invalidtriggerprice" => Self::InvalidTriggerPrice,
            "invalidtimewindow" => Self::InvalidTimeWindow,
            "invalidpaginationparameter" | "invalidlimit" | "invalidpagination" => {
                Self::InvalidPagination
            }
            "insufficientfund" | "insufficientfunds" | "insufficientbalance" => {
                Self::InsufficientFunds
            }
            "ordernotfound" | "invalidorderid" => Self::OrderNotFound,
            "orderalreadycancelled" | "orderalreadyfilled" | "orderclosed" => {
                Self::OrderAlreadyClosed
            }
            "marketsuspended" | "marketclosed" | "tradingdisabled" => Self::MarketSuspended,
            "withdrawallimitexceeded" | "dailylimitexceeded" => Self::WithdrawalLimitExceeded,
            "internalservererror" | "internalerror" | "unexpectederror" => Self::InternalError,
            "serviceunavailable" | "maintenance" | "systemmaintenance" => {
                Self::ServiceUnavailable
            }
            "timeout" | "gatewaytimeout" | "requesttimeout" => Self::ServiceTimeout,
            _ => return None,
        })
    }

    /// Classify by HTTP status when the code itself is unrecognised
    pub fn from_status(status: u16) -> Option<Self> {
        Some(match status {
            400 => Self::BadRequest,
            401 => Self::InvalidApiKey,
            403 => Self::InsufficientPermission,
            404 => return None,
            429 => Self::RateLimitExceeded,
            500 => Self::InternalError,
            502 | 503 => Self::ServiceUnavailable,
            504 => Self::ServiceTimeout,
            _ => return None,
        })
    }

    /// Get the recovery strategy for this error code
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            Self::RateLimitExceeded => RecoveryStrategy::rate_limit_backoff(),

            // A stale timestamp is fixed by re-signing; a bad key or signature is not
            Self::InvalidAuthTimestamp => RecoveryStrategy::Reauthenticate,
            Self::InvalidAuthSignature | Self::InvalidApiKey => RecoveryStrategy::Fatal,
            Self::InsufficientPermission => RecoveryStrategy::Fatal,

            Self::ServiceUnavailable | Self::ServiceTimeout => RecoveryStrategy::service_retry(),
            Self::InternalError => RecoveryStrategy::Manual,

            Self::InsufficientFunds => RecoveryStrategy::UserAction {
                message: "Insufficient funds - deposit more or reduce order size",
            },
            Self::MarketSuspended => RecoveryStrategy::UserAction {
                message: "Market is not accepting orders - wait for trading to resume",
            },
            Self::WithdrawalLimitExceeded => RecoveryStrategy::UserAction {
                message: "Withdrawal limit reached - wait for the limit to reset",
            },

            Self::BadRequest
            | Self::InvalidMarket
            | Self::InvalidAsset
            | Self::InvalidPrice
            | Self::InvalidAmount
            | Self::InvalidOrderType
            | Self::InvalidSide
            | Self::InvalidTimeInForce
            | Self::InvalidTriggerPrice
            | Self::InvalidTimeWindow
            | Self::InvalidPagination => RecoveryStrategy::Skip,

            Self::OrderNotFound | Self::OrderAlreadyClosed => RecoveryStrategy::Skip,
        }
    }

    /// Get a human-readable description of this error
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidAuthTimestamp => "Authentication timestamp rejected",
            Self::InvalidAuthSignature => "Invalid request signature",
            Self::InvalidApiKey => "Invalid API key",
            Self::InsufficientPermission => "API key lacks permission for this operation",
            Self::RateLimitExceeded => "API rate limit exceeded",
            Self::BadRequest => "Malformed request",
            Self::InvalidMarket => "Market not found",
            Self::InvalidAsset => "Asset not found",
            Self::InvalidPrice => "Invalid price",
            Self::InvalidAmount => "Invalid amount",
            Self::InvalidOrderType => "Invalid order type",
            Self::InvalidSide => "Invalid order side",
            Self::InvalidTimeInForce => "Invalid time in force",
            Self::InvalidTriggerPrice => "Invalid trigger price",
            Self::InvalidTimeWindow => "Invalid candle time window",
            Self::InvalidPagination => "Invalid pagination parameters",
            Self::InsufficientFunds => "Insufficient funds",
            Self::OrderNotFound => "Order not found",
            Self::OrderAlreadyClosed => "Order is already closed",
            Self::MarketSuspended => "Market is suspended",
            Self::WithdrawalLimitExceeded => "Withdrawal limit exceeded",
            Self::InternalError => "Internal server error",
            Self::ServiceUnavailable => "Service temporarily unavailable",
            Self::ServiceTimeout => "Service request timed out",
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAuthTimestamp
                | Self::InvalidAuthSignature
                | Self::InvalidApiKey
                | Self::InsufficientPermission
        )
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }

    /// Check if this is a trading-related error
    pub fn is_trading_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds
                | Self::OrderNotFound
                | Self::OrderAlreadyClosed
                | Self::MarketSuspended
                | Self::InvalidPrice
                | Self::InvalidAmount
                | Self::InvalidOrderType
                | Self::InvalidSide
                | Self::InvalidTimeInForce
                | Self::InvalidTriggerPrice
        )
    }
}

/// Error body returned by the exchange with a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// The `code` field, verbatim
    pub code: String,
    /// The `message` field, if the exchange sent one
    pub message: Option<String>,
    /// Classified code, from `code` first and the status second
    pub kind: Option<ApiErrorCode>,
}

impl ApiError {
    pub fn new(status: u16, code: impl Into<String>, message: Option<String>) -> Self {
        let code = code.into();
        let kind = ApiErrorCode::from_code(&code).or_else(|| ApiErrorCode::from_status(status));

        Self {
            status,
            code,
            message,
            kind,
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        self.kind
            .map(|k| k.recovery_strategy())
            .unwrap_or(RecoveryStrategy::Manual)
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        self.kind.map(|k| k.is_rate_limit()).unwrap_or(false)
    }

    /// Check if this is a fatal error that cannot be recovered
    pub fn is_fatal(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Fatal)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} (HTTP {}): {}", self.code, self.status, message),
            None => write!(f, "{} (HTTP {})", self.code, self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_limit_error() {
        let error = ApiError::new(429, "RATE_LIMIT_EXCEEDED", None);
        assert_eq!(error.kind, Some(ApiErrorCode::RateLimitExceeded));
        assert!(error.is_rate_limit());
        assert!(error.is_retryable());
    }

    #[test]
    fn test_code_normalization() {
        assert_eq!(
            ApiErrorCode::from_code("InsufficientFund"),
            Some(ApiErrorCode::InsufficientFunds)
        );
        assert_eq!(
            ApiErrorCode::from_code("INSUFFICIENT_FUND"),
            Some(ApiErrorCode::InsufficientFunds)
        );
        assert_eq!(
            ApiErrorCode::from_code("InvalidAPIKey"),
            Some(ApiErrorCode::InvalidApiKey)
        );
        assert_eq!(ApiErrorCode::from_code("SomethingNew"), None);
    }

    #[test]
    fn test_status_fallback() {
        let error = ApiError::new(503, "SomethingNew", Some("down".to_string()));
        assert_eq!(error.kind, Some(ApiErrorCode::ServiceUnavailable));
        assert!(error.is_retryable());

        let error = ApiError::new(404, "SomethingNew", None);
        assert_eq!(error.kind, None);
        assert_eq!(error.recovery_strategy(), RecoveryStrategy::Manual);
    }

    #[test]
    fn test_code_wins_over_status() {
        let error = ApiError::new(400, "InsufficientFund", None);
        assert_eq!(error.kind, Some(ApiErrorCode::InsufficientFunds));
        assert!(matches!(
            error.recovery_strategy(),
            RecoveryStrategy::UserAction { .. }
        ));
    }

    #[test]
    fn test_recovery_strategies() {
        assert!(matches!(
            ApiErrorCode::RateLimitExceeded.recovery_strategy(),
            RecoveryStrategy::Backoff { .. }
        ));
        assert!(matches!(
            ApiErrorCode::InvalidAuthTimestamp.recovery_strategy(),
            RecoveryStrategy::Reauthenticate
        ));
        assert!(matches!(
            ApiErrorCode::ServiceUnavailable.recovery_strategy(),
            RecoveryStrategy::Retry { .. }
        ));
        assert!(ApiErrorCode::InvalidAuthSignature.recovery_strategy() == RecoveryStrategy::Fatal);
    }

    #[test]
    fn test_error_categories() {
        assert!(ApiErrorCode::InvalidApiKey.is_auth_error());
        assert!(ApiErrorCode::RateLimitExceeded.is_rate_limit());
        assert!(ApiErrorCode::InsufficientFunds.is_trading_error());
        assert!(!ApiErrorCode::InternalError.is_trading_error());
    }

    #[test]
    fn test_display() {
        let error = ApiError::new(400, "InvalidPrice", Some("price too precise".to_string()));
        assert_eq!(error.to_string(), "InvalidPrice (HTTP 400): price too precise");
        let error = ApiError::new(429, "RATE_LIMIT_EXCEEDED", None);
        assert_eq!(error.to_string(), "RATE_LIMIT_EXCEEDED (HTTP 429)");
    }

    #[test]
    fn test_initial_delay() {
        let strategy = RecoveryStrategy::rate_limit_backoff();
        assert_eq!(strategy.initial_delay(), Some(Duration::from_secs(1)));
        assert_eq!(RecoveryStrategy::Skip.initial_delay(), None);
    }
}

//! Error types for authentication operations

/// Errors that can occur while preparing credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// API secret is not valid base64
    #[error("Invalid base64 API secret: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("BTCMARKETS_API_KEY".to_string());
        assert!(err.to_string().contains("BTCMARKETS_API_KEY"));
    }
}

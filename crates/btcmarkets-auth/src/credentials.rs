//! Authentication credentials for the BTC Markets API
//!
//! Implements the HMAC-SHA512 scheme every v3 request is signed with:
//!
//! ```text
//! signature = base64(HMAC-SHA512(secret, method + path + timestamp + body))
//! ```
//!
//! `body` is the exact JSON string sent on the wire, or empty when the
//! request has no body. The query string is not part of the message.
//!
//! # Security
//!
//! The decoded secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::error::{AuthError, AuthResult};
use crate::headers::SignedHeaders;

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BTCMARKETS_API_KEY";
/// Environment variable holding the base64 API secret
pub const API_SECRET_ENV: &str = "BTCMARKETS_API_SECRET";

/// API credentials for authenticated requests
///
/// The secret is decoded once at construction and zeroized when the
/// Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from API key and secret
    ///
    /// # Arguments
    /// * `api_key` - Your BTC Markets API key
    /// * `secret` - Your API secret (base64 encoded string)
    ///
    /// # Errors
    /// [`AuthError::Encoding`] if the secret is not valid base64.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let decoded = BASE64.decode(secret.as_ref())?;

        Ok(Self {
            api_key: api_key.into(),
            secret: SecretBox::new(Box::new(decoded)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BTCMARKETS_API_KEY` and `BTCMARKETS_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Current time in milliseconds since the Unix epoch
    pub fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }

    /// Sign a request
    ///
    /// # Arguments
    /// * `method` - HTTP verb, upper case (e.g., "GET")
    /// * `path` - Request path without query string (e.g., "/v3/orders")
    /// * `timestamp` - Milliseconds since epoch, as sent in `BM-AUTH-TIMESTAMP`
    /// * `body` - Serialized JSON body, `None` for bodyless requests
    ///
    /// # Returns
    /// Base64-encoded signature
    pub fn sign(&self, method: &str, path: &str, timestamp: &str, body: Option<&str>) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(timestamp.as_bytes());
        if let Some(body) = body {
            mac.update(body.as_bytes());
        }

        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map(|(i, _)| &self.api_key[..i])
            .unwrap_or(&self.api_key);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Request signer for building authenticated requests
///
/// The timestamp is read once when the signer is created and used both in
/// the signed message and in the emitted header.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    method: String,
    path: String,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials, method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_timestamp(credentials, method, path, Credentials::current_timestamp())
    }

    /// Create a request signer with a fixed timestamp
    pub fn with_timestamp(
        credentials: &'a Credentials,
        method: impl Into<String>,
        path: impl Into<String>,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            credentials,
            method: method.into(),
            path: path.into(),
            timestamp: timestamp_ms.to_string(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request with the given body and build its headers
    pub fn sign(&self, body: Option<&str>) -> SignedHeaders {
        trace!(method = %self.method, path = %self.path, timestamp = %self.timestamp, "signing request");

        let signature = self
            .credentials
            .sign(&self.method, &self.path, &self.timestamp, body);

        SignedHeaders::new(self.api_key(), self.timestamp.clone(), signature)
    }
}

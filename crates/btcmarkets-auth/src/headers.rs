//! Authentication header set sent with every request

/// Header carrying the API key
pub const HEADER_API_KEY: &str = "BM-AUTH-APIKEY";
/// Header carrying the millisecond timestamp that was signed
pub const HEADER_TIMESTAMP: &str = "BM-AUTH-TIMESTAMP";
/// Header carrying the base64 signature
pub const HEADER_SIGNATURE: &str = "BM-AUTH-SIGNATURE";

/// Headers produced by [`RequestSigner::sign`](crate::RequestSigner::sign)
///
/// Built per request and never reused: the timestamp must be current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    api_key: String,
    timestamp: String,
    signature: String,
}

impl SignedHeaders {
    pub(crate) fn new(api_key: &str, timestamp: String, signature: String) -> Self {
        Self {
            api_key: api_key.to_string(),
            timestamp,
            signature,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// All six request headers, in the order the exchange documents them
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Accept", "application/json"),
            ("Accept-Charset", "UTF-8"),
            ("Content-Type", "application/json"),
            (HEADER_API_KEY, self.api_key.as_str()),
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_SIGNATURE, self.signature.as_str()),
        ]
        .into_iter()
    }
}

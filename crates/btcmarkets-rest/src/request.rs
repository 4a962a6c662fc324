//! Request descriptors and query-string building
//!
//! An [`ApiRequest`] is everything the dispatcher needs to sign and send one
//! call: verb, path, optional query string and optional JSON body. The body
//! is serialized once, here, so the bytes that get signed are the bytes
//! that go on the wire.

use crate::error::{RestError, RestResult};
use serde::Serialize;

/// HTTP verbs used by the v3 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Verb as it appears in the signed message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// GET and DELETE never carry a body
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Ordered `key=value` pairs joined with `&`
///
/// Values are inserted verbatim; nothing is percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: &'static str, value: impl std::fmt::Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when it is present
    pub fn push_opt<V: std::fmt::Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append the same key once per value, e.g. `marketId=A&marketId=B`
    pub fn push_all<V: std::fmt::Display>(
        &mut self,
        key: &'static str,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        for value in values {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the query, `None` when no parameter was supplied
    pub fn build(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }

        let rendered: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();

        Some(rendered.join("&"))
    }
}

/// Pagination shared by the list endpoints
///
/// `before` and `after` are exclusive cursors (ids or timestamps depending
/// on the endpoint); `limit` caps the page size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

impl Paging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Append `before`, `after`, `limit` in that order
    pub fn apply(&self, query: &mut QueryString) {
        query
            .push_opt("before", self.before.as_deref())
            .push_opt("after", self.after.as_deref())
            .push_opt("limit", self.limit);
    }
}

/// A single API call, ready to be signed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a query string; an empty one is dropped
    pub fn with_query(mut self, query: &QueryString) -> Self {
        self.query = query.build();
        self
    }

    /// Serialize `body` to JSON and attach it
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> RestResult<Self> {
        let json = serde_json::to_string(body).map_err(RestError::Serialize)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Path plus `?query` when one is present
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// Full URL against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }

    /// Body that is signed and sent, `None` for GET and DELETE
    pub fn wire_body(&self) -> Option<&str> {
        if self.method.carries_body() {
            self.body.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_omits_missing_values() {
        let mut query = QueryString::new();
        query
            .push_opt("before", None::<&str>)
            .push_opt("after", Some("78234"))
            .push_opt("limit", Some(10));

        assert_eq!(query.build().as_deref(), Some("after=78234&limit=10"));
    }

    #[test]
    fn test_empty_query_builds_none() {
        let query = QueryString::new();
        assert!(query.is_empty());
        assert_eq!(query.build(), None);

        let request = ApiRequest::get("/v3/orders").with_query(&query);
        assert_eq!(request.url("https://api.btcmarkets.net"), "https://api.btcmarkets.net/v3/orders");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut query = QueryString::new();
        query.push("from", "2019-09-01T00:00:00.000Z");
        assert_eq!(query.build().as_deref(), Some("from=2019-09-01T00:00:00.000Z"));
    }

    #[test]
    fn test_repeated_keys() {
        let mut query = QueryString::new();
        query.push_all("marketId", ["BTC-AUD", "ETH-AUD"]);
        assert_eq!(query.build().as_deref(), Some("marketId=BTC-AUD&marketId=ETH-AUD"));
    }

    #[test]
    fn test_paging_order() {
        let mut query = QueryString::new();
        Paging::new().limit(5).before("100").apply(&mut query);
        assert_eq!(query.build().as_deref(), Some("before=100&limit=5"));
    }

    #[test]
    fn test_url_construction() {
        let mut query = QueryString::new();
        query.push("level", 2);
        let request = ApiRequest::get("/v3/markets/BTC-AUD/orderbook").with_query(&query);

        assert_eq!(
            request.url("https://api.btcmarkets.net/"),
            "https://api.btcmarkets.net/v3/markets/BTC-AUD/orderbook?level=2"
        );
    }

    #[test]
    fn test_wire_body_only_for_post_and_put() {
        let body = serde_json::json!({"price": "1"});
        let put = ApiRequest::put("/v3/orders/1").with_json(&body).unwrap();
        assert_eq!(put.wire_body(), Some(r#"{"price":"1"}"#));

        let delete = ApiRequest::delete("/v3/orders/1").with_json(&body).unwrap();
        assert_eq!(delete.wire_body(), None);
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}

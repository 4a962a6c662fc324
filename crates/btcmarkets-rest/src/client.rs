//! Main REST client implementation
//!
//! Every endpoint funnels through [`BtcMarketsClient::execute`], which signs
//! the request, sends it once, and normalizes the response.

use crate::endpoints::{
    AccountEndpoints, BatchOrderEndpoints, FundingEndpoints, MarketEndpoints, OrderEndpoints,
    ReportEndpoints, TradeEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::request::ApiRequest;
use crate::types::{Balance, CancelledOrder, NewOrder, Order, ServerTime};
use btcmarkets_auth::{Credentials, RequestSigner};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.btcmarkets.net";

/// BTC Markets REST API client
///
/// Holds the credentials, the base URL and a reusable HTTP client. It keeps
/// no other state, so clones and shared references can be used from any task.
///
/// # Example
///
/// ```no_run
/// use btcmarkets_rest::{BtcMarketsClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = BtcMarketsClient::new(creds)?;
///
///     let ticker = client.markets().get_market_ticker("BTC-AUD").await?;
///     println!("BTC-AUD last: {}", ticker.last_price);
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BtcMarketsClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
}

impl BtcMarketsClient {
    /// Create a client against the production API
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from `BTCMARKETS_API_KEY` / `BTCMARKETS_API_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let mut builder = Client::builder().user_agent(
            config
                .user_agent
                .as_deref()
                .unwrap_or(concat!("btcmarkets-rest/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        info!(base_url = %config.base_url, "Created BTC Markets REST client");

        Ok(Self {
            http_client,
            credentials,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials used to sign requests
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign and send a request, decoding a 2xx body into `T`
    ///
    /// A non-2xx status becomes [`RestError::Api`] carrying the exchange's
    /// `code`. Transport failures surface as [`RestError::Http`]. The request
    /// is attempted exactly once.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> RestResult<T> {
        let body = request.wire_body();
        let signer = RequestSigner::new(&self.credentials, request.method.as_str(), &request.path);
        let headers = signer.sign(body);
        let url = request.url(&self.base_url);

        debug!(
            method = %request.method,
            path = %request.path_and_query(),
            has_body = body.is_some(),
            "Sending signed request"
        );

        let mut builder = self.http_client.request(request.method.into(), &url);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| {
                RestError::Parse(format!(
                    "{} {}: {}",
                    request.method,
                    request.path,
                    e
                ))
            })
        } else {
            let error = RestError::from_error_body(status.as_u16(), &bytes);
            warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                code = error.api_code().unwrap_or("<none>"),
                "Request rejected"
            );
            Err(error)
        }
    }

    // ========================================================================
    // Endpoint Groups
    // ========================================================================

    /// Market data endpoints
    pub fn markets(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Order placement and management endpoints
    pub fn orders(&self) -> OrderEndpoints<'_> {
        OrderEndpoints::new(self)
    }

    /// Batch order endpoints
    pub fn batch_orders(&self) -> BatchOrderEndpoints<'_> {
        BatchOrderEndpoints::new(self)
    }

    /// Own trade history endpoints
    pub fn trades(&self) -> TradeEndpoints<'_> {
        TradeEndpoints::new(self)
    }

    /// Deposit, withdrawal and asset endpoints
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(self)
    }

    /// Account endpoints under `/v3/accounts/me`
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Report endpoints
    pub fn reports(&self) -> ReportEndpoints<'_> {
        ReportEndpoints::new(self)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Get server time
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        self.markets().get_server_time().await
    }

    /// Place a new order
    pub async fn place_new_order(&self, order: &NewOrder) -> RestResult<Order> {
        self.orders().place_new_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<CancelledOrder> {
        self.orders().cancel_order(order_id).await
    }

    /// Get account balances
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        self.account().get_balances().await
    }
}

impl std::fmt::Debug for BtcMarketsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BtcMarketsClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without trailing path
    pub base_url: String,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host (e.g., a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("test_api_key", "dGVzdF9wcml2YXRlX2tleQ==").unwrap()
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_client_debug_redacts_secret() {
        let client = BtcMarketsClient::new(creds()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("api.btcmarkets.net"));
        assert!(debug.contains("[REDACTED]"));
    }
}

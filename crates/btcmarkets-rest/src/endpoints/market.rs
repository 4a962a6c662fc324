//! Market data endpoints
//!
//! Public on the exchange side, but signed like every other call.

use crate::client::BtcMarketsClient;
use crate::error::{RestError, RestResult};
use crate::request::{ApiRequest, Paging, QueryString};
use crate::types::{Candle, Market, MarketTrade, Orderbook, ServerTime, Ticker};
use btcmarkets_types::BookLevel;
use tracing::{debug, instrument};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        self.client.execute(ApiRequest::get("/v3/time")).await
    }

    /// List active markets
    #[instrument(skip(self))]
    pub async fn list_active_markets(&self) -> RestResult<Vec<Market>> {
        self.client.execute(ApiRequest::get("/v3/markets")).await
    }

    /// Get ticker for a market
    ///
    /// # Arguments
    /// * `market_id` - Market (e.g., "BTC-AUD")
    #[instrument(skip(self))]
    pub async fn get_market_ticker(&self, market_id: &str) -> RestResult<Ticker> {
        let path = format!("/v3/markets/{}/ticker", market_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Get recent public trades
    ///
    /// # Arguments
    /// * `market_id` - Market (e.g., "BTC-AUD")
    /// * `paging` - `before`, `after`, `limit`
    #[instrument(skip(self))]
    pub async fn get_market_trades(
        &self,
        market_id: &str,
        paging: &Paging,
    ) -> RestResult<Vec<MarketTrade>> {
        let mut query = QueryString::new();
        paging.apply(&mut query);

        let path = format!("/v3/markets/{}/trades", market_id);
        self.client
            .execute(ApiRequest::get(path).with_query(&query))
            .await
    }

    /// Get orderbook
    ///
    /// # Arguments
    /// * `market_id` - Market (e.g., "BTC-AUD")
    /// * `level` - Aggregation level, exchange default (1) when `None`
    #[instrument(skip(self))]
    pub async fn get_market_orderbook(
        &self,
        market_id: &str,
        level: Option<BookLevel>,
    ) -> RestResult<Orderbook> {
        let mut query = QueryString::new();
        query.push_opt("level", level);

        let path = format!("/v3/markets/{}/orderbook", market_id);
        self.client
            .execute(ApiRequest::get(path).with_query(&query))
            .await
    }

    /// Get candles
    ///
    /// # Arguments
    /// * `market_id` - Market (e.g., "BTC-AUD")
    /// * `query` - Time window, time range and paging
    #[instrument(skip(self))]
    pub async fn get_market_candles(
        &self,
        market_id: &str,
        query: &CandleQuery,
    ) -> RestResult<Vec<Candle>> {
        let path = format!("/v3/markets/{}/candles", market_id);
        self.client
            .execute(ApiRequest::get(path).with_query(&query.to_query()))
            .await
    }

    /// Get tickers for several markets at once
    #[instrument(skip(self), fields(count = market_ids.len()))]
    pub async fn get_multiple_tickers(&self, market_ids: &[&str]) -> RestResult<Vec<Ticker>> {
        let query = market_query(market_ids)?;
        debug!("Fetching tickers for {} markets", market_ids.len());
        self.client
            .execute(ApiRequest::get("/v3/markets/tickers").with_query(&query))
            .await
    }

    /// Get orderbooks for several markets at once
    #[instrument(skip(self), fields(count = market_ids.len()))]
    pub async fn get_multiple_orderbooks(&self, market_ids: &[&str]) -> RestResult<Vec<Orderbook>> {
        let query = market_query(market_ids)?;
        debug!("Fetching orderbooks for {} markets", market_ids.len());
        self.client
            .execute(ApiRequest::get("/v3/markets/orderbooks").with_query(&query))
            .await
    }
}

fn market_query(market_ids: &[&str]) -> RestResult<QueryString> {
    if market_ids.is_empty() {
        return Err(RestError::InvalidParameter("Empty market list".to_string()));
    }

    let mut query = QueryString::new();
    query.push_all("marketId", market_ids);
    Ok(query)
}

/// Optional parameters of the candles endpoint
///
/// Sent as `timeWindow, from, to, before, after, limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandleQuery {
    pub time_window: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub paging: Paging,
}

impl CandleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candle width, e.g. `TimeWindow::H1` or `"1h"`
    pub fn time_window(mut self, time_window: impl Into<String>) -> Self {
        self.time_window = Some(time_window.into());
        self
    }

    /// Range start, ISO-8601
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Range end, ISO-8601
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_opt("timeWindow", self.time_window.as_deref())
            .push_opt("from", self.from.as_deref())
            .push_opt("to", self.to.as_deref());
        self.paging.apply(&mut query);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btcmarkets_types::TimeWindow;

    #[test]
    fn test_candle_query_order() {
        let query = CandleQuery::new()
            .paging(Paging::new().limit(10))
            .to("2019-09-02T00:00:00Z")
            .time_window(TimeWindow::H1);

        assert_eq!(
            query.to_query().build().as_deref(),
            Some("timeWindow=1h&to=2019-09-02T00:00:00Z&limit=10")
        );
    }

    #[test]
    fn test_empty_candle_query() {
        assert_eq!(CandleQuery::new().to_query().build(), None);
    }

    #[test]
    fn test_market_query() {
        let query = market_query(&["BTC-AUD", "XRP-AUD"]).unwrap();
        assert_eq!(query.build().as_deref(), Some("marketId=BTC-AUD&marketId=XRP-AUD"));
        assert!(matches!(market_query(&[]), Err(RestError::InvalidParameter(_))));
    }
}

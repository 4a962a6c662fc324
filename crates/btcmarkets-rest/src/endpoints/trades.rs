//! Own trade history endpoints

use crate::client::BtcMarketsClient;
use crate::error::RestResult;
use crate::request::{ApiRequest, Paging, QueryString};
use crate::types::Trade;
use tracing::instrument;

/// Trade endpoints
pub struct TradeEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> TradeEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// List own trades
    #[instrument(skip(self))]
    pub async fn list_trades(&self, query: &TradeQuery) -> RestResult<Vec<Trade>> {
        self.client
            .execute(ApiRequest::get("/v3/trades").with_query(&query.to_query()))
            .await
    }

    /// Get a trade by id
    #[instrument(skip(self))]
    pub async fn get_trade(&self, trade_id: &str) -> RestResult<Trade> {
        let path = format!("/v3/trades/{}", trade_id);
        self.client.execute(ApiRequest::get(path)).await
    }
}

/// Optional filters of the trade listing endpoint
///
/// Sent as `marketId, orderId, before, after, limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeQuery {
    pub market_id: Option<String>,
    pub order_id: Option<String>,
    pub paging: Paging,
}

impl TradeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn market_id(mut self, market_id: impl Into<String>) -> Self {
        self.market_id = Some(market_id.into());
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_opt("marketId", self.market_id.as_deref())
            .push_opt("orderId", self.order_id.as_deref());
        self.paging.apply(&mut query);
        query
    }
}

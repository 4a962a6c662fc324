//! Order placement and management endpoints

use crate::client::BtcMarketsClient;
use crate::error::RestResult;
use crate::request::{ApiRequest, Paging, QueryString};
use crate::types::{CancelledOrder, NewOrder, Order, ReplaceOrder};
use tracing::{debug, instrument};

/// Order endpoints
pub struct OrderEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> OrderEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// # Arguments
    /// * `order` - Order with all parameters; serialized in wire order
    ///
    /// # Returns
    /// The accepted order
    #[instrument(skip(self, order), fields(market = %order.market_id, side = %order.side, order_type = %order.order_type))]
    pub async fn place_new_order(&self, order: &NewOrder) -> RestResult<Order> {
        debug!(
            "Placing {} {} order for {} @ {} on {}",
            order.side, order.order_type, order.amount, order.price, order.market_id
        );

        let request = ApiRequest::post("/v3/orders").with_json(order)?;
        self.client.execute(request).await
    }

    /// List orders
    ///
    /// # Arguments
    /// * `query` - Market, paging and status filters
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: &OrderQuery) -> RestResult<Vec<Order>> {
        self.client
            .execute(ApiRequest::get("/v3/orders").with_query(&query.to_query()))
            .await
    }

    /// Cancel all open orders, optionally restricted to some markets
    ///
    /// # Arguments
    /// * `market_ids` - Markets to cancel on; all markets when empty
    #[instrument(skip(self), fields(count = market_ids.len()))]
    pub async fn cancel_open_orders(&self, market_ids: &[&str]) -> RestResult<Vec<CancelledOrder>> {
        let mut query = QueryString::new();
        query.push_all("marketId", market_ids);

        debug!("Cancelling open orders");
        self.client
            .execute(ApiRequest::delete("/v3/orders").with_query(&query))
            .await
    }

    /// Get an order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<Order> {
        let path = format!("/v3/orders/{}", order_id);
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Cancel an order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<CancelledOrder> {
        debug!("Cancelling order {}", order_id);
        let path = format!("/v3/orders/{}", order_id);
        self.client.execute(ApiRequest::delete(path)).await
    }

    /// Replace an open order's price and amount
    ///
    /// # Arguments
    /// * `order_id` - Order to replace
    /// * `replacement` - New price, amount and optional client id
    ///
    /// # Returns
    /// The replacement order, which has a new id
    #[instrument(skip(self, replacement))]
    pub async fn replace_order(&self, order_id: &str, replacement: &ReplaceOrder) -> RestResult<Order> {
        debug!("Replacing order {}", order_id);
        let path = format!("/v3/orders/{}", order_id);
        let request = ApiRequest::put(path).with_json(replacement)?;
        self.client.execute(request).await
    }
}

/// Optional filters of the order listing endpoint
///
/// Sent as `marketId, before, after, limit, status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub market_id: Option<String>,
    pub paging: Paging,
    pub status: Option<String>,
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn market_id(mut self, market_id: impl Into<String>) -> Self {
        self.market_id = Some(market_id.into());
        self
    }

    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    /// `OrderStatusFilter::Open` / `"open"` or `OrderStatusFilter::All` / `"all"`
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push_opt("marketId", self.market_id.as_deref());
        self.paging.apply(&mut query);
        query.push_opt("status", self.status.as_deref());
        query
    }
}

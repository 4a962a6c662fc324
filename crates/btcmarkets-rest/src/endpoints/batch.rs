//! Batch order endpoints
//!
//! Ids are joined with commas into the path: `/v3/batchorders/1,2,3`.

use crate::client::BtcMarketsClient;
use crate::error::{RestError, RestResult};
use crate::request::ApiRequest;
use crate::types::{BatchOrderRequest, BatchOrderResult, BatchOrdersById, CancelledOrder, Order};
use tracing::{debug, instrument};

/// Batch order endpoints
pub struct BatchOrderEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> BatchOrderEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// Place and cancel orders in one request
    #[instrument(skip(self, batch), fields(place = batch.place_order.len(), cancel = batch.cancel_order.len()))]
    pub async fn place_and_cancel_orders(&self, batch: &BatchOrderRequest) -> RestResult<BatchOrderResult> {
        if batch.is_empty() {
            return Err(RestError::InvalidParameter("Empty batch".to_string()));
        }

        debug!(
            "Submitting batch: {} to place, {} to cancel",
            batch.place_order.len(),
            batch.cancel_order.len()
        );

        let request = ApiRequest::post("/v3/batchorders").with_json(batch)?;
        self.client.execute(request).await
    }

    /// Get several orders by id
    #[instrument(skip(self), fields(count = order_ids.len()))]
    pub async fn get_orders_by_id(&self, order_ids: &[&str]) -> RestResult<BatchOrdersById<Order>> {
        let path = batch_path(order_ids)?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Cancel several orders by id
    #[instrument(skip(self), fields(count = order_ids.len()))]
    pub async fn cancel_orders_by_id(
        &self,
        order_ids: &[&str],
    ) -> RestResult<BatchOrdersById<CancelledOrder>> {
        let path = batch_path(order_ids)?;
        debug!("Cancelling {} orders", order_ids.len());
        self.client.execute(ApiRequest::delete(path)).await
    }
}

fn batch_path(order_ids: &[&str]) -> RestResult<String> {
    if order_ids.is_empty() {
        return Err(RestError::InvalidParameter("Empty order id list".to_string()));
    }

    Ok(format!("/v3/batchorders/{}", order_ids.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_path() {
        assert_eq!(batch_path(&["1", "2", "3"]).unwrap(), "/v3/batchorders/1,2,3");
        assert!(matches!(batch_path(&[]), Err(RestError::InvalidParameter(_))));
    }
}

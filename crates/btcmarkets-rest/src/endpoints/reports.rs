//! Report endpoints

use crate::client::BtcMarketsClient;
use crate::error::RestResult;
use crate::request::ApiRequest;
use crate::types::{Report, ReportRequest};
use tracing::instrument;

/// Report endpoints
pub struct ReportEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> ReportEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// Request a new report
    ///
    /// # Arguments
    /// * `request` - Report type (e.g., "TransactionReport") and format
    #[instrument(skip(self))]
    pub async fn create_report(&self, request: &ReportRequest) -> RestResult<Report> {
        let request = ApiRequest::post("/v3/reports").with_json(request)?;
        self.client.execute(request).await
    }

    /// Get a report by id
    #[instrument(skip(self))]
    pub async fn get_report(&self, report_id: &str) -> RestResult<Report> {
        let path = format!("/v3/reports/{}", report_id);
        self.client.execute(ApiRequest::get(path)).await
    }
}

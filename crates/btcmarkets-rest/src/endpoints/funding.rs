//! Deposit, withdrawal and asset endpoints

use crate::client::BtcMarketsClient;
use crate::error::RestResult;
use crate::request::{ApiRequest, Paging, QueryString};
use crate::types::{Asset, AssetFee, DepositAddress, Transfer, WithdrawalRequest};
use tracing::{debug, instrument};

/// Funding endpoints
pub struct FundingEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    async fn list(&self, path: &str, paging: &Paging) -> RestResult<Vec<Transfer>> {
        let mut query = QueryString::new();
        paging.apply(&mut query);
        self.client
            .execute(ApiRequest::get(path).with_query(&query))
            .await
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> RestResult<Transfer> {
        let path = format!("/v3/{}/{}", collection, id);
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Request a withdrawal
    ///
    /// # Arguments
    /// * `request` - Asset, amount and destination
    #[instrument(skip(self, request), fields(asset = %request.asset_name))]
    pub async fn request_withdrawal(&self, request: &WithdrawalRequest) -> RestResult<Transfer> {
        debug!("Requesting withdrawal of {} {}", request.amount, request.asset_name);
        let request = ApiRequest::post("/v3/withdrawals").with_json(request)?;
        self.client.execute(request).await
    }

    /// List withdrawals
    #[instrument(skip(self))]
    pub async fn list_withdrawals(&self, paging: &Paging) -> RestResult<Vec<Transfer>> {
        self.list("/v3/withdrawals", paging).await
    }

    /// Get a withdrawal by id
    #[instrument(skip(self))]
    pub async fn get_withdrawal(&self, id: &str) -> RestResult<Transfer> {
        self.get_by_id("withdrawals", id).await
    }

    /// List deposits
    #[instrument(skip(self))]
    pub async fn list_deposits(&self, paging: &Paging) -> RestResult<Vec<Transfer>> {
        self.list("/v3/deposits", paging).await
    }

    /// Get a deposit by id
    #[instrument(skip(self))]
    pub async fn get_deposit(&self, id: &str) -> RestResult<Transfer> {
        self.get_by_id("deposits", id).await
    }

    /// List deposits and withdrawals together
    #[instrument(skip(self))]
    pub async fn list_transfers(&self, paging: &Paging) -> RestResult<Vec<Transfer>> {
        self.list("/v3/transfers", paging).await
    }

    /// Get a deposit or withdrawal by id
    #[instrument(skip(self))]
    pub async fn get_transfer(&self, id: &str) -> RestResult<Transfer> {
        self.get_by_id("transfers", id).await
    }

    /// Get the deposit address for an asset
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, asset_name: &str) -> RestResult<DepositAddress> {
        let mut query = QueryString::new();
        query.push("assetName", asset_name);
        self.client
            .execute(ApiRequest::get("/v3/addresses").with_query(&query))
            .await
    }

    /// Get withdrawal fees for all assets
    #[instrument(skip(self))]
    pub async fn get_withdrawal_fees(&self) -> RestResult<Vec<AssetFee>> {
        self.client.execute(ApiRequest::get("/v3/withdrawal-fees")).await
    }

    /// List assets and their funding limits
    #[instrument(skip(self))]
    pub async fn list_assets(&self) -> RestResult<Vec<Asset>> {
        self.client.execute(ApiRequest::get("/v3/assets")).await
    }
}

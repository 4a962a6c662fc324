//! Account endpoints under `/v3/accounts/me`

use crate::client::BtcMarketsClient;
use crate::error::RestResult;
use crate::request::{ApiRequest, Paging, QueryString};
use crate::types::{Balance, Transaction, TradingFees, WithdrawalLimit};
use tracing::instrument;

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BtcMarketsClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BtcMarketsClient) -> Self {
        Self { client }
    }

    /// Get 30-day volume and per-market fee rates
    #[instrument(skip(self))]
    pub async fn get_trading_fees(&self) -> RestResult<TradingFees> {
        self.client
            .execute(ApiRequest::get("/v3/accounts/me/trading-fees"))
            .await
    }

    /// Get daily withdrawal limits
    #[instrument(skip(self))]
    pub async fn get_withdrawal_limits(&self) -> RestResult<Vec<WithdrawalLimit>> {
        self.client
            .execute(ApiRequest::get("/v3/accounts/me/withdrawal-limits"))
            .await
    }

    /// Get balances
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        self.client
            .execute(ApiRequest::get("/v3/accounts/me/balances"))
            .await
    }

    /// Get ledger transactions
    ///
    /// # Arguments
    /// * `query` - Asset filter and paging
    #[instrument(skip(self))]
    pub async fn get_transactions(&self, query: &TransactionQuery) -> RestResult<Vec<Transaction>> {
        self.client
            .execute(ApiRequest::get("/v3/accounts/me/transactions").with_query(&query.to_query()))
            .await
    }
}

/// Optional filters of the transaction endpoint
///
/// Sent as `assetName, before, after, limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub asset_name: Option<String>,
    pub paging: Paging,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asset_name(mut self, asset_name: impl Into<String>) -> Self {
        self.asset_name = Some(asset_name.into());
        self
    }

    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push_opt("assetName", self.asset_name.as_deref());
        self.paging.apply(&mut query);
        query
    }
}

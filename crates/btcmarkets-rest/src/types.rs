//! Types for BTC Markets REST API requests and responses
//!
//! Request bodies are serde structs whose field declaration order is the
//! wire order; the signature covers the serialized bytes, so reordering a
//! field changes what gets signed. Absent options are skipped, never sent
//! as `null`.
//!
//! Response quantities stay as the exchange's decimal strings and are
//! exposed through `Decimal` helpers.

use btcmarkets_types::{OrderStatus, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn parse_decimal(value: &str) -> Option<Decimal> {
    value.parse().ok()
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body of `POST /v3/orders`
///
/// Keys serialize as `marketId, price, amount, type, side` followed by the
/// optional `triggerPrice, targetAmount, timeInForce, postOnly, selfTrade,
/// clientOrderId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub market_id: String,
    pub price: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    /// Sent only as `true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_trade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl NewOrder {
    /// Create an order with the five mandatory fields
    ///
    /// Values are sent verbatim. `order_type` and `side` accept
    /// [`OrderType`](btcmarkets_types::OrderType) / [`Side`] or plain strings.
    pub fn new(
        market_id: impl Into<String>,
        price: impl Into<String>,
        amount: impl Into<String>,
        order_type: impl Into<String>,
        side: impl Into<String>,
    ) -> Self {
        Self {
            market_id: market_id.into(),
            price: price.into(),
            amount: amount.into(),
            order_type: order_type.into(),
            side: side.into(),
            trigger_price: None,
            target_amount: None,
            time_in_force: None,
            post_only: None,
            self_trade: None,
            client_order_id: None,
        }
    }

    /// Create a limit order
    pub fn limit(
        market_id: impl Into<String>,
        side: Side,
        price: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::new(market_id, price, amount, btcmarkets_types::OrderType::Limit, side)
    }

    pub fn trigger_price(mut self, trigger_price: impl Into<String>) -> Self {
        self.trigger_price = Some(trigger_price.into());
        self
    }

    pub fn target_amount(mut self, target_amount: impl Into<String>) -> Self {
        self.target_amount = Some(target_amount.into());
        self
    }

    pub fn time_in_force(mut self, time_in_force: impl Into<String>) -> Self {
        self.time_in_force = Some(time_in_force.into());
        self
    }

    /// Reject the order instead of taking liquidity
    pub fn post_only(mut self) -> Self {
        self.post_only = Some(true);
        self
    }

    pub fn self_trade(mut self, self_trade: impl Into<String>) -> Self {
        self.self_trade = Some(self_trade.into());
        self
    }

    pub fn client_order_id(mut self, client_order_id: impl Into<String>) -> Self {
        self.client_order_id = Some(client_order_id.into());
        self
    }
}

/// Body of `PUT /v3/orders/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrder {
    pub price: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl ReplaceOrder {
    pub fn new(price: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            amount: amount.into(),
            client_order_id: None,
        }
    }

    pub fn client_order_id(mut self, client_order_id: impl Into<String>) -> Self {
        self.client_order_id = Some(client_order_id.into());
        self
    }
}

/// Order to cancel inside a batch request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

impl CancelOrderRef {
    pub fn by_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            client_order_id: None,
        }
    }

    pub fn by_client_id(client_order_id: impl Into<String>) -> Self {
        Self {
            order_id: None,
            client_order_id: Some(client_order_id.into()),
        }
    }
}

/// Body of `POST /v3/batchorders`: `placeOrder` then `cancelOrder`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderRequest {
    pub place_order: Vec<NewOrder>,
    pub cancel_order: Vec<CancelOrderRef>,
}

impl BatchOrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, order: NewOrder) -> Self {
        self.place_order.push(order);
        self
    }

    pub fn cancel(mut self, order: CancelOrderRef) -> Self {
        self.cancel_order.push(order);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.place_order.is_empty() && self.cancel_order.is_empty()
    }
}

/// Body of `POST /v3/withdrawals`
///
/// Crypto withdrawals set `toAddress`; AUD withdrawals use the bank fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub asset_name: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsb_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl WithdrawalRequest {
    pub fn new(asset_name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            amount: amount.into(),
            to_address: None,
            account_name: None,
            account_number: None,
            bsb_number: None,
            bank_name: None,
        }
    }

    pub fn to_address(mut self, to_address: impl Into<String>) -> Self {
        self.to_address = Some(to_address.into());
        self
    }

    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn bsb_number(mut self, bsb_number: impl Into<String>) -> Self {
        self.bsb_number = Some(bsb_number.into());
        self
    }

    pub fn bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }
}

/// Body of `POST /v3/reports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub report_type: String,
    pub format: String,
}

impl ReportRequest {
    pub fn new(report_type: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
            format: format.into(),
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Active market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub market_id: String,
    pub base_asset_name: String,
    pub quote_asset_name: String,
    pub min_order_amount: Option<String>,
    pub max_order_amount: Option<String>,
    pub amount_decimals: Option<String>,
    pub price_decimals: Option<String>,
    pub status: Option<String>,
}

/// Ticker for one market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub market_id: String,
    pub best_bid: String,
    pub best_ask: String,
    pub last_price: String,
    #[serde(rename = "volume24h")]
    pub volume_24h: Option<String>,
    #[serde(rename = "volumeQte24h")]
    pub volume_quote_24h: Option<String>,
    #[serde(rename = "price24h")]
    pub price_24h: Option<String>,
    #[serde(rename = "pricePct24h")]
    pub price_pct_24h: Option<String>,
    #[serde(rename = "low24h")]
    pub low_24h: Option<String>,
    #[serde(rename = "high24h")]
    pub high_24h: Option<String>,
    pub timestamp: String,
}

impl Ticker {
    pub fn bid_price(&self) -> Option<Decimal> {
        parse_decimal(&self.best_bid)
    }

    pub fn ask_price(&self) -> Option<Decimal> {
        parse_decimal(&self.best_ask)
    }

    pub fn last(&self) -> Option<Decimal> {
        parse_decimal(&self.last_price)
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }

    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        let mid = self.mid_price()?;
        if mid.is_zero() {
            return None;
        }
        Some((ask - bid) / mid * Decimal::from(10000))
    }
}

/// Public trade on a market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrade {
    pub id: String,
    pub price: String,
    pub amount: String,
    pub timestamp: String,
    pub side: String,
}

/// Orderbook snapshot
///
/// Levels 1 and 2 are `[price, amount, count]`; level 3 is
/// `[price, amount, orderId]`. Entries are kept as raw JSON values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orderbook {
    pub market_id: String,
    pub snapshot_id: Option<u64>,
    pub asks: Vec<Vec<serde_json::Value>>,
    pub bids: Vec<Vec<serde_json::Value>>,
}

fn level_price(level: &[serde_json::Value]) -> Option<Decimal> {
    match level.first()? {
        serde_json::Value::String(s) => parse_decimal(s),
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}

impl Orderbook {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().and_then(|level| level_price(level))
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().and_then(|level| level_price(level))
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Candle `[time, open, high, low, close, volume]`
#[derive(Debug, Clone, Deserialize)]
pub struct Candle(pub String, pub String, pub String, pub String, pub String, pub String);

impl Candle {
    pub fn time(&self) -> &str {
        &self.0
    }

    pub fn open(&self) -> Option<Decimal> {
        parse_decimal(&self.1)
    }

    pub fn high(&self) -> Option<Decimal> {
        parse_decimal(&self.2)
    }

    pub fn low(&self) -> Option<Decimal> {
        parse_decimal(&self.3)
    }

    pub fn close(&self) -> Option<Decimal> {
        parse_decimal(&self.4)
    }

    pub fn volume(&self) -> Option<Decimal> {
        parse_decimal(&self.5)
    }
}

/// Server time
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// ISO-8601 timestamp
    pub timestamp: String,
}

// ============================================================================
// Order Types
// ============================================================================

/// Order as returned by the order endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub market_id: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub creation_time: String,
    pub price: String,
    pub amount: String,
    pub open_amount: String,
    pub status: String,
    pub trigger_price: Option<String>,
    pub target_amount: Option<String>,
    pub time_in_force: Option<String>,
    pub post_only: Option<bool>,
    pub self_trade: Option<String>,
    pub client_order_id: Option<String>,
}

impl Order {
    /// Parsed status, `None` for statuses this crate does not know
    pub fn order_status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }

    /// Amount already matched
    pub fn filled_amount(&self) -> Option<Decimal> {
        Some(parse_decimal(&self.amount)? - parse_decimal(&self.open_amount)?)
    }
}

/// Result of a single-order cancel
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrder {
    pub order_id: String,
    pub client_order_id: Option<String>,
}

/// Entry the exchange could not process inside a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnprocessedRequest {
    pub code: String,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

/// Result of `POST /v3/batchorders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderResult {
    #[serde(default)]
    pub place_orders: Vec<Order>,
    #[serde(default)]
    pub cancel_orders: Vec<CancelledOrder>,
    #[serde(default)]
    pub unprocessed_requests: Vec<UnprocessedRequest>,
}

/// Result of the batch order lookup and cancel endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrdersById<T> {
    #[serde(default = "Vec::new", alias = "cancelOrders")]
    pub orders: Vec<T>,
    #[serde(default)]
    pub unprocessed_requests: Vec<UnprocessedRequest>,
}

// ============================================================================
// Trade Types
// ============================================================================

/// Own trade
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub market_id: String,
    pub timestamp: String,
    pub price: String,
    pub amount: String,
    pub side: String,
    pub fee: Option<String>,
    pub order_id: String,
    pub liquidity_type: Option<String>,
    pub client_order_id: Option<String>,
    pub value_in_quote_asset: Option<String>,
}

impl Trade {
    pub fn fee_amount(&self) -> Option<Decimal> {
        self.fee.as_deref().and_then(parse_decimal)
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Deposit, withdrawal, or generic transfer record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub asset_name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub creation_time: String,
    pub status: String,
    pub description: Option<String>,
    pub fee: Option<String>,
    pub last_update: Option<String>,
    pub payment_detail: Option<PaymentDetail>,
}

/// Destination details of a transfer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    pub address: Option<String>,
    pub tx_id: Option<String>,
}

/// Deposit address for an asset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
    pub address: String,
    pub asset_name: String,
}

/// Withdrawal fee for an asset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFee {
    pub asset_name: String,
    pub fee: String,
}

/// Asset configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_name: String,
    pub min_deposit_amount: Option<String>,
    pub max_deposit_amount: Option<String>,
    pub deposit_decimals: Option<String>,
    pub min_withdrawal_amount: Option<String>,
    pub max_withdrawal_amount: Option<String>,
    pub withdrawal_decimals: Option<String>,
    pub withdrawal_fee: Option<String>,
    pub deposit_fee: Option<String>,
}

// ============================================================================
// Account Types
// ============================================================================

/// Maker/taker fee rate on one market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFee {
    pub market_id: String,
    pub maker_fee_rate: String,
    pub taker_fee_rate: String,
}

/// Account trading fees
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingFees {
    #[serde(rename = "volume30Day")]
    pub volume_30_day: String,
    #[serde(default)]
    pub fee_by_markets: Vec<MarketFee>,
}

/// Daily withdrawal limit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalLimit {
    pub asset_name: String,
    pub daily_limit: String,
    pub daily_usage: String,
}

impl WithdrawalLimit {
    /// Amount still available today
    pub fn remaining(&self) -> Option<Decimal> {
        Some(parse_decimal(&self.daily_limit)? - parse_decimal(&self.daily_usage)?)
    }
}

/// Balance of one asset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub asset_name: String,
    pub balance: String,
    pub available: String,
    pub locked: String,
}

impl Balance {
    pub fn total(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    pub fn available_amount(&self) -> Option<Decimal> {
        parse_decimal(&self.available)
    }

    pub fn locked_amount(&self) -> Option<Decimal> {
        parse_decimal(&self.locked)
    }
}

/// Ledger entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub creation_time: String,
    pub description: Option<String>,
    pub asset_name: String,
    pub amount: String,
    pub balance: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub record_type: Option<String>,
    pub reference_id: Option<String>,
}

// ============================================================================
// Report Types
// ============================================================================

/// Generated report
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub content_url: Option<String>,
    pub creation_time: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub status: String,
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use btcmarkets_types::{OrderType, SelfTrade, TimeInForce};
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_key_order() {
        let order = NewOrder::new("BTC-AUD", "100.12", "0.0024", "Limit", "Bid");
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(
            json,
            r#"{"marketId":"BTC-AUD","price":"100.12","amount":"0.0024","type":"Limit","side":"Bid"}"#
        );
    }

    #[test]
    fn test_new_order_all_options_in_order() {
        let order = NewOrder::new("BTC-AUD", "100", "1", OrderType::StopLimit, Side::Ask)
            .client_order_id("ABC123")
            .self_trade(SelfTrade::Prevent)
            .post_only()
            .time_in_force(TimeInForce::GoodTillCancelled)
            .target_amount("50")
            .trigger_price("99");

        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"marketId":"BTC-AUD","price":"100","amount":"1","type":"Stop Limit","side":"Ask","#,
                r#""triggerPrice":"99","targetAmount":"50","timeInForce":"GTC","postOnly":true,"#,
                r#""selfTrade":"P","clientOrderId":"ABC123"}"#
            )
        );
    }

    #[test]
    fn test_client_order_id_is_last() {
        let order = NewOrder::limit("BTC-AUD", Side::Bid, "100.12", "0.0024").client_order_id("ABC123");
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.ends_with(r#","clientOrderId":"ABC123"}"#));
    }

    #[test]
    fn test_replace_order_body() {
        let body = ReplaceOrder::new("101", "0.5");
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"price":"101","amount":"0.5"}"#);

        let body = body.client_order_id("X");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"price":"101","amount":"0.5","clientOrderId":"X"}"#
        );
    }

    #[test]
    fn test_batch_body() {
        let batch = BatchOrderRequest::new()
            .place(NewOrder::limit("BTC-AUD", Side::Bid, "1", "2"))
            .cancel(CancelOrderRef::by_id("7"));

        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"placeOrder":[{"marketId":"BTC-AUD","price":"1","amount":"2","type":"Limit","side":"Bid"}],"#,
                r#""cancelOrder":[{"orderId":"7"}]}"#
            )
        );
        assert!(BatchOrderRequest::new().is_empty());
    }

    #[test]
    fn test_withdrawal_body_order() {
        let body = WithdrawalRequest::new("AUD", "100")
            .bank_name("Bank")
            .account_name("Jo")
            .bsb_number("062000")
            .account_number("1234");

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"assetName":"AUD","amount":"100","accountName":"Jo","accountNumber":"1234","bsbNumber":"062000","bankName":"Bank"}"#
        );
    }

    #[test]
    fn test_report_body() {
        let body = ReportRequest::new("TransactionReport", "json");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"type":"TransactionReport","format":"json"}"#
        );
    }

    #[test]
    fn test_ticker_helpers() {
        let ticker: Ticker = serde_json::from_str(
            r#"{"marketId":"BTC-AUD","bestBid":"99","bestAsk":"101","lastPrice":"100",
                "volume24h":"10.5","timestamp":"2019-09-01T10:35:04.940000Z"}"#,
        )
        .unwrap();

        assert_eq!(ticker.mid_price(), Some(dec!(100)));
        assert_eq!(ticker.spread_bps(), Some(dec!(200)));
        assert_eq!(ticker.volume_24h.as_deref(), Some("10.5"));
    }

    #[test]
    fn test_orderbook_levels() {
        let book: Orderbook = serde_json::from_str(
            r#"{"marketId":"BTC-AUD","snapshotId":1567334110144000,
                "asks":[["101.5","0.1",2]],"bids":[["100.5","0.3",1]]}"#,
        )
        .unwrap();

        assert_eq!(book.best_ask(), Some(dec!(101.5)));
        assert_eq!(book.spread(), Some(dec!(1.0)));
    }

    #[test]
    fn test_candle() {
        let candles: Vec<Candle> = serde_json::from_str(
            r#"[["2019-09-02T18:00:00.000000Z","15100","15200","15050","15150","3.5"]]"#,
        )
        .unwrap();
        assert_eq!(candles[0].close(), Some(dec!(15150)));
        assert_eq!(candles[0].time(), "2019-09-02T18:00:00.000000Z");
    }

    #[test]
    fn test_order_helpers() {
        let order: Order = serde_json::from_str(
            r#"{"orderId":"7","marketId":"BTC-AUD","side":"Bid","type":"Limit",
                "creationTime":"2019-08-30T11:08:21.956000Z","price":"100.12","amount":"1",
                "openAmount":"0.25","status":"Partially Matched","postOnly":false}"#,
        )
        .unwrap();

        assert_eq!(order.order_status(), Some(OrderStatus::PartiallyMatched));
        assert_eq!(order.filled_amount(), Some(dec!(0.75)));
        assert_eq!(order.client_order_id, None);
    }

    #[test]
    fn test_batch_lookup_accepts_cancel_key() {
        let result: BatchOrdersById<CancelledOrder> = serde_json::from_str(
            r#"{"cancelOrders":[{"orderId":"1"}],"unprocessedRequests":[{"code":"OrderAlreadyCancelled","requestId":"2"}]}"#,
        )
        .unwrap();

        assert_eq!(result.orders.len(), 1);
        assert_eq!(result.unprocessed_requests[0].request_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_balance_helpers() {
        let balance: Balance = serde_json::from_str(
            r#"{"assetName":"AUD","balance":"100","available":"75.5","locked":"24.5"}"#,
        )
        .unwrap();
        assert_eq!(balance.available_amount(), Some(dec!(75.5)));

        let limit: WithdrawalLimit = serde_json::from_str(
            r#"{"assetName":"AUD","dailyLimit":"1000","dailyUsage":"250"}"#,
        )
        .unwrap();
        assert_eq!(limit.remaining(), Some(dec!(750)));
    }

    #[test]
    fn test_trading_fees() {
        let fees: TradingFees = serde_json::from_str(
            r#"{"volume30Day":"0.0098","feeByMarkets":[{"makerFeeRate":"0.0085","takerFeeRate":"0.0085","marketId":"BTC-AUD"}]}"#,
        )
        .unwrap();

        assert_eq!(fees.volume_30_day, "0.0098");
        assert_eq!(fees.fee_by_markets.len(), 1);
        assert_eq!(fees.fee_by_markets[0].market_id, "BTC-AUD");
        assert_eq!(fees.fee_by_markets[0].taker_fee_rate, "0.0085");
    }
}

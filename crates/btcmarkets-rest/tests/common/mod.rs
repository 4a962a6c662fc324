//! Common test utilities and fixtures for integration tests
//!
//! Sample bodies follow the shapes documented for BTC Markets API v3.

#![allow(dead_code)]

use btcmarkets_rest::{BtcMarketsClient, ClientConfig, Credentials};
use wiremock::{MockServer, Request};

/// Base64 of "btcmarkets-test-secret"
pub const TEST_SECRET: &str = "YnRjbWFya2V0cy10ZXN0LXNlY3JldA==";
pub const TEST_API_KEY: &str = "test-api-key";

pub const ORDERBOOK: &str = r#"{
    "marketId": "BTC-AUD",
    "snapshotId": 1567334110144000,
    "asks": [["14765.0", "0.12"], ["14800.0", "1.5"]],
    "bids": [["14700.0", "0.45"], ["14650.0", "2"]]
}"#;

pub const ORDER: &str = r#"{
    "orderId": "7524",
    "marketId": "BTC-AUD",
    "side": "Bid",
    "type": "Limit",
    "creationTime": "2019-08-30T11:08:21.956000Z",
    "price": "100.12",
    "amount": "0.0024",
    "openAmount": "0.0024",
    "status": "Accepted",
    "clientOrderId": "ABC123"
}"#;

pub const CANCELLED_ORDERS: &str = r#"[
    {"orderId": "7524", "clientOrderId": "ABC123"},
    {"orderId": "7525"}
]"#;

pub const CANDLES: &str = r#"[
    ["2019-09-02T18:00:00.000000Z", "15100", "15200", "15050", "15150", "3.5"],
    ["2019-09-02T19:00:00.000000Z", "15150", "15300", "15120", "15280", "1.25"]
]"#;

pub const TICKERS: &str = r#"[
    {"marketId": "BTC-AUD", "bestBid": "14700", "bestAsk": "14765", "lastPrice": "14720",
     "volume24h": "12.5", "volumeQte24h": "184000", "price24h": "120", "pricePct24h": "0.82",
     "low24h": "14500", "high24h": "14800", "timestamp": "2019-09-01T10:35:04.940000Z"},
    {"marketId": "XRP-AUD", "bestBid": "0.38", "bestAsk": "0.39", "lastPrice": "0.385",
     "timestamp": "2019-09-01T10:35:04.940000Z"}
]"#;

pub const TRADES: &str = r#"[{
    "id": "36014819",
    "marketId": "XRP-AUD",
    "timestamp": "2019-06-25T16:01:02.977000Z",
    "price": "0.67",
    "amount": "1.50533262",
    "side": "Ask",
    "fee": "0.00857285",
    "orderId": "3648306",
    "liquidityType": "Taker",
    "clientOrderId": "48"
}]"#;

pub const WITHDRAWAL: &str = r#"{
    "id": "4126657",
    "assetName": "XRP",
    "amount": "25",
    "type": "Withdraw",
    "creationTime": "2019-09-04T00:04:10.973000Z",
    "status": "Pending Authorization",
    "description": "XRP withdraw from [me@test.com] to Address: raR7hqhxXVYY9Gxi1uE9uS2jEBPiKnpq9n",
    "fee": "0",
    "lastUpdate": "2019-09-04T00:04:11.018000Z",
    "paymentDetail": {"address": "raR7hqhxXVYY9Gxi1uE9uS2jEBPiKnpq9n"}
}"#;

pub const DEPOSIT_ADDRESS: &str = r#"{"address": "rHx9kGRk5WqVhgoNhj4iDhVRG3mXtmqbWA", "assetName": "XRP"}"#;

pub const ASSETS: &str = r#"[{
    "assetName": "AUD",
    "minDepositAmount": "1",
    "maxDepositAmount": "1000000",
    "depositDecimals": "2",
    "minWithdrawalAmount": "1",
    "maxWithdrawalAmount": "1000000",
    "withdrawalDecimals": "2",
    "withdrawalFee": "0",
    "depositFee": "0"
}]"#;

pub const TRADING_FEES: &str = r#"{
    "volume30Day": "0.0098",
    "feeByMarkets": [
        {"makerFeeRate": "0.0085", "takerFeeRate": "0.0085", "marketId": "BTC-AUD"},
        {"makerFeeRate": "0.0085", "takerFeeRate": "0.0085", "marketId": "LTC-AUD"}
    ]
}"#;

pub const WITHDRAWAL_LIMITS: &str = r#"[
    {"assetName": "AUD", "dailyLimit": "3000", "dailyUsage": "1200.5"},
    {"assetName": "BTC", "dailyLimit": "10", "dailyUsage": "0"}
]"#;

pub const TRANSACTIONS: &str = r#"[{
    "id": "858",
    "creationTime": "2019-08-29T08:14:59.672000Z",
    "description": "Trade settled: buy BTC",
    "assetName": "AUD",
    "amount": "-100",
    "balance": "900",
    "type": "Trade",
    "recordType": "Trade",
    "referenceId": "7524"
}]"#;

pub const REPORT: &str = r#"{
    "id": "1234",
    "contentUrl": "/v3/reports/1234/content",
    "creationTime": "2019-09-04T00:04:10.973000Z",
    "type": "TransactionReport",
    "status": "Complete",
    "format": "json"
}"#;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET).expect("valid test credentials")
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> BtcMarketsClient {
    init_tracing();
    let config = ClientConfig::new().with_base_url(server.uri());
    BtcMarketsClient::with_config(credentials(), config).expect("client should build")
}

pub fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .expect("header should be ASCII")
}

/// Recompute the signature the server should have received
pub fn expected_signature(request: &Request) -> String {
    let body = if request.body.is_empty() {
        None
    } else {
        Some(std::str::from_utf8(&request.body).expect("UTF-8 body"))
    };

    credentials().sign(
        request.method.as_str(),
        request.url.path(),
        header(request, "BM-AUTH-TIMESTAMP"),
        body,
    )
}

/// The single request the mock server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

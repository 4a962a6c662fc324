//! REST API v3 client for the BTC Markets cryptocurrency exchange
//!
//! This crate provides a signed client for every v3 endpoint: market data,
//! order management, batch orders, trade history, funding, account data
//! and reports.
//!
//! # Features
//!
//! - **Market Data**: Markets, tickers, trades, orderbooks, candles
//! - **Orders**: Place, list, cancel, and replace orders, single or batched
//! - **Funding**: Deposits, withdrawals, transfers, addresses, fees
//! - **Account**: Balances, trading fees, withdrawal limits, transactions
//!
//! # Authentication
//!
//! Every request is signed with HMAC-SHA512 over
//! `method + path + timestamp + body`, including the public market data
//! endpoints. See `btcmarkets-auth`.
//!
//! # Example
//!
//! ```no_run
//! use btcmarkets_rest::{BtcMarketsClient, Credentials, NewOrder, Paging, Side};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = BtcMarketsClient::new(creds)?;
//!
//!     let trades = client
//!         .markets()
//!         .get_market_trades("BTC-AUD", &Paging::new().limit(10))
//!         .await?;
//!     println!("Recent trades: {}", trades.len());
//!
//!     let order = NewOrder::limit("BTC-AUD", Side::Bid, "100.12", "0.0024");
//!     match client.place_new_order(&order).await {
//!         Ok(placed) => println!("Placed {}", placed.order_id),
//!         Err(e) => println!("Rejected: {:?}", e.api_code()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! A non-2xx response becomes [`RestError::Api`] carrying the exchange's
//! error `code`. Nothing is retried; use [`RestError::recovery_strategy`]
//! to decide what to do next.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types
pub use btcmarkets_auth::Credentials;
pub use client::{BtcMarketsClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use request::{ApiRequest, HttpMethod, Paging, QueryString};

// Re-export endpoint groups and their query types
pub use endpoints::{
    AccountEndpoints, BatchOrderEndpoints, CandleQuery, FundingEndpoints, MarketEndpoints,
    OrderEndpoints, OrderQuery, ReportEndpoints, TradeEndpoints, TradeQuery, TransactionQuery,
};

// Re-export request and response models
pub use types::{
    // Requests
    BatchOrderRequest, CancelOrderRef, NewOrder, ReplaceOrder, ReportRequest, WithdrawalRequest,
    // Market data
    Candle, Market, MarketTrade, Orderbook, ServerTime, Ticker,
    // Orders
    BatchOrderResult, BatchOrdersById, CancelledOrder, Order, Trade, UnprocessedRequest,
    // Funding
    Asset, AssetFee, DepositAddress, PaymentDetail, Transfer,
    // Account
    Balance, MarketFee, Report, TradingFees, Transaction, WithdrawalLimit,
};

// Re-export shared vocabulary
pub use btcmarkets_types::{
    ApiError, ApiErrorCode, BookLevel, Decimal, OrderStatus, OrderStatusFilter, OrderType,
    RecoveryStrategy, ReportFormat, SelfTrade, Side, TimeInForce, TimeWindow,
};

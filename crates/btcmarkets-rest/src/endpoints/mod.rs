//! API endpoint implementations

pub mod account;
pub mod batch;
pub mod funding;
pub mod market;
pub mod orders;
pub mod reports;
pub mod trades;

pub use account::{AccountEndpoints, TransactionQuery};
pub use batch::BatchOrderEndpoints;
pub use funding::FundingEndpoints;
pub use market::{CandleQuery, MarketEndpoints};
pub use orders::{OrderEndpoints, OrderQuery};
pub use reports::ReportEndpoints;
pub use trades::{TradeEndpoints, TradeQuery};

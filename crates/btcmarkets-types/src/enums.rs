//! Side, OrderType, TimeInForce and the other fixed vocabularies of the API
//!
//! Every enum carries the exact string the exchange expects on the wire.
//! Request builders take plain strings, so each enum also converts into
//! `String`; callers may pass either `Side::Bid` or `"Bid"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `Display` and `From<Self> for String` via `as_str()`
macro_rules! wire_string {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )+
    };
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl Side {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bid => "Bid",
            Self::Ask => "Ask",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Bid => Self::Ask,
            Self::Ask => Self::Bid,
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bid" => Ok(Self::Bid),
            "Ask" => Ok(Self::Ask),
            other => Err(format!("unknown side: {}", other)),
        }
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order - executes at specified price or better
    Limit,
    /// Market order - executes immediately at best available price
    Market,
    /// Stop-limit order, requires `triggerPrice`
    #[serde(rename = "Stop Limit")]
    StopLimit,
    /// Stop order, requires `triggerPrice`
    Stop,
    /// Take-profit order, requires `triggerPrice`
    #[serde(rename = "Take Profit")]
    TakeProfit,
}

impl OrderType {
    /// Returns the order type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "Limit",
            Self::Market => "Market",
            Self::StopLimit => "Stop Limit",
            Self::Stop => "Stop",
            Self::TakeProfit => "Take Profit",
        }
    }

    /// Returns true if the order type needs a trigger price
    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::StopLimit | Self::Stop | Self::TakeProfit)
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInForce {
    /// Good till cancelled
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancelled => "GTC",
            Self::FillOrKill => "FOK",
            Self::ImmediateOrCancel => "IOC",
        }
    }
}

/// Self-trade behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelfTrade {
    /// Allow matching against own orders
    #[serde(rename = "A")]
    Allow,
    /// Prevent matching against own orders
    #[serde(rename = "P")]
    Prevent,
}

impl SelfTrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "A",
            Self::Prevent => "P",
        }
    }
}

/// Order status as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Accepted,
    Placed,
    #[serde(rename = "Partially Matched")]
    PartiallyMatched,
    #[serde(rename = "Fully Matched")]
    FullyMatched,
    Cancelled,
    #[serde(rename = "Partially Cancelled")]
    PartiallyCancelled,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Placed => "Placed",
            Self::PartiallyMatched => "Partially Matched",
            Self::FullyMatched => "Fully Matched",
            Self::Cancelled => "Cancelled",
            Self::PartiallyCancelled => "Partially Cancelled",
            Self::Failed => "Failed",
        }
    }

    /// Returns true while the order can still trade
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Accepted | Self::Placed | Self::PartiallyMatched)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Accepted" => Self::Accepted,
            "Placed" => Self::Placed,
            "Partially Matched" => Self::PartiallyMatched,
            "Fully Matched" => Self::FullyMatched,
            "Cancelled" => Self::Cancelled,
            "Partially Cancelled" => Self::PartiallyCancelled,
            "Failed" => Self::Failed,
            other => return Err(format!("unknown order status: {}", other)),
        })
    }
}

/// `status` filter accepted by the order listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusFilter {
    /// Only orders that can still trade
    #[default]
    Open,
    /// Open and closed orders
    All,
}

impl OrderStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::All => "all",
        }
    }
}

/// Candle time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// 1 minute
    #[serde(rename = "1m")]
    M1,
    /// 5 minutes
    #[serde(rename = "5m")]
    M5,
    /// 15 minutes
    #[serde(rename = "15m")]
    M15,
    /// 30 minutes
    #[serde(rename = "30m")]
    M30,
    /// 1 hour
    #[serde(rename = "1h")]
    H1,
    /// 6 hours
    #[serde(rename = "6h")]
    H6,
    /// 1 day
    #[serde(rename = "1d")]
    D1,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::H6 => "6h",
            Self::D1 => "1d",
        }
    }
}

/// Orderbook aggregation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookLevel {
    /// Top 50 bids and asks, aggregated by price
    #[default]
    L1 = 1,
    /// Full book, aggregated by price
    L2 = 2,
    /// Full book, one entry per order
    L3 = 3,
}

impl BookLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "1",
            Self::L2 => "2",
            Self::L3 => "3",
        }
    }

    /// Returns the level as a u8
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

wire_string!(
    Side,
    OrderType,
    TimeInForce,
    SelfTrade,
    OrderStatus,
    OrderStatusFilter,
    TimeWindow,
    BookLevel,
    ReportFormat,
);

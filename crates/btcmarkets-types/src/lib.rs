//! Shared types for the BTC Markets REST API v3
//!
//! This crate provides the vocabulary used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Side`], [`OrderType`], [`TimeInForce`], [`SelfTrade`] - Order parameters
//! - [`OrderStatus`], [`OrderStatusFilter`] - Order lifecycle
//! - [`TimeWindow`], [`BookLevel`], [`ReportFormat`] - Query parameters
//! - [`ApiError`], [`ApiErrorCode`], [`RecoveryStrategy`] - Exchange error mapping

pub mod enums;
pub mod error_codes;

pub use enums::*;
pub use error_codes::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;

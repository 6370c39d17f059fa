//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Daily price history (provider of closing prices per ticker)

pub mod market_data;
pub mod mocks;

pub use market_data::{PriceHistoryPort, MarketDataError};
pub use mocks::StaticPriceHistory;

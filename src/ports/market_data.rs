use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PriceSeries, SeriesError};

/// Market data error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider returned status {status} for {ticker}")]
    Status { ticker: String, status: u16 },

    #[error("Data parsing error: {0}")]
    Parse(String),

    #[error("No price data for {0}")]
    NoData(String),

    #[error("Insufficient history for {ticker}: {have} observations, need {need}")]
    InsufficientHistory { ticker: String, have: usize, need: usize },

    #[error("Invalid series: {0}")]
    InvalidSeries(#[from] SeriesError),
}

impl MarketDataError {
    /// Check if a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Http(_) => true,
            MarketDataError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Source of daily closing-price history.
///
/// Implementations return the most recent window for a ticker, ordered by
/// date with no duplicates, already truncated to the provider's maximum.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceHistoryPort: Send + Sync {
    /// Fetch the recent daily closes for one ticker
    async fn fetch_history(&self, ticker: &str) -> Result<PriceSeries, MarketDataError>;
}

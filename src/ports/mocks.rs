use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::domain::PriceSeries;
use super::market_data::{MarketDataError, PriceHistoryPort};

/// In-memory price history that records calls and serves canned responses.
///
/// Tickers without a configured response fail with `NoData`.
#[derive(Debug, Default, Clone)]
pub struct StaticPriceHistory {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, Result<PriceSeries, MarketDataError>>>>,
}

impl StaticPriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to serve a series for its ticker
    pub fn with_series(self, series: PriceSeries) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(series.ticker().to_string(), Ok(series));
        }
        self
    }

    /// Builder method to fail a ticker with a given error
    pub fn with_error(self, ticker: &str, error: MarketDataError) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(ticker.to_string(), Err(error));
        }
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PriceHistoryPort for StaticPriceHistory {
    async fn fetch_history(&self, ticker: &str) -> Result<PriceSeries, MarketDataError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ticker.to_string());
        }
        self.responses
            .lock()
            .map_err(|_| MarketDataError::Http("mock lock poisoned".into()))?
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| Err(MarketDataError::NoData(ticker.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_static_price_history() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let series = PriceSeries::new("AAPL", vec![Observation::new(date, 150.0)]).unwrap();
        let mock = StaticPriceHistory::new()
            .with_series(series.clone())
            .with_error("BAD", MarketDataError::Http("boom".into()));

        assert_eq!(mock.fetch_history("AAPL").await, Ok(series));
        assert!(mock.fetch_history("BAD").await.is_err());
        assert_eq!(
            mock.fetch_history("NONE").await,
            Err(MarketDataError::NoData("NONE".into()))
        );
        assert_eq!(mock.get_calls(), vec!["AAPL", "BAD", "NONE"]);
    }
}

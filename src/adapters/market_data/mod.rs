//! Market Data Adapters
//!
//! External sources of daily price history:
//! - `YahooChartClient`: Yahoo Finance v8 chart API (daily closes)
//!
//! Client Features:
//! - Retry with backoff on transport errors, 429 and 5xx
//! - Null-close filtering and per-date de-duplication
//! - Truncation to the most recent N observations

mod yahoo_chart;

pub use yahoo_chart::{YahooChartClient, YahooChartConfig, ChartResponse, parse_chart_response};

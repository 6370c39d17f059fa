//! Yahoo Finance Chart Client
//!
//! Fetches daily closes from the public v8 chart endpoint and turns them
//! into a validated [`PriceSeries`]:
//! - null closes (halted days) are dropped
//! - bars sharing a calendar date keep the latest one
//! - the result is truncated to the most recent `max_observations`

use std::collections::BTreeMap;
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::{Observation, PriceSeries};
use crate::ports::market_data::{MarketDataError, PriceHistoryPort};

/// Yahoo chart client configuration
#[derive(Debug, Clone)]
pub struct YahooChartConfig {
    /// Base URL, the ticker is appended as a path segment
    pub api_base_url: String,
    /// Calendar days of history to request
    pub history_days: u32,
    /// Series are truncated to this many most recent closes
    pub max_observations: usize,
    /// Fewer closes than this is reported as insufficient history
    pub min_observations: usize,
    /// Request timeout
    pub timeout: Duration,
    /// Number of attempts per ticker
    pub max_retries: u32,
}

impl Default for YahooChartConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            history_days: 120,
            max_observations: 100,
            min_observations: 50,
            timeout: Duration::from_secs(10),
            max_retries: 3,
        }
    }
}

/// Daily price history from Yahoo Finance
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    config: YahooChartConfig,
    http: Client,
}

impl YahooChartClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(YahooChartConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: YahooChartConfig) -> Result<Self, MarketDataError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("reversion-screener/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketDataError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &YahooChartConfig {
        &self.config
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), ticker)
    }

    /// One request, no retries
    async fn fetch_once(&self, ticker: &str) -> Result<ChartResponse, MarketDataError> {
        let now = Utc::now();
        let start = now - chrono::Duration::days(i64::from(self.config.history_days));

        let response = self
            .http
            .get(self.chart_url(ticker))
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", now.timestamp().to_string()),
                ("interval", "1d".to_string()),
                ("events", "history".to_string()),
            ])
            .send()
            .await
            .map_err(|e| MarketDataError::Http(e.to_string()))?;

        let status = response.status();
        // Unknown symbols come back as 404 with a JSON error body
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(MarketDataError::Status {
                ticker: ticker.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<ChartResponse>()
            .await
            .map_err(|e| MarketDataError::Parse(format!("{}: {}", ticker, e)))
    }

    /// Retry transient failures with linear backoff, 429 with exponential backoff
    async fn fetch_with_retry(&self, ticker: &str) -> Result<ChartResponse, MarketDataError> {
        let attempts = self.config.max_retries.max(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            match self.fetch_once(ticker).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt + 1 < attempts => {
                    let backoff = match &e {
                        MarketDataError::Status { status: 429, .. } => {
                            Duration::from_secs(2u64.pow(attempt + 1))
                        }
                        _ => Duration::from_millis(500 * (u64::from(attempt) + 1)),
                    };
                    tracing::debug!(
                        ticker,
                        error = %e,
                        attempt = attempt + 1,
                        "Retrying price history in {:?}",
                        backoff
                    );
                    last_error = Some(e);
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| MarketDataError::NoData(ticker.to_string())))
    }
}

#[async_trait]
impl PriceHistoryPort for YahooChartClient {
    async fn fetch_history(&self, ticker: &str) -> Result<PriceSeries, MarketDataError> {
        let body = self.fetch_with_retry(ticker).await?;
        let observations = parse_chart_response(ticker, body)?;

        if observations.len() < self.config.min_observations {
            return Err(MarketDataError::InsufficientHistory {
                ticker: ticker.to_string(),
                have: observations.len(),
                need: self.config.min_observations,
            });
        }

        let series = PriceSeries::new(ticker, observations)?;
        Ok(series.truncated(self.config.max_observations))
    }
}

/// Convert a chart payload into date-ordered, de-duplicated observations
pub fn parse_chart_response(
    ticker: &str,
    body: ChartResponse,
) -> Result<Vec<Observation>, MarketDataError> {
    if let Some(error) = body.chart.error {
        return Err(MarketDataError::Parse(format!(
            "{}: {} ({})",
            ticker, error.description, error.code
        )));
    }

    let result = body
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketDataError::NoData(ticker.to_string()))?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .ok_or_else(|| MarketDataError::NoData(ticker.to_string()))?;

    if closes.len() != result.timestamp.len() {
        return Err(MarketDataError::Parse(format!(
            "{}: {} timestamps but {} closes",
            ticker,
            result.timestamp.len(),
            closes.len()
        )));
    }

    let offset = result.meta.and_then(|m| m.gmtoffset).unwrap_or(0);

    // BTreeMap sorts by date and keeps the last bar seen for each day
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (ts, close) in result.timestamp.into_iter().zip(closes) {
        let Some(close) = close.filter(|c| c.is_finite() && *c > 0.0) else {
            continue;
        };
        let date = ts
            .checked_add(offset)
            .and_then(|local| DateTime::<Utc>::from_timestamp(local, 0))
            .ok_or_else(|| MarketDataError::Parse(format!("{}: bad timestamp {}", ticker, ts)))?
            .date_naive();
        by_date.insert(date, close);
    }

    if by_date.is_empty() {
        return Err(MarketDataError::NoData(ticker.to_string()));
    }

    Ok(by_date
        .into_iter()
        .map(|(date, close)| Observation::new(date, close))
        .collect())
}

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

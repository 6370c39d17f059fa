//! Price Series
//!
//! Validated, chronologically ordered closing-price history for one instrument.
//! A series is immutable once built; a refresh replaces it wholesale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a [`PriceSeries`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Ticker symbol cannot be empty")]
    EmptyTicker,
    #[error("Invalid close {close} on {date}: must be finite and > 0")]
    InvalidClose { date: NaiveDate, close: f64 },
    #[error("Dates must be strictly increasing: {previous} followed by {next}")]
    NotIncreasing { previous: NaiveDate, next: NaiveDate },
}

/// One trading day's closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub close: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Ordered price history for a single ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    ticker: String,
    observations: Vec<Observation>,
}

impl PriceSeries {
    /// Build a series, rejecting empty tickers, bad closes and out-of-order dates.
    ///
    /// The observations must already be sorted; nothing is reordered here.
    pub fn new(
        ticker: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Result<Self, SeriesError> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(SeriesError::EmptyTicker);
        }

        for obs in &observations {
            if !obs.close.is_finite() || obs.close <= 0.0 {
                return Err(SeriesError::InvalidClose {
                    date: obs.date,
                    close: obs.close,
                });
            }
        }

        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::NotIncreasing {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        Ok(Self {
            ticker,
            observations,
        })
    }

    /// Keep only the most recent `max` observations
    pub fn truncated(mut self, max: usize) -> Self {
        if self.observations.len() > max {
            let excess = self.observations.len() - max;
            self.observations.drain(..excess);
        }
        self
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Closing prices in chronological order
    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    /// Dates in chronological order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Whether the series carries enough history to be analyzed
    pub fn is_eligible(&self, min_observations: usize) -> bool {
        self.observations.len() >= min_observations
    }
}

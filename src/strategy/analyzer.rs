//! Series Analyzer
//!
//! Runs statistics -> probability model -> classifier over one price series.
//! Pure and synchronous; safe to call concurrently on independent series.

use thiserror::Error;

use crate::domain::{display_name, AnalysisResult, PriceSeries};
use super::classifier::{classify_direction, classify_signal};
use super::half_life::estimate_half_life;
use super::params::AnalysisConfig;
use super::probability::reversion_probability;
use super::rsi::smoothed_rsi;
use super::stats::ZScoreResult;

const MIN_EXPECTED_DAYS: f64 = 3.0;
const MAX_EXPECTED_DAYS: f64 = 45.0;

/// Why a series was left out of the analysis. A filtering decision, not a failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Ineligible {
    #[error("too few observations: have {have}, need {need}")]
    TooFewObservations { have: usize, need: usize },
    #[error("standard deviation {0:.6} below epsilon (constant price)")]
    DegenerateStdDev(f64),
}

/// Days until reversion: half_life * (1 + 0.5 * |z|), held to [3, 45]
pub fn expected_days_to_revert(half_life: f64, z_score: f64) -> f64 {
    (half_life * (1.0 + 0.5 * z_score.abs())).clamp(MIN_EXPECTED_DAYS, MAX_EXPECTED_DAYS)
}

/// Per-series analysis engine
#[derive(Debug, Clone, Default)]
pub struct SeriesAnalyzer {
    config: AnalysisConfig,
}

impl SeriesAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a series, or explain why it is not eligible
    pub fn analyze(&self, series: &PriceSeries) -> Result<AnalysisResult, Ineligible> {
        if !series.is_eligible(self.config.min_observations) {
            return Err(Ineligible::TooFewObservations {
                have: series.len(),
                need: self.config.min_observations,
            });
        }

        let prices = series.closes();
        let zscore = ZScoreResult::from_prices(&prices, self.config.std_epsilon).ok_or_else(|| {
            let std_dev = super::stats::mean(&prices)
                .map(|m| super::stats::population_std(&prices, m))
                .unwrap_or(0.0);
            Ineligible::DegenerateStdDev(std_dev)
        })?;

        let rsi = smoothed_rsi(&prices, self.config.rsi_period);
        let half_life = estimate_half_life(&prices);
        let probability = reversion_probability(zscore.z_score, rsi, half_life);

        Ok(AnalysisResult {
            ticker: series.ticker().to_string(),
            display_name: display_name(series.ticker()),
            current_price: zscore.current_price,
            mean_price: zscore.mean,
            std_dev: zscore.std_dev,
            z_score: zscore.z_score,
            gap: zscore.gap(),
            gap_percentage: zscore.gap_percentage(),
            rsi,
            half_life,
            expected_days_to_revert: expected_days_to_revert(half_life, zscore.z_score),
            reversion_probability: probability,
            signal_strength: classify_signal(zscore.z_score, rsi),
            direction: classify_direction(zscore.z_score),
            series: series.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Observation};
    use chrono::NaiveDate;

    fn series(ticker: &str, closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let observations = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Observation::new(start + chrono::Days::new(i as u64), c))
            .collect();
        PriceSeries::new(ticker, observations).unwrap()
    }

    #[test]
    fn test_too_short_is_ineligible() {
        let closes: Vec<f64> = (0..49).map(|i| 100.0 + (i % 5) as f64).collect();
        let result = SeriesAnalyzer::default().analyze(&series("X", &closes));
        assert_eq!(
            result.unwrap_err(),
            Ineligible::TooFewObservations { have: 49, need: 50 }
        );
    }

    #[test]
    fn test_flat_series_is_ineligible() {
        let result = SeriesAnalyzer::default().analyze(&series("FLAT", &[100.0; 60]));
        assert!(matches!(result, Err(Ineligible::DegenerateStdDev(_))));
    }

    #[test]
    fn test_decreasing_series() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 - i as f64).collect();
        let result = SeriesAnalyzer::default().analyze(&series("DOWN", &closes)).unwrap();

        // Last close 41 sits far below the mean of 70.5
        assert!(result.z_score < -1.5);
        assert_eq!(result.rsi, 5.0);
        assert_eq!(result.direction, Direction::Long);
        assert_eq!(result.half_life, 45.0);
        assert!(result.gap < 0.0);
    }

    #[test]
    fn test_fields_consistent() {
        let mut closes: Vec<f64> = (0..59)
            .map(|i| if i % 2 == 0 { 99.0 } else { 101.0 })
            .collect();
        closes.push(95.0);
        let result = SeriesAnalyzer::default().analyze(&series("AAPL", &closes)).unwrap();

        assert_eq!(result.display_name, "Apple Inc.");
        assert_eq!(result.current_price, 95.0);
        assert!((result.gap - (result.current_price - result.mean_price)).abs() < 1e-12);
        assert!((result.z_score - result.gap / result.std_dev).abs() < 1e-12);
        assert!((3.0..=60.0).contains(&result.half_life));
        assert!((3.0..=45.0).contains(&result.expected_days_to_revert));
        assert!((0.15..=0.92).contains(&result.reversion_probability));
        assert_eq!(result.series.len(), 60);
    }

    #[test]
    fn test_expected_days_bounds() {
        assert_eq!(expected_days_to_revert(3.0, 0.0), 3.0);
        assert_eq!(expected_days_to_revert(60.0, 3.0), 45.0);
        assert_eq!(expected_days_to_revert(10.0, 2.0), 20.0);
    }
}

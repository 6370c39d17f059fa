//! Analysis Parameters
//!
//! Thresholds for the screener's statistics, with the defaults the
//! ranking heuristics were tuned against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ranker::DeviationPolicy;

/// Parameter validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("min_observations must be >= 20 (regression floor), got {0}")]
    InvalidMinObservations(usize),
    #[error("rsi_period must be > 0")]
    InvalidRsiPeriod,
    #[error("std_epsilon must be > 0, got {0}")]
    InvalidStdEpsilon(f64),
    #[error("default_min_z must be >= 0, got {0}")]
    InvalidMinZ(f64),
    #[error("default_top_n must be > 0")]
    InvalidTopN,
}

/// Main analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Observations required before a series is analyzed
    pub min_observations: usize,
    /// RSI smoothing period (alpha = 1 / period)
    pub rsi_period: usize,
    /// Std-dev below this marks a series as effectively constant
    pub std_epsilon: f64,
    /// Which side(s) of the mean pass the deviation threshold
    pub deviation_policy: DeviationPolicy,
    /// Threshold used when a request does not supply one
    pub default_min_z: f64,
    /// Result count used when a request does not supply one
    pub default_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_observations: 50,
            rsi_period: 14,
            std_epsilon: 0.01,
            deviation_policy: DeviationPolicy::OversoldOnly,
            default_min_z: 1.5,
            default_top_n: 10,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with a different deviation policy
    pub fn with_policy(mut self, policy: DeviationPolicy) -> Self {
        self.deviation_policy = policy;
        self
    }

    /// Create a new config with a different observation floor
    pub fn with_min_observations(mut self, min: usize) -> Self {
        self.min_observations = min;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.min_observations < 20 {
            return Err(ParamsError::InvalidMinObservations(self.min_observations));
        }
        if self.rsi_period == 0 {
            return Err(ParamsError::InvalidRsiPeriod);
        }
        if self.std_epsilon <= 0.0 {
            return Err(ParamsError::InvalidStdEpsilon(self.std_epsilon));
        }
        if self.default_min_z < 0.0 || !self.default_min_z.is_finite() {
            return Err(ParamsError::InvalidMinZ(self.default_min_z));
        }
        if self.default_top_n == 0 {
            return Err(ParamsError::InvalidTopN);
        }
        Ok(())
    }
}

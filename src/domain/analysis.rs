//! Analysis Result Types
//!
//! Derived, never-persisted view of one instrument: descriptive statistics,
//! deviation, momentum, reversion dynamics and the synthesized signal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::price_series::PriceSeries;

/// Discrete confidence label from deviation magnitude and momentum confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
    Minimal,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStrength::Strong => f.pad("STRONG"),
            SignalStrength::Moderate => f.pad("MODERATE"),
            SignalStrength::Weak => f.pad("WEAK"),
            SignalStrength::Minimal => f.pad("MINIMAL"),
        }
    }
}

/// Expected direction of the reversion trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Price below its mean, expected to rise
    Long,
    /// Price at or above its mean, expected to fall
    Short,
}

impl Direction {
    /// Direction is purely the sign of the z-score
    pub fn from_z_score(z_score: f64) -> Self {
        if z_score < 0.0 {
            Direction::Long
        } else {
            Direction::Short
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.pad("LONG"),
            Direction::Short => f.pad("SHORT"),
        }
    }
}

/// Full analysis of one price series
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub ticker: String,
    /// Company name from the lookup table, or the ticker itself
    pub display_name: String,
    pub current_price: f64,
    pub mean_price: f64,
    /// Population standard deviation over the full window
    pub std_dev: f64,
    pub z_score: f64,
    /// current_price - mean_price
    pub gap: f64,
    /// gap / mean_price * 100
    pub gap_percentage: f64,
    /// Smoothed RSI in [5, 95]
    pub rsi: f64,
    /// Days for half of a deviation to decay, in [3, 60]
    pub half_life: f64,
    /// In [3, 45]
    pub expected_days_to_revert: f64,
    /// In [0.15, 0.92]
    pub reversion_probability: f64,
    pub signal_strength: SignalStrength,
    pub direction: Direction,
    /// The series the result was computed from, kept for charting
    pub series: PriceSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_z_score(-0.01), Direction::Long);
        assert_eq!(Direction::from_z_score(0.0), Direction::Short);
        assert_eq!(Direction::from_z_score(2.5), Direction::Short);
    }

    #[test]
    fn test_labels_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&SignalStrength::Strong).unwrap(), "\"STRONG\"");
        assert_eq!(serde_json::to_string(&Direction::Long).unwrap(), "\"LONG\"");
        assert_eq!(SignalStrength::Minimal.to_string(), "MINIMAL");
    }

    #[test]
    fn test_labels_honor_width() {
        assert_eq!(format!("[{:<9}]", SignalStrength::Weak), "[WEAK     ]");
        assert_eq!(format!("[{:<5}]", Direction::Long), "[LONG ]");
        assert_eq!(format!("[{:>6}]", Direction::Short), "[ SHORT]");
    }
}

//! Descriptive Statistics
//!
//! Mean, population standard deviation and z-score over a full price window.
//!
//! Z-Score Formula: z = (current_price - mean) / std_dev
//!
//! Negative z means price sits below its own historical mean (oversold),
//! positive means above (overbought).

/// Result of z-score calculation over a window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreResult {
    /// Current z-score value
    pub z_score: f64,
    /// Mean over the window
    pub mean: f64,
    /// Population standard deviation over the window
    pub std_dev: f64,
    /// Last price in the window
    pub current_price: f64,
}

impl ZScoreResult {
    /// Compute the z-score of the last price against the whole window.
    ///
    /// Returns `None` for an empty window or when std-dev is below `epsilon`
    /// (an effectively constant series has no meaningful deviation).
    pub fn from_prices(prices: &[f64], epsilon: f64) -> Option<Self> {
        let current_price = *prices.last()?;
        let mean = mean(prices)?;
        let std_dev = population_std(prices, mean);

        if std_dev < epsilon {
            return None;
        }

        Some(Self {
            z_score: (current_price - mean) / std_dev,
            mean,
            std_dev,
            current_price,
        })
    }

    /// current_price - mean
    pub fn gap(&self) -> f64 {
        self.current_price - self.mean
    }

    /// Gap as a percentage of the mean
    pub fn gap_percentage(&self) -> f64 {
        self.gap() / self.mean * 100.0
    }
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}

/// Population (divide by n) standard deviation around a precomputed mean
pub fn population_std(prices: &[f64], mean: f64) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    let variance = prices
        .iter()
        .map(|&price| {
            let diff = price - mean;
            diff * diff
        })
        .sum::<f64>()
        / prices.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_population_std() {
        let prices = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&prices).unwrap();
        assert_relative_eq!(m, 5.0);
        // Population std of this textbook sample is exactly 2
        assert_relative_eq!(population_std(&prices, m), 2.0);
    }

    #[test]
    fn test_empty_window() {
        assert!(mean(&[]).is_none());
        assert!(ZScoreResult::from_prices(&[], 0.01).is_none());
    }

    #[test]
    fn test_constant_series_rejected() {
        let prices = [100.0; 60];
        assert!(ZScoreResult::from_prices(&prices, 0.01).is_none());
    }

    #[test]
    fn test_zscore_sign() {
        let mut prices = vec![100.0; 9];
        prices.push(90.0);
        let result = ZScoreResult::from_prices(&prices, 0.01).unwrap();
        assert!(result.z_score <= -2.0);
        assert!(result.gap() < 0.0);

        let mut prices = vec![100.0; 9];
        prices.push(110.0);
        let result = ZScoreResult::from_prices(&prices, 0.01).unwrap();
        assert!(result.z_score >= 2.0);
        assert!(result.gap() > 0.0);
    }

    #[test]
    fn test_zscore_value() {
        let prices = [100.0, 101.0, 102.0, 103.0, 104.0, 106.0, 107.0, 108.0, 109.0, 110.0];
        let result = ZScoreResult::from_prices(&prices, 0.01).unwrap();
        assert_relative_eq!(result.mean, 105.0);
        assert_relative_eq!(result.z_score, 5.0 / result.std_dev);
        assert_relative_eq!(result.gap_percentage(), 5.0 / 105.0 * 100.0);
    }

    #[test]
    fn test_gap_fields() {
        let result = ZScoreResult {
            z_score: -2.5,
            mean: 100.0,
            std_dev: 2.0,
            current_price: 95.0,
        };

        assert_eq!(result.gap(), -5.0);
        assert_relative_eq!(result.gap_percentage(), -5.0);
    }
}

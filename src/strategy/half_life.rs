//! Mean Reversion Half-Life
//!
//! Discrete Ornstein-Uhlenbeck fit by ordinary least squares:
//!
//!   dp_t = a + b * p_{t-1} + e_t,   dp_t = p_t - p_{t-1}
//!
//! b < 0 means deviations decay; the half-life is then
//!
//!   t_1/2 = -ln(2) / b
//!
//! clamped to [3, 60] days. A non-negative slope (trending, not reverting)
//! yields the trending fallback; short or singular inputs yield the
//! degenerate fallback.

/// Shortest half-life reported
pub const MIN_HALF_LIFE: f64 = 3.0;
/// Longest half-life reported
pub const MAX_HALF_LIFE: f64 = 60.0;
/// Returned when the fitted slope is >= 0
pub const TRENDING_HALF_LIFE: f64 = 45.0;
/// Returned when the series is too short or the fit is singular
pub const DEGENERATE_HALF_LIFE: f64 = 30.0;
/// Observations needed before a regression is attempted
pub const MIN_REGRESSION_SAMPLES: usize = 20;
/// Lagged-level variance below this makes the normal equations singular
const MIN_LEVEL_VARIANCE: f64 = 1e-12;

/// Outcome of the half-life regression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HalfLifeFit {
    /// Negative slope, finite half-life (already clamped)
    Reverting { slope: f64, half_life: f64 },
    /// Slope >= 0: no detectable reversion
    Trending { slope: f64 },
    /// Too few samples or a singular system
    Degenerate,
}

impl HalfLifeFit {
    /// Half-life in days, substituting the fallbacks
    pub fn half_life(&self) -> f64 {
        match self {
            HalfLifeFit::Reverting { half_life, .. } => *half_life,
            HalfLifeFit::Trending { .. } => TRENDING_HALF_LIFE,
            HalfLifeFit::Degenerate => DEGENERATE_HALF_LIFE,
        }
    }
}

/// Fit the lag-1 regression over the full window
pub fn fit_half_life(prices: &[f64]) -> HalfLifeFit {
    if prices.len() < MIN_REGRESSION_SAMPLES {
        return HalfLifeFit::Degenerate;
    }

    let Some(slope) = ols_slope(prices) else {
        return HalfLifeFit::Degenerate;
    };

    if slope >= 0.0 {
        return HalfLifeFit::Trending { slope };
    }

    let half_life = -std::f64::consts::LN_2 / slope;
    if !half_life.is_finite() {
        return HalfLifeFit::Degenerate;
    }

    HalfLifeFit::Reverting {
        slope,
        half_life: half_life.clamp(MIN_HALF_LIFE, MAX_HALF_LIFE),
    }
}

/// Half-life in days with fallbacks applied
pub fn estimate_half_life(prices: &[f64]) -> f64 {
    fit_half_life(prices).half_life()
}

/// Slope of dp_t on p_{t-1} (with intercept) using centered sums
fn ols_slope(prices: &[f64]) -> Option<f64> {
    let lagged = &prices[..prices.len() - 1];
    let diffs: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let n = lagged.len() as f64;

    let mean_x = lagged.iter().sum::<f64>() / n;
    let mean_y = diffs.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in lagged.iter().zip(&diffs) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx / n < MIN_LEVEL_VARIANCE {
        return None;
    }

    let slope = sxy / sxx;
    slope.is_finite().then_some(slope)
}

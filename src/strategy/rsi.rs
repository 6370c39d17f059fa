//! Smoothed Relative Strength Index
//!
//! Day-over-day deltas are split into gains and losses, seeded from the
//! first delta, then exponentially smoothed with alpha = 1 / period across
//! every remaining delta:
//!
//!   avg = alpha * value + (1 - alpha) * avg
//!   RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//!
//! The reading is clamped to [5, 95].

pub const RSI_FLOOR: f64 = 5.0;
pub const RSI_CEILING: f64 = 95.0;
/// Reading returned when there is no momentum information
pub const RSI_NEUTRAL: f64 = 50.0;
/// Smoothed losses below this count as "no losses"
const MIN_AVG_LOSS: f64 = 1e-4;

/// Compute the smoothed RSI over the whole price window.
///
/// Returns 50 for windows shorter than `period + 1`. When smoothed losses
/// vanish the series is all-gain (95) or flat (50).
pub fn smoothed_rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return RSI_NEUTRAL;
    }

    let alpha = 1.0 / period as f64;
    let mut deltas = prices.windows(2).map(|w| w[1] - w[0]);

    // Length check above guarantees at least one delta
    let Some(first) = deltas.next() else {
        return RSI_NEUTRAL;
    };
    let (mut avg_gain, mut avg_loss) = split(first);

    for delta in deltas {
        let (gain, loss) = split(delta);
        avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
    }

    if avg_loss < MIN_AVG_LOSS {
        return if avg_gain > 0.0 { RSI_CEILING } else { RSI_NEUTRAL };
    }

    let rsi = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
    rsi.clamp(RSI_FLOOR, RSI_CEILING)
}

/// (gain, loss) for one delta, both non-negative
fn split(delta: f64) -> (f64, f64) {
    if delta > 0.0 {
        (delta, 0.0)
    } else {
        (0.0, -delta)
    }
}

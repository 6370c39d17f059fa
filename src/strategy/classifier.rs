//! Signal Classifier
//!
//! Order-sensitive threshold ladder on (|z|, sign of z, RSI).

use crate::domain::{Direction, SignalStrength};

/// Classify deviation plus momentum into a strength label.
///
/// 1. |z| > 2.0 with RSI confirming the side  -> STRONG
/// 2. |z| > 1.8 with RSI outside 40..60        -> MODERATE
/// 3. |z| > 1.5                                -> WEAK
/// 4. otherwise                                -> MINIMAL
pub fn classify_signal(z_score: f64, rsi: f64) -> SignalStrength {
    let abs_z = z_score.abs();
    let confirmed = (z_score < 0.0 && rsi < 35.0) || (z_score > 0.0 && rsi > 65.0);

    if abs_z > 2.0 && confirmed {
        SignalStrength::Strong
    } else if abs_z > 1.8 && (rsi < 40.0 || rsi > 60.0) {
        SignalStrength::Moderate
    } else if abs_z > 1.5 {
        SignalStrength::Weak
    } else {
        SignalStrength::Minimal
    }
}

/// Negative z -> LONG, otherwise SHORT
pub fn classify_direction(z_score: f64) -> Direction {
    Direction::from_z_score(z_score)
}

//! Reversion Probability Model
//!
//! Blends three signals into one bounded heuristic probability:
//! - z-probability: monotone, saturating transform of |z| into [0.4, 0.8]
//! - RSI-probability: piecewise, rising past the 30/70 bands
//! - half-life-probability: faster historical reversion scores higher
//!
//! Weighted 35/35/30, scaled by a z/RSI agreement multiplier and clamped
//! to [0.15, 0.92]. This is a ranking signal, not a calibrated forecast.

use statrs::function::erf::erf;

pub const PROBABILITY_FLOOR: f64 = 0.15;
pub const PROBABILITY_CEILING: f64 = 0.92;

const Z_WEIGHT: f64 = 0.35;
const RSI_WEIGHT: f64 = 0.35;
const HALF_LIFE_WEIGHT: f64 = 0.30;

/// Horizon (days) against which the half-life decay is measured
const HALF_LIFE_HORIZON_DAYS: f64 = 30.0;
const HALF_LIFE_PROB_FLOOR: f64 = 0.3;
const HALF_LIFE_PROB_CEILING: f64 = 0.9;

const AGREEMENT_BOOST: f64 = 1.15;
const DISAGREEMENT_PENALTY: f64 = 0.85;

/// Standard normal CDF: Phi(x) = 0.5 * (1 + erf(x / sqrt(2)))
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// 0.4 + 0.4 * (2 * Phi(|z|) - 1), ranging over [0.4, 0.8)
pub fn z_probability(z_score: f64) -> f64 {
    0.4 + 0.4 * (2.0 * normal_cdf(z_score.abs()) - 1.0)
}

/// Deep oversold/overbought readings add up to +0.4 over 30 points past
/// the band; the neutral band scores 0.3..0.5 by distance from 50.
pub fn rsi_probability(rsi: f64) -> f64 {
    if rsi < 30.0 {
        0.5 + 0.4 * (30.0 - rsi) / 30.0
    } else if rsi > 70.0 {
        0.5 + 0.4 * (rsi - 70.0) / 30.0
    } else {
        0.3 + 0.2 * (rsi - 50.0).abs().min(20.0) / 20.0
    }
}

/// Fraction of a deviation expected to decay within the 30-day horizon,
/// 1 - 2^(-30 / half_life), held to [0.3, 0.9].
pub fn half_life_probability(half_life: f64) -> f64 {
    if half_life.is_nan() || half_life <= 0.0 {
        return HALF_LIFE_PROB_FLOOR;
    }
    let decayed = 1.0 - (-HALF_LIFE_HORIZON_DAYS / half_life).exp2();
    decayed.clamp(HALF_LIFE_PROB_FLOOR, HALF_LIFE_PROB_CEILING)
}

/// 1.15 when z and RSI point the same way, 0.85 when they contradict
pub fn agreement_multiplier(z_score: f64, rsi: f64) -> f64 {
    let agree = (z_score < 0.0 && rsi < 40.0) || (z_score > 0.0 && rsi > 60.0);
    let disagree = (z_score < 0.0 && rsi > 60.0) || (z_score > 0.0 && rsi < 40.0);

    if agree {
        AGREEMENT_BOOST
    } else if disagree {
        DISAGREEMENT_PENALTY
    } else {
        1.0
    }
}

/// Blended probability that price reverts toward its mean
pub fn reversion_probability(z_score: f64, rsi: f64, half_life: f64) -> f64 {
    let blend = z_probability(z_score) * Z_WEIGHT
        + rsi_probability(rsi) * RSI_WEIGHT
        + half_life_probability(half_life) * HALF_LIFE_WEIGHT;

    let probability = blend * agreement_multiplier(z_score, rsi);
    if probability.is_nan() {
        return PROBABILITY_FLOOR;
    }
    probability.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

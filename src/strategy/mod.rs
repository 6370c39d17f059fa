//! Strategy Layer - Mean Reversion Analysis Engine
//!
//! Turns a per-instrument price history into ranked reversion candidates:
//! - `stats`: mean, population std-dev, z-score
//! - `rsi`: smoothed relative strength index
//! - `half_life`: OLS decay-rate estimate (discrete OU model)
//! - `probability`: heuristic blend of the three into one bounded probability
//! - `classifier`: STRONG / MODERATE / WEAK / MINIMAL ladder and direction
//! - `analyzer`: per-series pipeline
//! - `ranker`: deviation filter, composite score, top-N selection
//!
//! Everything here is pure and synchronous.

pub mod params;
pub mod stats;
pub mod rsi;
pub mod half_life;
pub mod probability;
pub mod classifier;
pub mod analyzer;
pub mod ranker;

pub use params::{AnalysisConfig, ParamsError};
pub use stats::ZScoreResult;
pub use rsi::smoothed_rsi;
pub use half_life::{fit_half_life, estimate_half_life, HalfLifeFit};
pub use probability::reversion_probability;
pub use classifier::{classify_signal, classify_direction};
pub use analyzer::{SeriesAnalyzer, Ineligible, expected_days_to_revert};
pub use ranker::{
    CandidateRanker, DeviationPolicy, RankedCandidate, RankingOutcome, check_min_z, composite_score,
};

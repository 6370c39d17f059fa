//! Candidate Ranker
//!
//! Analyzes every cached series, drops ineligible ones and those failing the
//! deviation threshold, scores the rest and keeps the top N.
//!
//! composite_score = probability * (1 + |z| / 3)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{AnalysisResult, PriceSeries};
use super::analyzer::SeriesAnalyzer;

/// Which deviations pass the `min_z` threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationPolicy {
    /// Keep only z <= -min_z (LONG-only candidates)
    #[default]
    OversoldOnly,
    /// Keep |z| >= min_z on either side
    TwoSided,
}

impl DeviationPolicy {
    pub fn passes(&self, z_score: f64, min_z: f64) -> bool {
        match self {
            DeviationPolicy::OversoldOnly => z_score <= -min_z,
            DeviationPolicy::TwoSided => z_score.abs() >= min_z,
        }
    }
}

impl fmt::Display for DeviationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviationPolicy::OversoldOnly => f.pad("oversold_only"),
            DeviationPolicy::TwoSided => f.pad("two_sided"),
        }
    }
}

impl FromStr for DeviationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "oversold_only" | "oversold" | "one_sided" => Ok(DeviationPolicy::OversoldOnly),
            "two_sided" | "both" => Ok(DeviationPolicy::TwoSided),
            other => Err(format!(
                "unknown deviation policy '{}': expected oversold_only or two_sided",
                other
            )),
        }
    }
}

/// Accept a deviation threshold only if it is a finite, non-negative number
pub fn check_min_z(min_z: f64) -> Result<f64, String> {
    if min_z.is_finite() && min_z >= 0.0 {
        Ok(min_z)
    } else {
        Err(format!("min_z_score must be a non-negative number, got {}", min_z))
    }
}

/// Ranking key rewarding both confidence and deviation magnitude
pub fn composite_score(probability: f64, z_score: f64) -> f64 {
    probability * (1.0 + z_score.abs() / 3.0)
}

/// An analysis result together with its ranking key
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub analysis: AnalysisResult,
    pub composite_score: f64,
}

/// What a ranking pass produced
#[derive(Debug, Clone, Default)]
pub struct RankingOutcome {
    /// Top N, sorted by descending composite score
    pub candidates: Vec<RankedCandidate>,
    /// Series passing the threshold before truncation
    pub candidates_found: usize,
    /// Series successfully analyzed
    pub analyzed: usize,
    /// Series skipped as too short or constant
    pub ineligible: usize,
}

/// Filters, scores and sorts analysis results
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    analyzer: SeriesAnalyzer,
}

impl CandidateRanker {
    pub fn new(analyzer: SeriesAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &SeriesAnalyzer {
        &self.analyzer
    }

    /// Rank every series; ties keep iteration order
    pub fn rank<'a, I>(
        &self,
        series: I,
        min_z: f64,
        top_n: usize,
        policy: DeviationPolicy,
    ) -> RankingOutcome
    where
        I: IntoIterator<Item = &'a PriceSeries>,
    {
        let mut outcome = RankingOutcome::default();
        let mut passing = Vec::new();

        for s in series {
            let analysis = match self.analyzer.analyze(s) {
                Ok(analysis) => analysis,
                Err(reason) => {
                    tracing::debug!(ticker = s.ticker(), %reason, "Skipping series");
                    outcome.ineligible += 1;
                    continue;
                }
            };
            outcome.analyzed += 1;

            if !policy.passes(analysis.z_score, min_z) {
                continue;
            }

            let score = composite_score(analysis.reversion_probability, analysis.z_score);
            passing.push(RankedCandidate {
                analysis,
                composite_score: score,
            });
        }

        // Stable sort keeps iteration order among equal scores
        passing.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        outcome.candidates_found = passing.len();
        passing.truncate(top_n);
        outcome.candidates = passing;
        outcome
    }
}

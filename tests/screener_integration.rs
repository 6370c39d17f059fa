//! Screener Integration Tests
//!
//! End-to-end checks of the analysis pipeline and the refresh coordinator:
//! 1. Statistical bounds over many random series
//! 2. Reference scenarios (flat, strictly decreasing, noisy sine)
//! 3. Coordinator refresh + ranking against an in-memory provider
//!
//! All tests are deterministic (seeded RNG, no network).

use std::sync::Arc;
use std::time::Duration;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_test::{assert_err, assert_ok};

use screener::application::{AnalyzeRequest, CoordinatorError, PacingConfig, RefreshCoordinator};
use screener::config::load_config;
use screener::domain::{Direction, Observation, PriceSeries};
use screener::ports::{MarketDataError, StaticPriceHistory};
use screener::strategy::{
    fit_half_life, AnalysisConfig, CandidateRanker, DeviationPolicy, HalfLifeFit, Ineligible,
    SeriesAnalyzer,
};

// ============================================================================
// Test Fixtures
// ============================================================================

fn series(ticker: &str, closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let observations = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Observation::new(start + chrono::Days::new(i as u64), close))
        .collect();
    PriceSeries::new(ticker, observations).unwrap()
}

/// 59 closes oscillating around 100, then `last`
fn oscillating_then(ticker: &str, last: f64) -> PriceSeries {
    let mut closes: Vec<f64> = (0..59)
        .map(|i| if i % 2 == 0 { 99.0 } else { 101.0 })
        .collect();
    closes.push(last);
    series(ticker, &closes)
}

fn random_walk(rng: &mut StdRng, len: usize) -> Vec<f64> {
    let mut price: f64 = rng.gen_range(20.0..500.0);
    (0..len)
        .map(|_| {
            price *= 1.0 + rng.gen_range(-0.03..0.03);
            price
        })
        .collect()
}

fn fast_pacing() -> PacingConfig {
    PacingConfig {
        batch: 5,
        pause: Duration::from_millis(1),
    }
}

// ============================================================================
// Statistical bounds
// ============================================================================

#[test]
fn test_bounds_hold_for_random_series() {
    let mut rng = StdRng::seed_from_u64(7);
    let analyzer = SeriesAnalyzer::default();

    for i in 0..200 {
        let len = rng.gen_range(50..=100);
        let closes = random_walk(&mut rng, len);
        let analysis = analyzer
            .analyze(&series(&format!("T{}", i), &closes))
            .unwrap();

        assert!((5.0..=95.0).contains(&analysis.rsi), "rsi {}", analysis.rsi);
        assert!(
            (0.15..=0.92).contains(&analysis.reversion_probability),
            "probability {}",
            analysis.reversion_probability
        );
        assert!((3.0..=60.0).contains(&analysis.half_life), "half-life {}", analysis.half_life);
        assert!((3.0..=45.0).contains(&analysis.expected_days_to_revert));
        assert_eq!(analysis.direction == Direction::Long, analysis.z_score < 0.0);
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_flat_series_excluded() {
    let flat = series("FLAT", &[100.0; 60]);
    let analyzer = SeriesAnalyzer::default();
    assert!(matches!(
        analyzer.analyze(&flat),
        Err(Ineligible::DegenerateStdDev(_))
    ));

    let ranker = CandidateRanker::new(analyzer);
    let outcome = ranker.rank([&flat], 0.0, 10, DeviationPolicy::TwoSided);
    assert!(outcome.candidates.is_empty());
    assert_eq!(outcome.ineligible, 1);
}

#[test]
fn test_strictly_decreasing_series() {
    let closes: Vec<f64> = (41..=100).rev().map(f64::from).collect();
    assert_eq!(closes.len(), 60);

    let analysis = SeriesAnalyzer::default()
        .analyze(&series("DOWN", &closes))
        .unwrap();

    // Last close 41 sits far below the mean of 70.5
    assert!(analysis.z_score < -1.5);
    assert_eq!(analysis.direction, Direction::Long);
    assert_relative_eq!(analysis.rsi, 5.0);
    // Constant daily change: zero slope, no detectable reversion
    assert_relative_eq!(analysis.half_life, 45.0);
}

#[test]
fn test_noisy_sine_resolves_half_life() {
    let mut rng = StdRng::seed_from_u64(42);
    let closes: Vec<f64> = (0..100)
        .map(|t| 100.0 + 5.0 * (t as f64 / 5.0).sin() + rng.gen_range(-1.5..1.5))
        .collect();

    let fit = fit_half_life(&closes);
    match fit {
        HalfLifeFit::Reverting { slope, half_life } => {
            assert!(slope < 0.0);
            assert!((3.0..=60.0).contains(&half_life));
        }
        other => panic!("expected a reverting fit, got {:?}", other),
    }
}

// ============================================================================
// Coordinator end-to-end
// ============================================================================

#[tokio::test]
async fn test_top_five_of_eight_passing() {
    let mut provider = StaticPriceHistory::new();
    let mut tickers = Vec::new();

    for i in 0..8 {
        let ticker = format!("DIP{}", i);
        provider = provider.with_series(oscillating_then(&ticker, 90.0 + i as f64));
        tickers.push(ticker);
    }
    for i in 0..12 {
        let ticker = format!("FLAT{}", i);
        provider = provider.with_series(oscillating_then(&ticker, 100.0));
        tickers.push(ticker);
    }

    let coordinator = RefreshCoordinator::new(Arc::new(provider), tickers, AnalysisConfig::default())
        .with_pacing(fast_pacing());
    let report = assert_ok!(coordinator.refresh_now().await);
    assert_eq!(report.loaded, 20);

    let outcome = assert_ok!(coordinator.analyze(AnalyzeRequest {
        min_z: Some(1.5),
        top_n: Some(5),
        policy: None,
    }));

    assert_eq!(outcome.analyzed, 20);
    assert_eq!(outcome.candidates_found, 8);
    assert_eq!(outcome.candidates.len(), 5);
    for pair in outcome.candidates.windows(2) {
        assert!(pair[0].composite_score >= pair[1].composite_score);
    }
    for candidate in &outcome.candidates {
        assert!(candidate.analysis.z_score <= -1.5);
        assert_eq!(candidate.analysis.direction, Direction::Long);
    }
    // Deepest dip ranks first
    assert_eq!(outcome.candidates[0].analysis.ticker, "DIP0");
}

#[tokio::test]
async fn test_partial_failures_do_not_abort_refresh() {
    let provider = StaticPriceHistory::new()
        .with_series(oscillating_then("AAA", 95.0))
        .with_error("BBB", MarketDataError::Status { ticker: "BBB".into(), status: 503 })
        .with_series(oscillating_then("CCC", 105.0));

    let coordinator = RefreshCoordinator::new(
        Arc::new(provider.clone()),
        vec!["AAA".into(), "BBB".into(), "CCC".into(), "DDD".into()],
        AnalysisConfig::default().with_policy(DeviationPolicy::TwoSided),
    )
    .with_pacing(fast_pacing());

    assert_eq!(
        coordinator.analyze(AnalyzeRequest::default()).unwrap_err(),
        CoordinatorError::EmptyCache
    );

    let report = assert_ok!(coordinator.refresh_now().await);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(provider.get_calls(), vec!["AAA", "BBB", "CCC", "DDD"]);

    let status = coordinator.status();
    assert!(!status.in_progress);
    assert_eq!(status.completed, 2);
    assert_eq!(status.failed, 2);

    let outcome = assert_ok!(coordinator.analyze(AnalyzeRequest::default()));
    let tickers: Vec<&str> = outcome
        .candidates
        .iter()
        .map(|c| c.analysis.ticker.as_str())
        .collect();
    assert_eq!(tickers.len(), 2);
    assert!(tickers.contains(&"AAA"));
    assert!(tickers.contains(&"CCC"));
}

#[tokio::test]
async fn test_refresh_rejected_while_running() {
    let provider = StaticPriceHistory::new().with_series(oscillating_then("AAA", 95.0));
    let coordinator = RefreshCoordinator::new(
        Arc::new(provider),
        vec!["AAA".into()],
        AnalysisConfig::default(),
    );

    assert_ok!(coordinator.start_refresh());
    // The spawned task cannot have finished without yielding
    assert_err!(coordinator.start_refresh());
}

#[test]
fn test_shipped_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/screener.toml");
    let config = load_config(path).unwrap();
    assert_eq!(config.analysis, AnalysisConfig::default());
    assert_eq!(config.server.port, 5000);
    assert!(config.universe.tickers.is_empty());
}

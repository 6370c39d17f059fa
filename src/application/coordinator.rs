//! Refresh Coordinator
//!
//! Owns the ticker -> PriceSeries cache and the fetch status, runs at most
//! one background refresh at a time, and serves ranking requests against
//! the current cache snapshot.
//!
//! The cache is an `Arc<PriceCache>` behind a lock. Readers clone the `Arc`
//! and release the lock immediately; a refresh builds a brand-new map and
//! publishes it with a single write. A reader therefore sees either the whole
//! old cache or the whole new one.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

use crate::domain::{FetchStatus, PriceSeries};
use crate::ports::market_data::{MarketDataError, PriceHistoryPort};
use crate::strategy::{AnalysisConfig, CandidateRanker, DeviationPolicy, RankingOutcome, SeriesAnalyzer};

/// Ticker -> series, iterated in ticker order
pub type PriceCache = BTreeMap<String, PriceSeries>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinatorError {
    #[error("Fetch already in progress")]
    AlreadyInProgress,
    #[error("No data loaded. Trigger a fetch first.")]
    EmptyCache,
}

/// Result of fetching one ticker during a refresh
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(PriceSeries),
    Failed(MarketDataError),
}

/// Aggregate of all per-ticker outcomes of one refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshReport {
    pub loaded: usize,
    pub failures: Vec<(String, MarketDataError)>,
}

impl RefreshReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.loaded + self.failed()
    }
}

/// Pacing between provider calls
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Pause after every `batch` tickers
    pub batch: usize,
    pub pause: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            batch: 10,
            pause: Duration::from_millis(500),
        }
    }
}

/// Parameters of one ranking request; `None` falls back to the configured defaults
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyzeRequest {
    pub min_z: Option<f64>,
    pub top_n: Option<usize>,
    pub policy: Option<DeviationPolicy>,
}

/// Releases the single-refresh flag when the refresh ends, even by panic
struct RefreshGuard {
    in_progress: Arc<AtomicBool>,
    status: Arc<RwLock<FetchStatus>>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        let mut status = self.status.write().unwrap_or_else(|e| e.into_inner());
        if status.in_progress {
            status.in_progress = false;
            status.message = "Refresh aborted".to_string();
        }
        self.in_progress.store(false, Ordering::Release);
    }
}

/// Lifecycle-scoped owner of the cache, the fetch status and the refresh task
#[derive(Clone)]
pub struct RefreshCoordinator {
    provider: Arc<dyn PriceHistoryPort>,
    universe: Arc<Vec<String>>,
    ranker: CandidateRanker,
    pacing: PacingConfig,
    cache: Arc<RwLock<Arc<PriceCache>>>,
    status: Arc<RwLock<FetchStatus>>,
    in_progress: Arc<AtomicBool>,
}

impl RefreshCoordinator {
    /// Create a coordinator over a fixed ticker universe
    pub fn new(
        provider: Arc<dyn PriceHistoryPort>,
        universe: Vec<String>,
        analysis: AnalysisConfig,
    ) -> Self {
        Self {
            provider,
            universe: Arc::new(universe),
            ranker: CandidateRanker::new(SeriesAnalyzer::new(analysis)),
            pacing: PacingConfig::default(),
            cache: Arc::new(RwLock::new(Arc::new(PriceCache::new()))),
            status: Arc::new(RwLock::new(FetchStatus::default())),
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set custom pacing
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn analysis_config(&self) -> &AnalysisConfig {
        self.ranker.analyzer().config()
    }

    /// Current cache; never a partially refreshed one
    pub fn snapshot(&self) -> Arc<PriceCache> {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&cache)
    }

    /// Number of cached series
    pub fn cache_len(&self) -> usize {
        self.snapshot().len()
    }

    /// Best-effort copy of the refresh progress
    pub fn status(&self) -> FetchStatus {
        self.status.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Start a background refresh and return the number of tickers queued.
    ///
    /// Rejected, not queued, while another refresh is running.
    pub fn start_refresh(&self) -> Result<usize, CoordinatorError> {
        let guard = self.claim()?;
        let total = self.universe.len();
        let this = self.clone();

        tokio::spawn(async move {
            this.run_refresh(guard).await;
        });

        tracing::info!(total, "Background refresh started");
        Ok(total)
    }

    /// Run a refresh to completion on the current task
    pub async fn refresh_now(&self) -> Result<RefreshReport, CoordinatorError> {
        let guard = self.claim()?;
        Ok(self.run_refresh(guard).await)
    }

    /// Rank the current cache
    pub fn analyze(&self, request: AnalyzeRequest) -> Result<RankingOutcome, CoordinatorError> {
        let cache = self.snapshot();
        if cache.is_empty() {
            return Err(CoordinatorError::EmptyCache);
        }

        let config = self.analysis_config();
        let min_z = request.min_z.unwrap_or(config.default_min_z);
        let top_n = request.top_n.unwrap_or(config.default_top_n);
        let policy = request.policy.unwrap_or(config.deviation_policy);

        let outcome = self.ranker.rank(cache.values(), min_z, top_n, policy);
        tracing::info!(
            min_z,
            top_n,
            %policy,
            analyzed = outcome.analyzed,
            ineligible = outcome.ineligible,
            found = outcome.candidates_found,
            "Ranked candidates"
        );
        Ok(outcome)
    }

    /// Take the single-refresh flag and reset the status
    fn claim(&self) -> Result<RefreshGuard, CoordinatorError> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CoordinatorError::AlreadyInProgress);
        }

        let guard = RefreshGuard {
            in_progress: Arc::clone(&self.in_progress),
            status: Arc::clone(&self.status),
        };
        self.update_status(|s| s.begin(self.universe.len()));
        Ok(guard)
    }

    fn update_status(&self, f: impl FnOnce(&mut FetchStatus)) {
        let mut status = self.status.write().unwrap_or_else(|e| e.into_inner());
        f(&mut status);
    }

    async fn fetch_one(&self, ticker: &str) -> FetchOutcome {
        match self.provider.fetch_history(ticker).await {
            Ok(series) => FetchOutcome::Loaded(series),
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    async fn run_refresh(&self, _guard: RefreshGuard) -> RefreshReport {
        let total = self.universe.len();
        let mut fresh = PriceCache::new();
        let mut report = RefreshReport::default();

        for (i, ticker) in self.universe.iter().enumerate() {
            let message = format!("Fetching {}... ({}/{})", ticker, i + 1, total);
            tracing::debug!("{}", message);
            self.update_status(|s| s.message = message);

            match self.fetch_one(ticker).await {
                FetchOutcome::Loaded(series) => {
                    fresh.insert(ticker.clone(), series);
                    report.loaded += 1;
                    self.update_status(|s| s.completed += 1);
                }
                FetchOutcome::Failed(e) => {
                    tracing::warn!(ticker = %ticker, error = %e, "Price history fetch failed");
                    report.failures.push((ticker.clone(), e));
                    self.update_status(|s| s.failed += 1);
                }
            }

            let done = i + 1;
            if self.pacing.batch > 0 && done % self.pacing.batch == 0 && done < total {
                tracing::info!(done, total, failed = report.failed(), "Refresh progress");
                tokio::time::sleep(self.pacing.pause).await;
            }
        }

        {
            let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
            *cache = Arc::new(fresh);
        }
        self.update_status(|s| s.finish());

        tracing::info!(
            loaded = report.loaded,
            failed = report.failed(),
            "Refresh complete"
        );
        report
    }
}

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::application::{AnalyzeRequest, CoordinatorError, RefreshCoordinator};
use crate::domain::{Direction, SignalStrength};
use crate::strategy::{check_min_z, DeviationPolicy, RankedCandidate};

/// Query string of `GET /api/analyze`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeQuery {
    pub min_z_score: Option<f64>,
    pub top_n: Option<usize>,
    /// `oversold_only` or `two_sided`
    pub policy: Option<String>,
}

impl AnalyzeQuery {
    fn into_request(self) -> Result<AnalyzeRequest, String> {
        let min_z = self.min_z_score.map(check_min_z).transpose()?;

        let policy = self
            .policy
            .as_deref()
            .map(str::parse::<DeviationPolicy>)
            .transpose()?;

        Ok(AnalyzeRequest {
            min_z,
            top_n: self.top_n,
            policy,
        })
    }
}

/// One ranked candidate as served to clients.
///
/// Statistics are rounded for display; `prices` and `dates` are the full window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub ticker: String,
    pub company_name: String,
    pub current_price: f64,
    pub mean_price: f64,
    pub std_dev: f64,
    pub z_score: f64,
    pub rsi: f64,
    pub gap_from_mean: f64,
    pub gap_percentage: f64,
    pub reversion_probability: f64,
    pub expected_days: f64,
    pub half_life: f64,
    pub signal_strength: SignalStrength,
    pub direction: Direction,
    pub composite_score: f64,
    pub prices: Vec<f64>,
    pub dates: Vec<String>,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl From<&RankedCandidate> for AnalysisPayload {
    fn from(candidate: &RankedCandidate) -> Self {
        let a = &candidate.analysis;
        Self {
            ticker: a.ticker.clone(),
            company_name: a.display_name.clone(),
            current_price: round_to(a.current_price, 2),
            mean_price: round_to(a.mean_price, 2),
            std_dev: round_to(a.std_dev, 2),
            z_score: round_to(a.z_score, 2),
            rsi: round_to(a.rsi, 1),
            gap_from_mean: round_to(a.gap, 2),
            gap_percentage: round_to(a.gap_percentage, 1),
            reversion_probability: round_to(a.reversion_probability, 3),
            expected_days: round_to(a.expected_days_to_revert, 1),
            half_life: round_to(a.half_life, 1),
            signal_strength: a.signal_strength,
            direction: a.direction,
            composite_score: round_to(candidate.composite_score, 3),
            prices: a.series.closes(),
            dates: a
                .series
                .dates()
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect(),
        }
    }
}

fn error_with_results(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": message.into(),
            "results": []
        })),
    )
        .into_response()
}

/// POST /api/fetch - start a background refresh
#[instrument(skip(coordinator))]
pub async fn fetch_handler(State(coordinator): State<RefreshCoordinator>) -> Response {
    match coordinator.start_refresh() {
        Ok(total) => (
            StatusCode::OK,
            Json(json!({
                "status": "started",
                "total": total
            })),
        )
            .into_response(),
        Err(e) => {
            warn!("Fetch rejected: {}", e);
            (StatusCode::OK, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// GET /api/status - refresh progress
#[instrument(skip(coordinator))]
pub async fn status_handler(State(coordinator): State<RefreshCoordinator>) -> Response {
    let status = coordinator.status();

    (
        StatusCode::OK,
        Json(json!({
            "stocks_loaded": coordinator.cache_len(),
            "last_fetch": status.last_fetch_display(),
            "fetch_in_progress": status.in_progress,
            "fetch_total": status.total,
            "fetch_completed": status.completed,
            "fetch_failed": status.failed,
            "fetch_message": status.message,
        })),
    )
        .into_response()
}

/// GET /api/analyze - ranked candidates from the current cache
#[instrument(skip(coordinator, query))]
pub async fn analyze_handler(
    State(coordinator): State<RefreshCoordinator>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
) -> Response {
    let request = match query {
        Ok(Query(query)) => match query.into_request() {
            Ok(request) => request,
            Err(message) => return error_with_results(StatusCode::BAD_REQUEST, message),
        },
        Err(rejection) => {
            return error_with_results(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    debug!(?request, "Received analyze request");

    match coordinator.analyze(request) {
        Ok(outcome) => {
            let results: Vec<AnalysisPayload> =
                outcome.candidates.iter().map(AnalysisPayload::from).collect();

            (
                StatusCode::OK,
                Json(json!({
                    "count": results.len(),
                    "candidates_found": outcome.candidates_found,
                    "results": results,
                })),
            )
                .into_response()
        }
        Err(e @ CoordinatorError::EmptyCache) => error_with_results(StatusCode::OK, e.to_string()),
        Err(e) => error_with_results(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// GET /health - liveness and cache size
pub async fn health_handler(State(coordinator): State<RefreshCoordinator>) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "stocks_loaded": coordinator.cache_len(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-2.345678, 1), -2.3);
        assert_eq!(round_to(0.56789, 3), 0.568);
    }

    #[test]
    fn test_query_validation() {
        let query = AnalyzeQuery {
            min_z_score: Some(-1.0),
            ..Default::default()
        };
        assert!(query.into_request().is_err());

        let query = AnalyzeQuery {
            policy: Some("sideways".into()),
            ..Default::default()
        };
        assert!(query.into_request().is_err());

        let query = AnalyzeQuery {
            min_z_score: Some(2.0),
            top_n: Some(3),
            policy: Some("two_sided".into()),
        };
        let request = query.into_request().unwrap();
        assert_eq!(request.min_z, Some(2.0));
        assert_eq!(request.top_n, Some(3));
        assert_eq!(request.policy, Some(DeviationPolicy::TwoSided));
    }
}

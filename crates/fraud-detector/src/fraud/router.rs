use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use super::catalog::RulesCatalog;
use super::domain::{ScoringResult, TransactionPayload};
use super::engine::ScoringEngine;
use super::problem::{render_panic, stamp_problem_path, ProblemResponse};

/// Router builder exposing the fraud check and rules endpoints.
pub fn fraud_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/fraud/check", post(check_handler))
        .route("/api/v1/fraud/rules", get(rules_handler))
        .layer(CatchPanicLayer::custom(render_panic))
        .layer(middleware::from_fn(stamp_problem_path))
        .with_state(engine)
}

pub(crate) async fn check_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<ScoringResult>, ProblemResponse> {
    let Json(payload) = payload?;
    let request = payload.validate()?;
    let result = engine.evaluate(&request);

    info!(
        transaction_id = %result.transaction_id,
        risk_score = result.risk_score,
        risk_level = result.risk_level.label(),
        "transaction scored"
    );

    Ok(Json(result))
}

pub(crate) async fn rules_handler(State(engine): State<Arc<ScoringEngine>>) -> Json<RulesCatalog> {
    Json(RulesCatalog::from_config(engine.config()))
}

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_fraud_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fraud_detector::config::AppConfig;
use fraud_detector::error::AppError;
use fraud_detector::fraud::ScoringEngine;
use fraud_detector::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    info!(
        high_risk_countries = ?config.rules.high_risk_countries(),
        night_window_start = config.rules.night_window_start(),
        night_window_end = config.rules.night_window_end(),
        "fraud rules loaded"
    );
    let engine = Arc::new(ScoringEngine::new(config.rules));

    let app = with_fraud_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fraud detector ready");

    axum::serve(listener, app).await?;
    Ok(())
}

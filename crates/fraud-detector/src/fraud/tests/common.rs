use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::{DateTime, Utc};
use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::fraud::domain::{TransactionPayload, TransactionRequest};
use crate::fraud::engine::{NightWindow, RuleConfiguration, ScoringEngine};
use crate::fraud::router::fraud_router;

pub(super) fn rules() -> RuleConfiguration {
    RuleConfiguration::new(
        ["MM", "GH", "KE", "ZA", "BR", "CY"],
        NightWindow {
            start_hour_utc: 0,
            end_hour_utc: 5,
        },
    )
}

pub(super) fn rules_with_window(start_hour_utc: u8, end_hour_utc: u8) -> RuleConfiguration {
    RuleConfiguration::new(
        ["MM", "GH"],
        NightWindow {
            start_hour_utc,
            end_hour_utc,
        },
    )
}

pub(super) fn amount(raw: &str) -> BigDecimal {
    raw.parse().expect("decimal literal")
}

pub(super) fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub(super) fn at_hour(hour: u32) -> DateTime<Utc> {
    at(&format!("2026-01-01T{hour:02}:00:00Z"))
}

/// Trusted device, low amount, domestic, midday: scores zero under `rules()`.
pub(super) fn quiet_request() -> TransactionRequest {
    TransactionRequest {
        transaction_id: "tx-1".to_string(),
        user_id: "user-1".to_string(),
        amount: BigDecimal::from(1),
        currency: "USD".to_string(),
        merchant_category: None,
        country: "US".to_string(),
        timestamp: at("2026-01-01T12:00:00Z"),
        device_trusted: true,
        payment_method: None,
        ip_address: None,
    }
}

pub(super) fn complete_payload() -> TransactionPayload {
    TransactionPayload {
        transaction_id: Some("tx-123".to_string()),
        user_id: Some("user-42".to_string()),
        amount: Some(amount("149.99")),
        currency: Some("USD".to_string()),
        merchant_category: Some("electronics".to_string()),
        country: Some("US".to_string()),
        timestamp: Some(at("2026-01-01T12:00:00Z")),
        device_trusted: Some(false),
        payment_method: Some("CARD".to_string()),
        ip_address: Some("203.0.113.7".to_string()),
    }
}

pub(super) fn router() -> axum::Router {
    fraud_router(Arc::new(ScoringEngine::new(rules())))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

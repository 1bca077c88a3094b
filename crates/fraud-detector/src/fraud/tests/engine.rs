use super::common::*;

use crate::fraud::engine::rules::score_transaction;
use crate::fraud::domain::TransactionRequest;
use crate::fraud::engine::{evaluate, evaluate_at, RiskLevel, RuleKind, ScoringEngine};

fn amount_points(raw: &str) -> u8 {
    let request = TransactionRequest {
        amount: amount(raw),
        ..quiet_request()
    };
    evaluate(&request, &rules()).risk_score
}

#[test]
fn amount_tiers_respect_exact_decimal_boundaries() {
    assert_eq!(amount_points("299"), 0);
    assert_eq!(amount_points("299.999"), 0);
    assert_eq!(amount_points("300"), 10);
    assert_eq!(amount_points("300.00"), 10);
    assert_eq!(amount_points("999"), 10);
    assert_eq!(amount_points("999.99"), 10);
    assert_eq!(amount_points("1000"), 25);
    assert_eq!(amount_points("1999"), 25);
    assert_eq!(amount_points("2000"), 35);
    assert_eq!(amount_points("1000000"), 35);
}

#[test]
fn amount_tiers_hold_beyond_fixed_width_precision() {
    assert_eq!(amount_points("299.99999999999999999999999999999"), 0);
    assert_eq!(amount_points("999.999999999999999999999999999999999"), 10);
    assert_eq!(amount_points("100000000000000000000000000000000"), 35);
    assert_eq!(amount_points("1e40"), 35);
}

#[test]
fn only_the_highest_amount_tier_is_reported() {
    let request = TransactionRequest {
        amount: amount("2500"),
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(result.reasons, vec!["High amount (>= 2000)".to_string()]);
}

#[test]
fn untrusted_device_adds_twenty_points() {
    let trusted = evaluate(&quiet_request(), &rules());
    let untrusted = evaluate(
        &TransactionRequest {
            device_trusted: false,
            ..quiet_request()
        },
        &rules(),
    );

    assert_eq!(trusted.risk_score, 0);
    assert!(trusted.reasons.is_empty());
    assert_eq!(untrusted.risk_score, 20);
    assert_eq!(untrusted.reasons, vec!["Untrusted device".to_string()]);
}

#[test]
fn high_risk_country_is_matched_verbatim() {
    let flagged = evaluate(
        &TransactionRequest {
            country: "GH".to_string(),
            ..quiet_request()
        },
        &rules(),
    );
    let lowercase = evaluate(
        &TransactionRequest {
            country: "gh".to_string(),
            ..quiet_request()
        },
        &rules(),
    );

    assert_eq!(flagged.risk_score, 25);
    assert_eq!(flagged.reasons, vec!["High-risk country: GH".to_string()]);
    assert_eq!(lowercase.risk_score, 0);
}

#[test]
fn night_window_matches_inclusive_bounds() {
    let config = rules_with_window(0, 5);
    for hour in 0..24 {
        let request = TransactionRequest {
            timestamp: at_hour(hour),
            ..quiet_request()
        };
        let expected = if hour <= 5 { 10 } else { 0 };
        assert_eq!(
            evaluate(&request, &config).risk_score,
            expected,
            "hour {hour}"
        );
    }
}

#[test]
fn night_window_wraps_past_midnight() {
    let config = rules_with_window(22, 3);
    let matching = [22, 23, 0, 1, 2, 3];
    for hour in 0..24 {
        let request = TransactionRequest {
            timestamp: at_hour(hour),
            ..quiet_request()
        };
        let expected = if matching.contains(&hour) { 10 } else { 0 };
        assert_eq!(
            evaluate(&request, &config).risk_score,
            expected,
            "hour {hour}"
        );
    }
}

#[test]
fn night_window_reason_is_zero_padded() {
    let request = TransactionRequest {
        timestamp: at("2026-01-01T02:00:00Z"),
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(
        result.reasons,
        vec!["Transaction time is unusual (02:00 UTC in 00:00-05:00 UTC)".to_string()]
    );
}

#[test]
fn timestamps_with_offsets_are_scored_in_utc() {
    let request = TransactionRequest {
        timestamp: at("2026-01-01T05:30:00+04:00"),
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(result.risk_score, 10);
    assert!(result.reasons[0].contains("(01:00 UTC"));
}

#[test]
fn mid_value_untrusted_domestic_transaction_is_medium() {
    let request = TransactionRequest {
        transaction_id: "tx-123".to_string(),
        amount: amount("1200"),
        device_trusted: false,
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(result.transaction_id, "tx-123");
    assert_eq!(result.risk_score, 45);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(
        result.reasons,
        vec![
            "High amount (>= 1000)".to_string(),
            "Untrusted device".to_string()
        ]
    );
}

#[test]
fn every_rule_triggered_scores_ninety_in_evaluation_order() {
    let request = TransactionRequest {
        amount: amount("5000"),
        device_trusted: false,
        country: "GH".to_string(),
        timestamp: at("2026-01-01T02:00:00Z"),
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(result.risk_score, 90);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.reasons.len(), 4);
    assert_eq!(result.reasons[0], "High amount (>= 2000)");
    assert_eq!(result.reasons[1], "Untrusted device");
    assert_eq!(result.reasons[2], "High-risk country: GH");
    assert!(result.reasons[3].starts_with("Transaction time is unusual"));
}

#[test]
fn score_components_carry_rule_points() {
    let request = TransactionRequest {
        amount: amount("300"),
        device_trusted: false,
        ..quiet_request()
    };

    let (components, total) = score_transaction(&request, &rules());

    let triggered: Vec<RuleKind> = components.iter().map(|component| component.rule).collect();
    assert_eq!(triggered, vec![RuleKind::AmountModerate, RuleKind::UntrustedDevice]);
    assert_eq!(total, 30);
}

#[test]
fn risk_levels_follow_band_boundaries() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let engine = ScoringEngine::new(rules());
    let request = TransactionRequest {
        amount: amount("1500"),
        country: "KE".to_string(),
        ..quiet_request()
    };
    let evaluated_at = at("2026-03-01T00:00:00Z");

    let first = evaluate_at(&request, engine.config(), evaluated_at);
    let second = evaluate_at(&request, engine.config(), evaluated_at);
    let live = engine.evaluate(&request);

    assert_eq!(first, second);
    assert_eq!(live.risk_score, first.risk_score);
    assert_eq!(live.risk_level, first.risk_level);
    assert_eq!(live.reasons, first.reasons);
}

#[test]
fn quiet_transaction_scores_zero() {
    let request = TransactionRequest {
        amount: amount("299"),
        ..quiet_request()
    };

    let result = evaluate(&request, &rules());

    assert_eq!(result.risk_score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.reasons.is_empty());
}

use bigdecimal::BigDecimal;
use chrono::Timelike;

use super::super::domain::TransactionRequest;
use super::config::RuleConfiguration;

/// Every rule that can contribute points to a transaction's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    AmountModerate,
    AmountHigh,
    AmountVeryHigh,
    UntrustedDevice,
    HighRiskCountry,
    NightWindow,
}

impl RuleKind {
    pub const ALL: [RuleKind; 6] = [
        RuleKind::AmountModerate,
        RuleKind::AmountHigh,
        RuleKind::AmountVeryHigh,
        RuleKind::UntrustedDevice,
        RuleKind::HighRiskCountry,
        RuleKind::NightWindow,
    ];

    pub fn points(self) -> u8 {
        match self {
            RuleKind::AmountModerate => 10,
            RuleKind::AmountHigh => 25,
            RuleKind::AmountVeryHigh => 35,
            RuleKind::UntrustedDevice => 20,
            RuleKind::HighRiskCountry => 25,
            RuleKind::NightWindow => 10,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RuleKind::AmountModerate => "amountModerate",
            RuleKind::AmountHigh => "amountHigh",
            RuleKind::AmountVeryHigh => "amountVeryHigh",
            RuleKind::UntrustedDevice => "untrustedDevice",
            RuleKind::HighRiskCountry => "highRiskCountry",
            RuleKind::NightWindow => "nightWindow",
        }
    }
}

/// Amount tier, listed from the highest threshold down.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AmountTier {
    pub rule: RuleKind,
    pub minimum: u32,
    pub catalog_key: &'static str,
    pub reason: &'static str,
}

pub(crate) const AMOUNT_TIERS: [AmountTier; 3] = [
    AmountTier {
        rule: RuleKind::AmountVeryHigh,
        minimum: 2000,
        catalog_key: "veryHighMin",
        reason: "High amount (>= 2000)",
    },
    AmountTier {
        rule: RuleKind::AmountHigh,
        minimum: 1000,
        catalog_key: "highMin",
        reason: "High amount (>= 1000)",
    },
    AmountTier {
        rule: RuleKind::AmountModerate,
        minimum: 300,
        catalog_key: "moderateMin",
        reason: "Moderate amount (>= 300)",
    },
];

/// One triggered rule and what it added to the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreComponent {
    pub rule: RuleKind,
    pub points: u8,
    pub reason: String,
}

impl ScoreComponent {
    fn triggered(rule: RuleKind, reason: impl Into<String>) -> Self {
        Self {
            rule,
            points: rule.points(),
            reason: reason.into(),
        }
    }
}

/// Runs the rules in their fixed order and returns the triggered components with the
/// uncapped point total.
pub(crate) fn score_transaction(
    request: &TransactionRequest,
    config: &RuleConfiguration,
) -> (Vec<ScoreComponent>, u16) {
    let components: Vec<ScoreComponent> = [
        amount_rule(&request.amount),
        device_rule(request.device_trusted),
        country_rule(&request.country, config),
        night_window_rule(request, config),
    ]
    .into_iter()
    .flatten()
    .collect();

    let total = components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();

    (components, total)
}

fn amount_rule(amount: &BigDecimal) -> Option<ScoreComponent> {
    AMOUNT_TIERS
        .iter()
        .find(|tier| *amount >= BigDecimal::from(tier.minimum))
        .map(|tier| ScoreComponent::triggered(tier.rule, tier.reason))
}

fn device_rule(device_trusted: bool) -> Option<ScoreComponent> {
    if device_trusted {
        return None;
    }
    Some(ScoreComponent::triggered(
        RuleKind::UntrustedDevice,
        "Untrusted device",
    ))
}

fn country_rule(country: &str, config: &RuleConfiguration) -> Option<ScoreComponent> {
    if !config.is_high_risk(country) {
        return None;
    }
    Some(ScoreComponent::triggered(
        RuleKind::HighRiskCountry,
        format!("High-risk country: {country}"),
    ))
}

fn night_window_rule(
    request: &TransactionRequest,
    config: &RuleConfiguration,
) -> Option<ScoreComponent> {
    let hour_utc = request.timestamp.hour();
    let window = config.night_window();
    if !window.contains(hour_utc) {
        return None;
    }

    Some(ScoreComponent::triggered(
        RuleKind::NightWindow,
        format!(
            "Transaction time is unusual ({:02}:00 UTC in {:02}:00-{:02}:00 UTC)",
            hour_utc, window.start_hour_utc, window.end_hour_utc
        ),
    ))
}

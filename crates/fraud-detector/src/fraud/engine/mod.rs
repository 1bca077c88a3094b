mod config;
mod policy;
pub(crate) mod rules;

pub use config::{NightWindow, RuleConfiguration};
pub use policy::{RiskLevel, MAX_RISK_SCORE};
pub use rules::RuleKind;

use super::domain::{ScoringResult, TransactionRequest};
use chrono::{DateTime, Utc};
use policy::cap_score;
use tracing::trace;

/// Stateless evaluator that applies the configured rules to a transaction.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: RuleConfiguration,
}

impl ScoringEngine {
    pub fn new(config: RuleConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfiguration {
        &self.config
    }

    pub fn evaluate(&self, request: &TransactionRequest) -> ScoringResult {
        evaluate(request, &self.config)
    }
}

/// Scores a validated transaction. Total over its input; `evaluated_at` is the only
/// field that varies between identical calls.
pub fn evaluate(request: &TransactionRequest, config: &RuleConfiguration) -> ScoringResult {
    evaluate_at(request, config, Utc::now())
}

pub(crate) fn evaluate_at(
    request: &TransactionRequest,
    config: &RuleConfiguration,
    evaluated_at: DateTime<Utc>,
) -> ScoringResult {
    let (components, total) = rules::score_transaction(request, config);
    let risk_score = cap_score(total);

    let reasons = components
        .into_iter()
        .map(|component| {
            trace!(
                transaction_id = %request.transaction_id,
                rule = component.rule.key(),
                points = component.points,
                "rule triggered"
            );
            component.reason
        })
        .collect();

    ScoringResult {
        transaction_id: request.transaction_id.clone(),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        reasons,
        evaluated_at,
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::engine::rules::AMOUNT_TIERS;
use super::engine::{NightWindow, RiskLevel, RuleConfiguration, RuleKind};

/// Read-only description of the active scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesCatalog {
    pub amount_thresholds: BTreeMap<String, u32>,
    pub points: BTreeMap<String, u8>,
    pub high_risk_countries: Vec<String>,
    pub night_window: NightWindow,
    pub risk_bands: BTreeMap<String, String>,
}

impl RulesCatalog {
    pub fn from_config(config: &RuleConfiguration) -> Self {
        let amount_thresholds = AMOUNT_TIERS
            .iter()
            .map(|tier| (tier.catalog_key.to_string(), tier.minimum))
            .collect();

        let points = RuleKind::ALL
            .iter()
            .map(|rule| (rule.key().to_string(), rule.points()))
            .collect();

        let risk_bands = RiskLevel::ALL
            .iter()
            .map(|level| {
                let (low, high) = level.score_range();
                (level.label().to_string(), format!("{low}-{high}"))
            })
            .collect();

        Self {
            amount_thresholds,
            points,
            high_risk_countries: config.high_risk_countries().to_vec(),
            night_window: config.night_window(),
            risk_bands,
        }
    }
}

use serde::{Deserialize, Serialize};

pub const MAX_RISK_SCORE: u8 = 100;

const MEDIUM_RISK_FLOOR: u8 = 30;
const HIGH_RISK_FLOOR: u8 = 70;

/// Risk band derived from the capped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_FLOOR {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_FLOOR {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Inclusive score range covered by the band.
    pub fn score_range(self) -> (u8, u8) {
        match self {
            RiskLevel::Low => (0, MEDIUM_RISK_FLOOR - 1),
            RiskLevel::Medium => (MEDIUM_RISK_FLOOR, HIGH_RISK_FLOOR - 1),
            RiskLevel::High => (HIGH_RISK_FLOOR, MAX_RISK_SCORE),
        }
    }
}

pub(crate) fn cap_score(total: u16) -> u8 {
    total.min(u16::from(MAX_RISK_SCORE)) as u8
}

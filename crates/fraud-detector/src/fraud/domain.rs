use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::engine::RiskLevel;

/// Transaction body exactly as submitted, before any field has been checked.
///
/// Every field is optional so that missing values surface as field errors during
/// validation rather than as opaque decoding failures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub transaction_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "exact_amount")]
    pub amount: Option<BigDecimal>,
    pub currency: Option<String>,
    pub merchant_category: Option<String>,
    pub country: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub device_trusted: Option<bool>,
    pub payment_method: Option<String>,
    pub ip_address: Option<String>,
}

/// Validated transaction handed to the scoring engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub transaction_id: String,
    pub user_id: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub merchant_category: Option<String>,
    pub country: String,
    pub timestamp: DateTime<Utc>,
    pub device_trusted: bool,
    pub payment_method: Option<String>,
    pub ip_address: Option<String>,
}

/// Scored verdict returned for a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub transaction_id: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

/// Reads the amount from the number's source text (or a JSON string) so no digits are
/// lost to a fixed-width representation.
fn exact_amount<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text,
        Some(other) => {
            return Err(de::Error::custom(format!(
                "expected a decimal amount, found {other}"
            )))
        }
    };

    raw.parse::<BigDecimal>().map(Some).map_err(de::Error::custom)
}

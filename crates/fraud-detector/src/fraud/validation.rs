use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{TransactionPayload, TransactionRequest};

/// Smallest accepted amount, 0.01.
fn minimum_accepted_amount() -> BigDecimal {
    BigDecimal::new(1.into(), 2)
}

/// Blank means nothing but characters at or below U+0020, the set Java's `String.trim`
/// strips. Wider Unicode spaces such as U+00A0 count as content.
fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c <= '\u{20}')
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Raised when a payload cannot be turned into a [`TransactionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .field_errors.len())]
pub struct ValidationFailure {
    pub field_errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_errors.iter().map(|error| error.field.as_str())
    }
}

impl TransactionPayload {
    /// Checks every required field and reports all violations at once, at most one per
    /// field, in declaration order.
    pub fn validate(self) -> Result<TransactionRequest, ValidationFailure> {
        let mut violations = Violations::default();

        let transaction_id = violations.not_blank("transactionId", self.transaction_id);
        let user_id = violations.not_blank("userId", self.user_id);
        let amount = violations.minimum_amount("amount", self.amount);
        let currency = violations.fixed_length("currency", self.currency, 3);
        let country = violations.fixed_length("country", self.country, 2);
        let timestamp: Option<DateTime<Utc>> = violations.present("timestamp", self.timestamp);
        let device_trusted = violations.present("deviceTrusted", self.device_trusted);

        match (
            transaction_id,
            user_id,
            amount,
            currency,
            country,
            timestamp,
            device_trusted,
        ) {
            (
                Some(transaction_id),
                Some(user_id),
                Some(amount),
                Some(currency),
                Some(country),
                Some(timestamp),
                Some(device_trusted),
            ) => Ok(TransactionRequest {
                transaction_id,
                user_id,
                amount,
                currency,
                merchant_category: self.merchant_category,
                country,
                timestamp,
                device_trusted,
                payment_method: self.payment_method,
                ip_address: self.ip_address,
            }),
            _ => Err(ValidationFailure {
                field_errors: violations.0,
            }),
        }
    }
}

#[derive(Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn reject<T>(&mut self, field: &str, message: impl Into<String>) -> Option<T> {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
        None
    }

    fn present<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        match value {
            Some(value) => Some(value),
            None => self.reject(field, "must not be null"),
        }
    }

    fn not_blank(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !is_blank(&value) => Some(value),
            _ => self.reject(field, "must not be blank"),
        }
    }

    fn fixed_length(&mut self, field: &str, value: Option<String>, length: usize) -> Option<String> {
        let value = self.not_blank(field, value)?;
        // Lengths are counted in UTF-16 code units.
        if value.encode_utf16().count() == length {
            Some(value)
        } else {
            self.reject(field, format!("size must be between {length} and {length}"))
        }
    }

    fn minimum_amount(&mut self, field: &str, value: Option<BigDecimal>) -> Option<BigDecimal> {
        let amount = self.present(field, value)?;
        if amount >= minimum_accepted_amount() {
            Some(amount)
        } else {
            self.reject(field, "must be greater than or equal to 0.01")
        }
    }
}

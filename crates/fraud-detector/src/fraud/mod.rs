//! Transaction fraud scoring: request validation, the rule engine, and its HTTP surface.
//!
//! Scoring is a pure function of a validated [`TransactionRequest`] and the process-wide
//! [`RuleConfiguration`]. Everything that can fail (decoding, validation) happens before the
//! engine is called and is reported through [`ProblemResponse`].

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod problem;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::RulesCatalog;
pub use domain::{ScoringResult, TransactionPayload, TransactionRequest};
pub use engine::{
    evaluate, NightWindow, RiskLevel, RuleConfiguration, RuleKind, ScoringEngine, MAX_RISK_SCORE,
};
pub use problem::ProblemResponse;
pub use router::fraud_router;
pub use validation::{FieldError, ValidationFailure};

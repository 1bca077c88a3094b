//! Rule-based fraud scoring for payment transactions.
//!
//! The [`fraud`] module holds the scoring engine and its HTTP router; [`config`] and
//! [`telemetry`] carry the process-level plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod fraud;
pub mod telemetry;

//! Error taxonomy for pension calculations
//!
//! The engine itself can only fail on semantically impossible input; it
//! never retries or silently corrects. Transport failures exist only for
//! deployments that delegate to a remote calculation service, and
//! retry/backoff belongs to the transport collaborator, not here.

use thiserror::Error;

/// Input is structurally impossible for the model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("gross salary must be positive, got {0}")]
    NonPositiveSalary(f64),

    #[error("work end year {end} precedes work start year {start}")]
    NegativeWorkYears { start: i32, end: i32 },
}

/// Any failure a calculation strategy can surface to the caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Invalid input, detected synchronously and never swallowed
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Remote calculation service failed (transport, timeout, server
    /// error, or an unparseable response); never a valid zero-result
    #[error("calculation service unavailable: {reason}")]
    Unavailable { reason: String },
}

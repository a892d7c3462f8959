//! Core projection engine and result structures

pub mod engine;
pub mod error;
pub mod result;

pub use engine::ProjectionEngine;
pub use error::{CalculationError, InvalidInputError};
pub use result::{
    DelayedRetirementScenarios, DelayedScenario, FundsTimelineEntry, ProjectionResult,
    SickLeaveImpact,
};

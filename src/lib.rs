//! Pension Engine - Deterministic retirement-pension projection
//!
//! This library provides:
//! - A pure projection engine mapping a person's profile to a multi-scenario
//!   pension forecast (funds timeline, sick-leave sensitivity, delayed
//!   retirement, required work extension)
//! - Interchangeable local and remote calculation strategies
//! - A caller-owned last-calculation store
//! - Static reference data (pension groups, informational facts)
//! - Batch scenario running over many profiles

pub mod assumptions;
pub mod calculator;
pub mod profile;
pub mod projection;
pub mod reference;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use calculator::{CalculationTransport, LocalCalculator, PensionCalculator, RemoteCalculator};
pub use profile::{Gender, PensionProfile};
pub use projection::{
    CalculationError, FundsTimelineEntry, InvalidInputError, ProjectionEngine, ProjectionResult,
};
pub use scenario::ScenarioRunner;
pub use store::CalculationStore;

//! Calculation strategies
//!
//! Two deployments of the same contract exist: computing locally with the
//! pure engine, or delegating to a remote calculation service and mapping
//! its JSON response field-by-field into the same result shape. Both are
//! interchangeable behind [`PensionCalculator`], selected at deployment
//! configuration time rather than hard-coded.

pub mod local;
pub mod remote;
pub mod wire;

pub use local::LocalCalculator;
pub use remote::{CalculationTransport, RemoteCalculator};

use crate::profile::PensionProfile;
use crate::projection::{CalculationError, ProjectionResult};

/// Contract shared by the local and remote calculation strategies
pub trait PensionCalculator {
    /// Map an input profile to a projection result
    fn calculate(&self, profile: &PensionProfile) -> Result<ProjectionResult, CalculationError>;
}

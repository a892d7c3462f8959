//! Local in-process calculation strategy

use super::PensionCalculator;
use crate::assumptions::Assumptions;
use crate::profile::PensionProfile;
use crate::projection::{CalculationError, ProjectionEngine, ProjectionResult};

/// Computes projections with the pure in-process engine
#[derive(Debug, Clone, Default)]
pub struct LocalCalculator {
    engine: ProjectionEngine,
}

impl LocalCalculator {
    /// Create a calculator with the baseline assumption set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Access the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl PensionCalculator for LocalCalculator {
    fn calculate(&self, profile: &PensionProfile) -> Result<ProjectionResult, CalculationError> {
        Ok(self.engine.project(profile)?)
    }
}

//! Scenario runner for batch projections
//!
//! Builds the engine once from one assumption set, then projects many
//! profiles or many variants of one profile without rebuilding anything.
//! Batches run in parallel; a single projection is cheap enough that
//! parallelism only pays off across profiles.

use crate::assumptions::Assumptions;
use crate::profile::PensionProfile;
use crate::projection::{InvalidInputError, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Pre-built runner for batch and sensitivity projections
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner with the baseline assumption set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom assumption set
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Project a single profile
    pub fn run(&self, profile: &PensionProfile) -> Result<ProjectionResult, InvalidInputError> {
        self.engine.project(profile)
    }

    /// Project many profiles in parallel, preserving input order
    pub fn run_batch(
        &self,
        profiles: &[PensionProfile],
    ) -> Vec<Result<ProjectionResult, InvalidInputError>> {
        profiles.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Re-project one profile under scaled salaries
    ///
    /// Used for what-if analysis around the entered salary, e.g. factors
    /// 0.7 and 1.5 for pessimistic and optimistic earnings paths.
    pub fn run_salary_sensitivity(
        &self,
        profile: &PensionProfile,
        factors: &[f64],
    ) -> Vec<Result<ProjectionResult, InvalidInputError>> {
        factors
            .iter()
            .map(|&factor| {
                let mut variant = profile.clone();
                variant.gross_salary = profile.gross_salary * factor;
                self.engine.project(&variant)
            })
            .collect()
    }

    /// Get a reference to the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

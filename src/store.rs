//! Caller-owned storage for the most recent calculation
//!
//! The engine is pure; retention of the last (input, result) pair is
//! explicit state the caller owns and scopes. A server-rendered
//! deployment keeps one store per session to avoid cross-user leakage; a
//! desktop caller can keep a single one. Writes are last-write-wins and
//! the cache has no TTL.

use crate::profile::PensionProfile;
use crate::projection::ProjectionResult;

/// Holds the most recent (input, result) pair for result consumers
#[derive(Debug, Clone, Default)]
pub struct CalculationStore {
    last: Option<(PensionProfile, ProjectionResult)>,
}

impl CalculationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a calculation, replacing any previous one
    pub fn record(&mut self, profile: PensionProfile, result: ProjectionResult) {
        self.last = Some((profile, result));
    }

    /// The input of the most recent calculation, if any
    pub fn last_input(&self) -> Option<&PensionProfile> {
        self.last.as_ref().map(|(profile, _)| profile)
    }

    /// The result of the most recent calculation, if any
    pub fn last_result(&self) -> Option<&ProjectionResult> {
        self.last.as_ref().map(|(_, result)| result)
    }

    /// Forget the retained calculation
    pub fn clear(&mut self) {
        self.last = None;
    }
}

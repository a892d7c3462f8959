//! Projection output structures
//!
//! All monetary fields are whole currency units, rounded half away from
//! zero at the output boundary. Internal accumulation stays on unrounded
//! floats so rounding error does not compound.

use serde::{Deserialize, Serialize};

/// One simulated year of pension-account accumulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsTimelineEntry {
    /// Calendar year
    pub year: i32,

    /// Age reached in that year
    pub age: i32,

    /// Cumulative account balance at that year
    pub total_funds: i64,

    /// Contribution added per year of work
    pub annual_contribution: i64,
}

/// Sick-leave sensitivity scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveImpact {
    /// Projected pension with average sick leave included
    pub with_sick_leave: i64,

    /// Projected pension with sick leave excluded
    pub without_sick_leave: i64,

    /// Monthly amount lost to sick leave
    pub difference: i64,

    /// Uplift percentage when sick leave is excluded
    pub percentage_impact: i64,
}

/// One delayed-retirement scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedScenario {
    /// Projected monthly pension for the delayed retirement
    pub amount: i64,

    /// Monthly gain over the base projection
    pub increase: i64,
}

/// Scenarios for retiring one, two, and five years late
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedRetirementScenarios {
    pub one_year: DelayedScenario,
    pub two_years: DelayedScenario,
    pub five_years: DelayedScenario,
}

/// Complete output of one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Projected monthly pension before inflation adjustment
    pub real_amount: i64,

    /// Projected pension discounted by inflation over the years to
    /// retirement
    pub inflation_adjusted_amount: i64,

    /// Projected pension as a percentage of current gross salary
    pub replacement_rate: i64,

    /// Projected pension as a percentage of the national average pension
    pub average_pension_comparison: i64,

    /// Present only when the profile requested the sick-leave scenario
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave_impact: Option<SickLeaveImpact>,

    pub delayed_retirement_scenarios: DelayedRetirementScenarios,

    /// Additional working years needed to reach the expected pension;
    /// present only when a target was given and exceeds the projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_work_extension: Option<u32>,

    /// Year-by-year accumulation trace, ordered by ascending year
    pub funds_growth_timeline: Vec<FundsTimelineEntry>,
}

/// Round a monetary value to whole currency units, half away from zero
pub(crate) fn round_currency(value: f64) -> i64 {
    value.round() as i64
}

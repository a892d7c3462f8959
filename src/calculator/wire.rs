//! Wire format of the remote calculation service
//!
//! The service accepts camelCase profile payloads and answers with a
//! snake_case result document. Mapping between that document and
//! [`ProjectionResult`] lives entirely here so the pure computation and
//! its tests never see wire formats. Missing numeric fields default to
//! zero, and every monetary field is rounded to whole currency units on
//! conversion, matching the rounding the local engine applies at its own
//! output boundary.

use crate::profile::{Gender, PensionProfile};
use crate::projection::{
    DelayedRetirementScenarios, DelayedScenario, FundsTimelineEntry, ProjectionResult,
    SickLeaveImpact,
};
use serde::{Deserialize, Serialize};

/// Profile payload posted to the calculation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProfile {
    pub age: u8,
    pub gender: Gender,
    pub gross_salary: f64,
    pub work_start_year: i32,
    #[serde(default)]
    pub work_end_year: Option<i32>,
    #[serde(default)]
    pub current_funds: f64,
    #[serde(default)]
    pub sick_leave_impact: bool,
    #[serde(default)]
    pub expected_pension: Option<f64>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl From<&PensionProfile> for WireProfile {
    fn from(profile: &PensionProfile) -> Self {
        Self {
            age: profile.age,
            gender: profile.gender,
            gross_salary: profile.gross_salary,
            work_start_year: profile.work_start_year,
            work_end_year: profile.work_end_year,
            current_funds: profile.current_funds,
            sick_leave_impact: profile.sick_leave_impact,
            expected_pension: profile.expected_pension,
            postal_code: profile.postal_code.clone(),
        }
    }
}

impl From<WireProfile> for PensionProfile {
    fn from(wire: WireProfile) -> Self {
        Self {
            age: wire.age,
            gender: wire.gender,
            gross_salary: wire.gross_salary,
            work_start_year: wire.work_start_year,
            work_end_year: wire.work_end_year,
            current_funds: wire.current_funds,
            sick_leave_impact: wire.sick_leave_impact,
            expected_pension: wire.expected_pension,
            postal_code: wire.postal_code,
        }
    }
}

/// Result document returned by the calculation endpoint
///
/// Amounts arrive as unrounded floats; [`WireResult::into_result`] is the
/// rounding boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct WireResult {
    #[serde(default)]
    pub real_amount: f64,
    #[serde(default)]
    pub inflation_adjusted_amount: f64,
    #[serde(default)]
    pub replacement_rate: f64,
    #[serde(default)]
    pub average_pension_comparison: f64,
    #[serde(default)]
    pub sick_leave_impact: Option<WireSickLeaveImpact>,
    #[serde(default)]
    pub delayed_retirement_scenarios: WireDelayedScenarios,
    #[serde(default)]
    pub required_work_extension: Option<u32>,
    #[serde(default)]
    pub funds_growth_timeline: Vec<WireTimelineEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSickLeaveImpact {
    #[serde(default)]
    pub with_sick_leave: f64,
    #[serde(default)]
    pub without_sick_leave: f64,
    #[serde(default)]
    pub difference: f64,
    #[serde(default)]
    pub percentage_impact: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireDelayedScenarios {
    #[serde(default)]
    pub one_year: WireDelayedScenario,
    #[serde(default)]
    pub two_years: WireDelayedScenario,
    #[serde(default)]
    pub five_years: WireDelayedScenario,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireDelayedScenario {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub increase: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireTimelineEntry {
    pub year: i32,
    pub age: i32,
    #[serde(default)]
    pub total_funds: f64,
    #[serde(default)]
    pub annual_contribution: f64,
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

impl WireResult {
    /// Convert the wire document into the engine's result shape
    pub fn into_result(self) -> ProjectionResult {
        ProjectionResult {
            real_amount: round(self.real_amount),
            inflation_adjusted_amount: round(self.inflation_adjusted_amount),
            replacement_rate: round(self.replacement_rate),
            average_pension_comparison: round(self.average_pension_comparison),
            sick_leave_impact: self.sick_leave_impact.map(|s| SickLeaveImpact {
                with_sick_leave: round(s.with_sick_leave),
                without_sick_leave: round(s.without_sick_leave),
                difference: round(s.difference),
                percentage_impact: round(s.percentage_impact),
            }),
            delayed_retirement_scenarios: DelayedRetirementScenarios {
                one_year: Self::scenario(self.delayed_retirement_scenarios.one_year),
                two_years: Self::scenario(self.delayed_retirement_scenarios.two_years),
                five_years: Self::scenario(self.delayed_retirement_scenarios.five_years),
            },
            // A zero extension means "no extension needed"
            required_work_extension: self.required_work_extension.filter(|&v| v != 0),
            funds_growth_timeline: self
                .funds_growth_timeline
                .into_iter()
                .map(|e| FundsTimelineEntry {
                    year: e.year,
                    age: e.age,
                    total_funds: round(e.total_funds),
                    annual_contribution: round(e.annual_contribution),
                })
                .collect(),
        }
    }

    fn scenario(wire: WireDelayedScenario) -> DelayedScenario {
        DelayedScenario {
            amount: round(wire.amount),
            increase: round(wire.increase),
        }
    }
}

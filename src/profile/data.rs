//! Profile data structures matching the simulation input format

use serde::{Deserialize, Serialize};

/// Gender of the insured person
///
/// Determines the statutory retirement age and the payout divisor
/// (expected months of benefit collection after retirement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Demographic and salary data for a single projection
///
/// Constructed by the caller and never mutated by the engine. Structural
/// validation (required fields, sensible ranges) is the caller's job; the
/// engine rejects only semantically impossible values such as a
/// non-positive salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionProfile {
    /// Current age in years
    pub age: u8,

    /// Gender (drives retirement age and payout divisor)
    pub gender: Gender,

    /// Monthly gross salary in currency units
    pub gross_salary: f64,

    /// Calendar year contributions began
    pub work_start_year: i32,

    /// Calendar year contributions will end; derived from the retirement
    /// age when absent
    #[serde(default)]
    pub work_end_year: Option<i32>,

    /// Already-accumulated pension-account balance
    #[serde(default)]
    pub current_funds: f64,

    /// Whether to compute the sick-leave sensitivity scenario
    #[serde(default)]
    pub sick_leave_impact: bool,

    /// Target monthly pension; triggers the required-work-extension solver
    #[serde(default)]
    pub expected_pension: Option<f64>,

    /// Postal code, passed through untouched (regional statistics are an
    /// external collaborator's concern)
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl PensionProfile {
    /// Create a profile with the required fields; optional fields take
    /// their defaults and can be set directly afterwards
    pub fn new(age: u8, gender: Gender, gross_salary: f64, work_start_year: i32) -> Self {
        Self {
            age,
            gender,
            gross_salary,
            work_start_year,
            work_end_year: None,
            current_funds: 0.0,
            sick_leave_impact: false,
            expected_pension: None,
            postal_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let profile = PensionProfile::new(30, Gender::Male, 5000.0, 2020);

        assert_eq!(profile.work_end_year, None);
        assert_eq!(profile.current_funds, 0.0);
        assert!(!profile.sick_leave_impact);
        assert_eq!(profile.expected_pension, None);
        assert_eq!(profile.postal_code, None);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let json = r#"{
            "age": 45,
            "gender": "female",
            "gross_salary": 6200.0,
            "work_start_year": 2003
        }"#;

        let profile: PensionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.age, 45);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.current_funds, 0.0);
        assert!(!profile.sick_leave_impact);
    }
}

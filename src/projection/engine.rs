//! Core projection engine turning a profile into a multi-scenario forecast
//!
//! The engine is a pure mapping: identical input and identical assumptions
//! produce bit-identical output. There is no wall-clock dependency beyond
//! the fixed reference year in the assumptions, no I/O, and no hidden
//! state. The funds timeline accumulates on unrounded floats; rounding to
//! whole currency units happens once, at the output boundary.

use super::error::InvalidInputError;
use super::result::{
    round_currency, DelayedRetirementScenarios, DelayedScenario, FundsTimelineEntry,
    ProjectionResult, SickLeaveImpact,
};
use crate::assumptions::Assumptions;
use crate::profile::PensionProfile;

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create an engine with the given assumption set
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Get a reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Project a pension for a single profile
    ///
    /// Fails only on semantically impossible input: a non-positive gross
    /// salary or a work-end year before the work-start year.
    pub fn project(&self, profile: &PensionProfile) -> Result<ProjectionResult, InvalidInputError> {
        if profile.gross_salary <= 0.0 {
            return Err(InvalidInputError::NonPositiveSalary(profile.gross_salary));
        }

        let a = &self.assumptions;

        let retirement_age = a.retirement_age(profile.gender) as i32;
        let years_to_retirement = (retirement_age - profile.age as i32).max(0);

        let work_end_year = profile
            .work_end_year
            .unwrap_or(a.current_year + years_to_retirement);

        let work_years = work_end_year - profile.work_start_year;
        if work_years < 0 {
            return Err(InvalidInputError::NegativeWorkYears {
                start: profile.work_start_year,
                end: work_end_year,
            });
        }
        let work_years = work_years as u32;

        // Monthly salary -> yearly contribution base
        let annual_contribution = profile.gross_salary * a.contribution_rate * 12.0;
        let total_funds = annual_contribution * work_years as f64 + profile.current_funds;

        let payout_months = a.payout_months(profile.gender) as f64;
        let basic_pension = total_funds / payout_months;

        let inflation_adjusted =
            basic_pension / (1.0 + a.annual_inflation_rate).powi(years_to_retirement);

        let sick_leave_impact = profile
            .sick_leave_impact
            .then(|| self.sick_leave_scenario(basic_pension, profile));

        let required_work_extension = self.required_work_extension(
            basic_pension,
            annual_contribution,
            payout_months,
            profile.expected_pension,
        );

        Ok(ProjectionResult {
            real_amount: round_currency(basic_pension),
            inflation_adjusted_amount: round_currency(inflation_adjusted),
            replacement_rate: round_currency(basic_pension / profile.gross_salary * 100.0),
            average_pension_comparison: round_currency(
                basic_pension / a.reference_average_pension * 100.0,
            ),
            sick_leave_impact,
            delayed_retirement_scenarios: self.delayed_scenarios(basic_pension),
            required_work_extension,
            funds_growth_timeline: self.funds_timeline(profile, annual_contribution, work_years),
        })
    }

    /// Pension with and without average sick leave
    ///
    /// Excluding sick leave applies a fixed gender-specific uplift to the
    /// base pension; the percentage reported is the uplift itself.
    fn sick_leave_scenario(&self, basic_pension: f64, profile: &PensionProfile) -> SickLeaveImpact {
        let factor = self.assumptions.sick_leave_uplift(profile.gender);
        let without = basic_pension * factor;

        SickLeaveImpact {
            with_sick_leave: round_currency(basic_pension),
            without_sick_leave: round_currency(without),
            difference: round_currency(without - basic_pension),
            percentage_impact: round_currency((factor - 1.0) * 100.0),
        }
    }

    /// Fixed multiplicative uplifts for working +1/+2/+5 years
    fn delayed_scenarios(&self, basic_pension: f64) -> DelayedRetirementScenarios {
        let a = &self.assumptions;
        let scenario = |uplift: f64| DelayedScenario {
            amount: round_currency(basic_pension * uplift),
            increase: round_currency(basic_pension * (uplift - 1.0)),
        };

        DelayedRetirementScenarios {
            one_year: scenario(a.delay_uplift_one_year),
            two_years: scenario(a.delay_uplift_two_years),
            five_years: scenario(a.delay_uplift_five_years),
        }
    }

    /// Minimum additional working years to reach the expected pension
    ///
    /// Each extra year contributes `annual_contribution / payout_months`
    /// to the monthly pension. A non-positive per-year gain means the
    /// target cannot be reached, not a division by zero.
    fn required_work_extension(
        &self,
        basic_pension: f64,
        annual_contribution: f64,
        payout_months: f64,
        expected_pension: Option<f64>,
    ) -> Option<u32> {
        let expected = expected_pension?;
        if basic_pension >= expected {
            return None;
        }

        let per_year_gain = annual_contribution / payout_months;
        if per_year_gain <= 0.0 {
            return None;
        }

        Some(((expected - basic_pension) / per_year_gain).ceil() as u32)
    }

    /// Year-by-year accumulation trace over the working period
    fn funds_timeline(
        &self,
        profile: &PensionProfile,
        annual_contribution: f64,
        work_years: u32,
    ) -> Vec<FundsTimelineEntry> {
        let current_year = self.assumptions.current_year;
        let mut timeline = Vec::with_capacity(work_years as usize + 1);

        for i in 0..=work_years {
            let year = profile.work_start_year + i as i32;
            timeline.push(FundsTimelineEntry {
                year,
                age: profile.age as i32 + (year - current_year),
                total_funds: round_currency(
                    profile.current_funds + annual_contribution * i as f64,
                ),
                annual_contribution: round_currency(annual_contribution),
            });
        }

        timeline
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::baseline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn reference_profile() -> PensionProfile {
        let mut profile = PensionProfile::new(30, Gender::Male, 5000.0, 2020);
        profile.work_end_year = Some(2060);
        profile
    }

    #[test]
    fn test_reference_scenario() {
        // 40 work years, 11712/year contribution, 468480 accumulated,
        // 468480 / 240 payout months = 1952/month
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_profile()).unwrap();

        assert_eq!(result.real_amount, 1952);
        assert_eq!(result.replacement_rate, 39); // 1952 / 5000 * 100
        assert_eq!(result.average_pension_comparison, 78); // 1952 / 2500 * 100
        assert_eq!(result.funds_growth_timeline.len(), 41);
        assert!(result.sick_leave_impact.is_none());
        assert!(result.required_work_extension.is_none());
    }

    #[test]
    fn test_inflation_discounting() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_profile()).unwrap();

        // 35 years to retirement at 2.5% annual inflation
        let basic = 5000.0 * 0.1952 * 12.0 * 40.0 / 240.0;
        let expected = basic / 1.025f64.powi(35);
        assert_eq!(result.inflation_adjusted_amount, expected.round() as i64);
        assert!(result.inflation_adjusted_amount < result.real_amount);
    }

    #[test]
    fn test_derived_work_end_year_matches_explicit() {
        // Age 30 male retires at 65 -> end year 2025 + 35 = 2060
        let engine = ProjectionEngine::default();
        let explicit = engine.project(&reference_profile()).unwrap();

        let mut derived_profile = reference_profile();
        derived_profile.work_end_year = None;
        let derived = engine.project(&derived_profile).unwrap();

        assert_eq!(explicit, derived);
    }

    #[test]
    fn test_sick_leave_scenario_male() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.sick_leave_impact = true;

        let result = engine.project(&profile).unwrap();
        let impact = result.sick_leave_impact.unwrap();

        // 1952 * 1.05 = 2049.6
        assert_eq!(impact.with_sick_leave, 1952);
        assert_eq!(impact.without_sick_leave, 2050);
        assert_eq!(impact.difference, 98);
        assert_eq!(impact.percentage_impact, 5);
    }

    #[test]
    fn test_sick_leave_scenario_female_uses_higher_uplift() {
        let engine = ProjectionEngine::default();
        let mut profile = PensionProfile::new(30, Gender::Female, 5000.0, 2020);
        profile.work_end_year = Some(2060);
        profile.sick_leave_impact = true;

        let impact = engine.project(&profile).unwrap().sick_leave_impact.unwrap();
        assert_eq!(impact.percentage_impact, 7);
        assert_eq!(
            impact.without_sick_leave - impact.with_sick_leave,
            impact.difference
        );
    }

    #[test]
    fn test_delayed_retirement_scenarios() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_profile()).unwrap();
        let scenarios = &result.delayed_retirement_scenarios;

        assert_eq!(scenarios.one_year.amount, 2108); // 1952 * 1.08
        assert_eq!(scenarios.one_year.increase, 156);
        assert_eq!(scenarios.two_years.amount, 2264); // 1952 * 1.16
        assert_eq!(scenarios.two_years.increase, 312);
        assert_eq!(scenarios.five_years.amount, 2733); // 1952 * 1.40
        assert_eq!(scenarios.five_years.increase, 781);
    }

    #[test]
    fn test_required_work_extension() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.expected_pension = Some(2500.0);

        // shortfall 548, per-year gain 11712 / 240 = 48.8, ceil -> 12
        let result = engine.project(&profile).unwrap();
        assert_eq!(result.required_work_extension, Some(12));
    }

    #[test]
    fn test_required_work_extension_absent_when_target_met() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.expected_pension = Some(1500.0);

        let result = engine.project(&profile).unwrap();
        assert!(result.required_work_extension.is_none());
    }

    #[test]
    fn test_timeline_invariants() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.current_funds = 25_000.0;

        let result = engine.project(&profile).unwrap();
        let timeline = &result.funds_growth_timeline;

        assert_eq!(timeline.len(), 41);
        assert_eq!(timeline[0].year, 2020);
        assert_eq!(timeline[0].age, 25); // 30 + (2020 - 2025)
        assert_eq!(timeline[0].total_funds, 25_000);

        for pair in timeline.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
            assert!(pair[1].total_funds > pair[0].total_funds);
        }
    }

    #[test]
    fn test_current_funds_raise_pension() {
        let engine = ProjectionEngine::default();
        let base = engine.project(&reference_profile()).unwrap();

        let mut funded = reference_profile();
        funded.current_funds = 48_000.0;
        let result = engine.project(&funded).unwrap();

        // 48000 extra over 240 payout months is 200/month
        assert_eq!(result.real_amount, base.real_amount + 200);
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        let engine = ProjectionEngine::default();

        let mut profile = reference_profile();
        profile.gross_salary = 0.0;
        assert!(matches!(
            engine.project(&profile),
            Err(InvalidInputError::NonPositiveSalary(_))
        ));

        profile.gross_salary = -4200.0;
        assert!(matches!(
            engine.project(&profile),
            Err(InvalidInputError::NonPositiveSalary(_))
        ));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.work_end_year = Some(2010);

        assert!(matches!(
            engine.project(&profile),
            Err(InvalidInputError::NegativeWorkYears { start: 2020, end: 2010 })
        ));
    }

    #[test]
    fn test_zero_work_years_yields_single_timeline_entry() {
        let engine = ProjectionEngine::default();
        let mut profile = PensionProfile::new(64, Gender::Male, 5000.0, 2025);
        profile.work_end_year = Some(2025);
        profile.current_funds = 120_000.0;

        let result = engine.project(&profile).unwrap();
        assert_eq!(result.funds_growth_timeline.len(), 1);
        assert_eq!(result.real_amount, 500); // 120000 / 240
    }

    #[test]
    fn test_past_retirement_age_has_no_inflation_discount() {
        let engine = ProjectionEngine::default();
        let mut profile = PensionProfile::new(70, Gender::Male, 5000.0, 1990);
        profile.work_end_year = Some(2025);

        let result = engine.project(&profile).unwrap();
        assert_eq!(result.inflation_adjusted_amount, result.real_amount);
    }

    #[test]
    fn test_determinism() {
        let engine = ProjectionEngine::default();
        let mut profile = reference_profile();
        profile.sick_leave_impact = true;
        profile.expected_pension = Some(3000.0);
        profile.current_funds = 10_000.0;

        let first = engine.project(&profile).unwrap();
        let second = engine.project(&profile).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_per_year_gain_geometry() {
        // One extra work year of contributions must equal the per-year
        // gain the extension solver assumes.
        let a = Assumptions::baseline();
        let annual = 5000.0 * a.contribution_rate * 12.0;
        assert_relative_eq!(annual / 240.0, 48.8, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_salary_monotonicity(
            age in 20u8..64,
            salary in 1_000u32..50_000,
            bump in 1u32..10_000,
            work_years in 0i32..45,
        ) {
            let engine = ProjectionEngine::default();

            let mut lower = PensionProfile::new(age, Gender::Male, salary as f64, 2020);
            lower.work_end_year = Some(2020 + work_years);
            let mut higher = lower.clone();
            higher.gross_salary = (salary + bump) as f64;

            let low = engine.project(&lower).unwrap();
            let high = engine.project(&higher).unwrap();
            prop_assert!(high.real_amount >= low.real_amount);
        }

        #[test]
        fn prop_timeline_length_and_ordering(
            age in 20u8..64,
            salary in 1_000u32..50_000,
            start in 1980i32..2025,
            work_years in 0i32..45,
            funds in 0u32..500_000,
        ) {
            let engine = ProjectionEngine::default();
            let mut profile = PensionProfile::new(age, Gender::Female, salary as f64, start);
            profile.work_end_year = Some(start + work_years);
            profile.current_funds = funds as f64;

            let result = engine.project(&profile).unwrap();
            let timeline = &result.funds_growth_timeline;

            prop_assert_eq!(timeline.len(), work_years as usize + 1);
            prop_assert_eq!(timeline[0].total_funds, (funds as f64).round() as i64);
            for pair in timeline.windows(2) {
                prop_assert!(pair[1].year > pair[0].year);
            }
        }

        #[test]
        fn prop_delayed_scenarios_ordered(
            age in 20u8..64,
            salary in 1_000u32..50_000,
            work_years in 1i32..45,
        ) {
            let engine = ProjectionEngine::default();
            let mut profile = PensionProfile::new(age, Gender::Male, salary as f64, 2020);
            profile.work_end_year = Some(2020 + work_years);

            let result = engine.project(&profile).unwrap();
            let s = &result.delayed_retirement_scenarios;
            prop_assert!(s.five_years.amount >= s.two_years.amount);
            prop_assert!(s.two_years.amount >= s.one_year.amount);
            prop_assert!(s.one_year.amount >= result.real_amount);
        }

        #[test]
        fn prop_extension_gating(
            age in 20u8..64,
            salary in 1_000u32..50_000,
            work_years in 1i32..45,
            expected in 100u32..20_000,
        ) {
            let engine = ProjectionEngine::default();
            let mut profile = PensionProfile::new(age, Gender::Male, salary as f64, 2020);
            profile.work_end_year = Some(2020 + work_years);
            profile.expected_pension = Some(expected as f64);

            let result = engine.project(&profile).unwrap();
            if result.required_work_extension.is_some() {
                prop_assert!((expected as i64) >= result.real_amount);
            } else {
                prop_assert!(result.real_amount as f64 >= expected as f64 - 1.0);
            }
        }
    }
}

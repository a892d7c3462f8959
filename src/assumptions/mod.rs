//! Model assumptions for pension projections
//!
//! The engine intentionally uses a small set of fixed constants and
//! linear/geometric approximations rather than a full actuarial model.
//! All of them live here so a deployment can override a single value
//! (say, the contribution rate after a statutory change) without touching
//! the projection formulas. The scenario uplift multipliers are policy
//! approximations carried over from the reference parameter set, not
//! re-derivations of the contribution model.

use crate::profile::Gender;

/// Fixed parameter set for one projection run
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    /// Reference "current" calendar year; fixed so projections are
    /// reproducible rather than dependent on wall-clock time
    pub current_year: i32,

    /// Fraction of gross salary paid into the pension system per year
    pub contribution_rate: f64,

    /// Annual inflation rate used for geometric discounting
    pub annual_inflation_rate: f64,

    /// National average monthly pension used for the comparison ratio
    pub reference_average_pension: f64,

    /// Statutory retirement age for men
    pub retirement_age_male: u8,

    /// Statutory retirement age for women
    pub retirement_age_female: u8,

    /// Expected months of benefit collection after retirement, men (20y)
    pub payout_months_male: u32,

    /// Expected months of benefit collection after retirement, women (25y)
    pub payout_months_female: u32,

    /// Pension uplift when sick leave is excluded, men
    pub sick_leave_uplift_male: f64,

    /// Pension uplift when sick leave is excluded, women
    pub sick_leave_uplift_female: f64,

    /// Pension uplift for retiring one year late
    pub delay_uplift_one_year: f64,

    /// Pension uplift for retiring two years late
    pub delay_uplift_two_years: f64,

    /// Pension uplift for retiring five years late
    pub delay_uplift_five_years: f64,
}

impl Assumptions {
    /// Reference parameter set (2025 statutory values)
    pub fn baseline() -> Self {
        Self {
            current_year: 2025,
            contribution_rate: 0.1952,
            annual_inflation_rate: 0.025,
            reference_average_pension: 2500.0,
            retirement_age_male: 65,
            retirement_age_female: 60,
            payout_months_male: 240,
            payout_months_female: 300,
            sick_leave_uplift_male: 1.05,
            sick_leave_uplift_female: 1.07,
            delay_uplift_one_year: 1.08,
            delay_uplift_two_years: 1.16,
            delay_uplift_five_years: 1.40,
        }
    }

    /// Statutory retirement age by gender
    pub fn retirement_age(&self, gender: Gender) -> u8 {
        match gender {
            Gender::Male => self.retirement_age_male,
            Gender::Female => self.retirement_age_female,
        }
    }

    /// Payout divisor (expected months of collection) by gender
    pub fn payout_months(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.payout_months_male,
            Gender::Female => self.payout_months_female,
        }
    }

    /// Sick-leave exclusion uplift factor by gender
    pub fn sick_leave_uplift(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.sick_leave_uplift_male,
            Gender::Female => self.sick_leave_uplift_female,
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::baseline()
    }
}

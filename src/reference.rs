//! Static reference data for informational charts and facts
//!
//! The group breakdown is fixed reference data, not user-dependent
//! computation. `random_fact` is the one non-deterministic function in
//! the crate and is excluded from the engine's determinism guarantees.

use rand::Rng;
use serde::Serialize;

/// One pension-range bucket for the informational breakdown chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PensionGroup {
    pub name: &'static str,
    pub description: &'static str,
    pub average_amount: f64,
    /// Share of the retired population in this bucket, percent
    pub percentage: f64,
    /// Display color, hex
    pub color: &'static str,
    pub detailed_info: &'static str,
}

/// Fixed, ordered pension-range buckets (lowest average first)
const PENSION_GROUPS: &[PensionGroup] = &[
    PensionGroup {
        name: "Below minimum",
        description: "Benefits under the statutory minimum pension",
        average_amount: 1200.0,
        percentage: 8.5,
        color: "#F05E5E",
        detailed_info: "Mostly careers with long contribution gaps or \
                        part-time work below the contribution threshold.",
    },
    PensionGroup {
        name: "Minimum to average",
        description: "Between the minimum pension and the national average",
        average_amount: 2100.0,
        percentage: 46.0,
        color: "#FFB34F",
        detailed_info: "The largest group of retirees; typically full \
                        careers at or below the median wage.",
    },
    PensionGroup {
        name: "Around average",
        description: "Close to the national average pension",
        average_amount: 2500.0,
        percentage: 24.5,
        color: "#BEC3CE",
        detailed_info: "Full careers at roughly the median wage with few \
                        contribution gaps.",
    },
    PensionGroup {
        name: "Above average",
        description: "Up to twice the national average",
        average_amount: 3800.0,
        percentage: 16.0,
        color: "#3F84D2",
        detailed_info: "Longer careers or above-median wages; often \
                        includes delayed retirement.",
    },
    PensionGroup {
        name: "Top benefits",
        description: "More than twice the national average",
        average_amount: 6500.0,
        percentage: 5.0,
        color: "#00416E",
        detailed_info: "Long uninterrupted careers at high salaries, \
                        usually with several years worked past the \
                        statutory retirement age.",
    },
];

/// Fixed, ordered set of pension-range buckets for informational charts
pub fn pension_groups() -> &'static [PensionGroup] {
    PENSION_GROUPS
}

const FACTS: &[&str] = &[
    "The highest pension in the country is paid in the Silesian region and exceeds 15,000 per month.",
    "The average time spent on sick leave is 14 days per year, and every day lowers the contribution base.",
    "Delaying retirement by a single year raises the projected benefit by around 8 percent.",
    "Women retire at 60 and men at 65 under the current statutory retirement ages.",
    "19.52 percent of every gross salary flows into the pension account as a contribution.",
    "The projected benefit divides accumulated funds by expected months of collection: 240 for men, 300 for women.",
];

/// One informational fact, chosen uniformly at random
pub fn random_fact() -> &'static str {
    let idx = rand::rng().random_range(0..FACTS.len());
    FACTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_groups_ordered_and_complete() {
        let groups = pension_groups();
        assert_eq!(groups.len(), 5);

        for pair in groups.windows(2) {
            assert!(pair[1].average_amount > pair[0].average_amount);
        }

        let total: f64 = groups.iter().map(|g| g.percentage).sum();
        assert_relative_eq!(total, 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_random_fact_is_from_fixed_set() {
        for _ in 0..32 {
            let fact = random_fact();
            assert!(FACTS.contains(&fact));
        }
    }
}

//! Pension Engine CLI
//!
//! Command-line interface for running a single pension projection

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pension_engine::{Gender, PensionProfile, ProjectionEngine, reference};
use std::fs::File;
use std::io::Write;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliGender {
    Male,
    Female,
}

impl From<CliGender> for Gender {
    fn from(value: CliGender) -> Self {
        match value {
            CliGender::Male => Gender::Male,
            CliGender::Female => Gender::Female,
        }
    }
}

/// Project a retirement pension from demographic and salary data
#[derive(Debug, Parser)]
#[command(name = "pension_engine", version)]
struct Args {
    /// Current age in years
    #[arg(long)]
    age: u8,

    /// Gender (drives retirement age and payout divisor)
    #[arg(long, value_enum)]
    gender: CliGender,

    /// Monthly gross salary
    #[arg(long)]
    gross_salary: f64,

    /// Calendar year contributions began
    #[arg(long)]
    work_start_year: i32,

    /// Calendar year contributions will end (derived from retirement age
    /// when omitted)
    #[arg(long)]
    work_end_year: Option<i32>,

    /// Already-accumulated pension-account balance
    #[arg(long, default_value_t = 0.0)]
    current_funds: f64,

    /// Also compute the sick-leave sensitivity scenario
    #[arg(long)]
    sick_leave: bool,

    /// Target monthly pension; reports the required work extension
    #[arg(long)]
    expected_pension: Option<f64>,

    /// Write the funds timeline to this CSV file
    #[arg(long)]
    timeline_csv: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut profile = PensionProfile::new(
        args.age,
        args.gender.into(),
        args.gross_salary,
        args.work_start_year,
    );
    profile.work_end_year = args.work_end_year;
    profile.current_funds = args.current_funds;
    profile.sick_leave_impact = args.sick_leave;
    profile.expected_pension = args.expected_pension;

    let engine = ProjectionEngine::default();
    let result = engine.project(&profile).context("Projection failed")?;

    println!("Pension Projection");
    println!("==================\n");
    println!("  Projected pension:       {:>8} /month", result.real_amount);
    println!("  Inflation adjusted:      {:>8} /month", result.inflation_adjusted_amount);
    println!("  Replacement rate:        {:>7}%", result.replacement_rate);
    println!("  Vs. average pension:     {:>7}%", result.average_pension_comparison);

    if let Some(impact) = &result.sick_leave_impact {
        println!("\nSick-leave impact:");
        println!("  With sick leave:         {:>8}", impact.with_sick_leave);
        println!("  Without sick leave:      {:>8}", impact.without_sick_leave);
        println!("  Monthly difference:      {:>8} ({}%)", impact.difference, impact.percentage_impact);
    }

    let scenarios = &result.delayed_retirement_scenarios;
    println!("\nDelayed retirement:");
    println!("  +1 year:  {:>8}  (+{})", scenarios.one_year.amount, scenarios.one_year.increase);
    println!("  +2 years: {:>8}  (+{})", scenarios.two_years.amount, scenarios.two_years.increase);
    println!("  +5 years: {:>8}  (+{})", scenarios.five_years.amount, scenarios.five_years.increase);

    if let Some(extension) = result.required_work_extension {
        println!("\nReaching the expected pension requires {} more working years.", extension);
    } else if args.expected_pension.is_some() {
        println!("\nThe expected pension is already within the projection.");
    }

    println!("\nFunds timeline ({} years):", result.funds_growth_timeline.len());
    println!("{:>6} {:>4} {:>14} {:>14}", "Year", "Age", "TotalFunds", "Contribution");
    println!("{}", "-".repeat(42));
    for entry in result.funds_growth_timeline.iter().take(10) {
        println!(
            "{:>6} {:>4} {:>14} {:>14}",
            entry.year, entry.age, entry.total_funds, entry.annual_contribution
        );
    }
    if result.funds_growth_timeline.len() > 10 {
        println!("... ({} more years)", result.funds_growth_timeline.len() - 10);
    }

    if let Some(path) = &args.timeline_csv {
        let mut file = File::create(path)
            .with_context(|| format!("Unable to create {}", path))?;
        writeln!(file, "Year,Age,TotalFunds,AnnualContribution")?;
        for entry in &result.funds_growth_timeline {
            writeln!(
                file,
                "{},{},{},{}",
                entry.year, entry.age, entry.total_funds, entry.annual_contribution
            )?;
        }
        println!("\nTimeline written to: {}", path);
    }

    println!("\nDid you know? {}", reference::random_fact());

    Ok(())
}

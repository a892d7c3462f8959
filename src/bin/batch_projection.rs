//! Run projections for a whole batch of profiles from CSV
//!
//! Outputs one summary row per profile for usage reporting

use anyhow::{Context, Result};
use clap::Parser;
use pension_engine::{profile::load_profiles, Gender, ScenarioRunner};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Project every profile in a CSV file and write a summary CSV
#[derive(Debug, Parser)]
#[command(name = "batch_projection", version)]
struct Args {
    /// Input CSV with one profile per row
    input: String,

    /// Output path; defaults to a timestamped file name
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let profiles = load_profiles(&args.input)?;
    log::info!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&profiles);

    let output = args.output.unwrap_or_else(|| {
        format!(
            "batch_projection_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        )
    });

    let mut file = File::create(&output)
        .with_context(|| format!("Unable to create {}", output))?;
    writeln!(
        file,
        "Age,Gender,GrossSalary,RealAmount,InflationAdjusted,ReplacementRate,RequiredExtension,Error"
    )?;

    let mut failures = 0usize;
    for (profile, result) in profiles.iter().zip(&results) {
        let gender = match profile.gender {
            Gender::Male => "male",
            Gender::Female => "female",
        };

        match result {
            Ok(r) => writeln!(
                file,
                "{},{},{},{},{},{},{},",
                profile.age,
                gender,
                profile.gross_salary,
                r.real_amount,
                r.inflation_adjusted_amount,
                r.replacement_rate,
                r.required_work_extension
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            )?,
            Err(e) => {
                failures += 1;
                writeln!(
                    file,
                    "{},{},{},,,,,{}",
                    profile.age, gender, profile.gross_salary, e
                )?
            }
        }
    }

    log::info!(
        "Projected {} profiles ({} invalid) in {:?}",
        profiles.len(),
        failures,
        start.elapsed()
    );
    println!("Summary written to: {}", output);

    Ok(())
}

//! Load profiles from a batch CSV file

use super::{Gender, PensionProfile};
use anyhow::{bail, Context, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the batch input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "GrossSalary")]
    gross_salary: f64,
    #[serde(rename = "WorkStartYear")]
    work_start_year: i32,
    #[serde(rename = "WorkEndYear")]
    work_end_year: Option<i32>,
    #[serde(rename = "CurrentFunds")]
    current_funds: Option<f64>,
    #[serde(rename = "SickLeaveImpact")]
    sick_leave_impact: Option<bool>,
    #[serde(rename = "ExpectedPension")]
    expected_pension: Option<f64>,
    #[serde(rename = "PostalCode")]
    postal_code: Option<String>,
}

impl CsvRow {
    fn to_profile(self) -> Result<PensionProfile> {
        let gender = match self.gender.as_str() {
            "male" | "Male" => Gender::Male,
            "female" | "Female" => Gender::Female,
            other => bail!("Unknown Gender: {}", other),
        };

        Ok(PensionProfile {
            age: self.age,
            gender,
            gross_salary: self.gross_salary,
            work_start_year: self.work_start_year,
            work_end_year: self.work_end_year,
            current_funds: self.current_funds.unwrap_or(0.0),
            sick_leave_impact: self.sick_leave_impact.unwrap_or(false),
            expected_pension: self.expected_pension,
            postal_code: self.postal_code.filter(|s| !s.is_empty()),
        })
    }
}

/// Load profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<PensionProfile>> {
    let reader = Reader::from_path(&path)
        .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
    load_from(reader)
}

/// Load profiles from any reader (for tests and in-memory batches)
pub fn load_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PensionProfile>> {
    load_from(Reader::from_reader(reader))
}

fn load_from<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<PensionProfile>> {
    let mut profiles = Vec::new();

    for (i, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record.with_context(|| format!("Malformed CSV record {}", i + 1))?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

//! Patient clinical profile: input type, defaults, and range validation
//!
//! Global invariants enforced:
//! - Optional fields have explicit documented defaults; a missing boolean
//!   is false, never an error
//! - Validation is the only stage that can reject a profile; every stage
//!   after it is a total function

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Biological sex; selects the Framingham coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

/// BMI value that applies no adjustment when the field is absent.
const DEFAULT_BMI: f64 = 25.0;

fn default_bmi() -> f64 {
    DEFAULT_BMI
}

/// Clinical inputs for one risk assessment.
///
/// A pure value type: constructed per call, never mutated, never persisted
/// by the engine. Booleans default to false when absent; `body_mass_index`
/// defaults to 25.0 (no BMI adjustment) and `physical_activity_level` to
/// `Moderate` (no activity adjustment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct PatientClinicalProfile {
    pub sex: Sex,
    /// Age in years.
    pub age: u32,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: u32,
    /// Total serum cholesterol in mg/dL.
    pub total_cholesterol: u32,
    /// HDL cholesterol in mg/dL.
    pub hdl_cholesterol: u32,
    #[serde(default)]
    pub on_hypertension_treatment: bool,
    #[serde(default)]
    pub is_smoker: bool,
    #[serde(default)]
    pub has_diabetes: bool,
    #[serde(default)]
    pub has_family_history_cvd: bool,
    #[serde(default = "default_bmi")]
    pub body_mass_index: f64,
    #[serde(default)]
    pub physical_activity_level: ActivityLevel,
}

/// A required field is outside its supported physiological range.
///
/// Raised before scoring; invalid input stays invalid, so callers must
/// surface it as a validation failure rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidProfile {
    #[error("age {0} years is outside the supported range 1-120")]
    AgeOutOfRange(u32),
    #[error("systolic blood pressure {0} mmHg is outside the supported range 40-300")]
    SystolicBpOutOfRange(u32),
    #[error("total cholesterol {0} mg/dL is outside the supported range 60-500")]
    TotalCholesterolOutOfRange(u32),
    #[error("HDL cholesterol {0} mg/dL is outside the supported range 10-150")]
    HdlCholesterolOutOfRange(u32),
    #[error("body mass index {0} is outside the supported range 10-80")]
    BodyMassIndexOutOfRange(f64),
}

impl PatientClinicalProfile {
    /// Validate required fields against generous physiological ranges.
    ///
    /// The ranges are wide on purpose: the engine rejects only values that
    /// cannot describe a living patient, and leaves clinical plausibility
    /// checks to the intake form.
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        if !(1..=120).contains(&self.age) {
            return Err(InvalidProfile::AgeOutOfRange(self.age));
        }
        if !(40..=300).contains(&self.systolic_bp) {
            return Err(InvalidProfile::SystolicBpOutOfRange(self.systolic_bp));
        }
        if !(60..=500).contains(&self.total_cholesterol) {
            return Err(InvalidProfile::TotalCholesterolOutOfRange(
                self.total_cholesterol,
            ));
        }
        if !(10..=150).contains(&self.hdl_cholesterol) {
            return Err(InvalidProfile::HdlCholesterolOutOfRange(
                self.hdl_cholesterol,
            ));
        }
        // NaN fails the contains check, so non-finite BMI is rejected here too
        if !(10.0..=80.0).contains(&self.body_mass_index) {
            return Err(InvalidProfile::BodyMassIndexOutOfRange(
                self.body_mass_index,
            ));
        }
        Ok(())
    }

    /// Parse a single profile from a JSON document.
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("failed to parse patient profile JSON")
    }
}

/// Load profiles from a JSON-Lines file (one JSON object per line).
///
/// Blank lines are skipped. A malformed line aborts the load with the line
/// number in the error context; partial batches are never returned.
pub fn load_profiles_jsonl(path: &Path) -> Result<Vec<PatientClinicalProfile>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profiles file: {}", path.display()))?;

    let mut profiles = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let profile: PatientClinicalProfile = serde_json::from_str(line)
            .with_context(|| format!("invalid profile on line {}", idx + 1))?;
        profiles.push(profile);
    }
    Ok(profiles)
}

//! Risk factor explanations
//!
//! Re-examines the raw profile (not the intermediate score) and emits one
//! factor/impact entry per triggered condition, in a fixed evaluation order:
//! age, blood pressure, total cholesterol, HDL, smoking, diabetes, family
//! history, BMI. Zero triggered conditions yield an empty list; any
//! placeholder text is the caller's concern.

use crate::profile::PatientClinicalProfile;
use serde::{Deserialize, Serialize};

/// One contributing risk factor with a human-readable impact description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskExplanation {
    pub factor: String,
    pub impact: String,
}

impl RiskExplanation {
    fn new(factor: &str, impact: String) -> Self {
        RiskExplanation {
            factor: factor.to_string(),
            impact,
        }
    }
}

/// Derive the ordered explanation list for a profile.
///
/// Thresholds here are the explainer's own: total cholesterol is only
/// flagged above 240 mg/dL and BMI only above 30, which is deliberately
/// stricter than the recommender's appended-item logic for the same inputs.
pub fn explain_risk_factors(profile: &PatientClinicalProfile) -> Vec<RiskExplanation> {
    let mut explanations = Vec::new();

    if profile.age > 65 {
        explanations.push(RiskExplanation::new(
            "Age",
            format!(
                "Advanced age ({} years) significantly increases cardiovascular risk.",
                profile.age
            ),
        ));
    } else if profile.age > 45 {
        explanations.push(RiskExplanation::new(
            "Age",
            format!("Age ({} years) is a moderate risk factor.", profile.age),
        ));
    }

    if profile.systolic_bp > 140 {
        explanations.push(RiskExplanation::new(
            "Hypertension",
            format!(
                "Systolic BP ({} mmHg) indicates hypertension, increasing risk.",
                profile.systolic_bp
            ),
        ));
    } else if profile.systolic_bp > 130 {
        explanations.push(RiskExplanation::new(
            "Blood Pressure",
            format!(
                "Elevated systolic BP ({} mmHg) contributes to increased risk.",
                profile.systolic_bp
            ),
        ));
    }

    if profile.total_cholesterol > 240 {
        explanations.push(RiskExplanation::new(
            "High Cholesterol",
            format!(
                "Total cholesterol ({} mg/dL) is significantly elevated.",
                profile.total_cholesterol
            ),
        ));
    }

    if profile.hdl_cholesterol < 40 {
        explanations.push(RiskExplanation::new(
            "Low HDL",
            format!(
                "Low HDL cholesterol ({} mg/dL) increases risk.",
                profile.hdl_cholesterol
            ),
        ));
    }

    if profile.is_smoker {
        explanations.push(RiskExplanation::new(
            "Smoking",
            "Current smoking significantly increases cardiovascular risk.".to_string(),
        ));
    }

    if profile.has_diabetes {
        explanations.push(RiskExplanation::new(
            "Diabetes",
            "Diabetes mellitus is a major cardiovascular risk factor.".to_string(),
        ));
    }

    if profile.has_family_history_cvd {
        explanations.push(RiskExplanation::new(
            "Family History",
            "Family history of cardiovascular disease increases genetic predisposition."
                .to_string(),
        ));
    }

    if profile.body_mass_index > 30.0 {
        explanations.push(RiskExplanation::new(
            "Obesity",
            format!(
                "BMI ({:.1}) indicates obesity, contributing to increased risk.",
                profile.body_mass_index
            ),
        ));
    }

    explanations
}

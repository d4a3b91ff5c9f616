//! Clinical recommendations
//!
//! Emits a fixed category-level block first, then condition-specific items
//! appended in a fixed order. Output is a pure function of category and
//! profile; calling it twice yields identical lists.

use crate::profile::PatientClinicalProfile;
use crate::risk::RiskCategory;

/// Standing recommendation block for high-risk patients.
const HIGH_RISK_BLOCK: &[&str] = &[
    "Immediate cardiology consultation recommended",
    "Consider statin therapy if not contraindicated",
    "Aggressive blood pressure management (target <130/80 mmHg)",
    "Smoking cessation counseling if applicable",
    "Diabetes management optimization",
    "Consider antiplatelet therapy (aspirin)",
    "Lifestyle modifications: diet, exercise, weight management",
];

const MODERATE_RISK_BLOCK: &[&str] = &[
    "Consider statin therapy based on clinical judgment",
    "Blood pressure monitoring and management",
    "Lifestyle modifications: Mediterranean diet, regular exercise",
    "Smoking cessation if applicable",
    "Annual cardiovascular risk reassessment",
    "Consider cardiology consultation",
];

const LOW_RISK_BLOCK: &[&str] = &[
    "Continue current preventive measures",
    "Regular blood pressure and cholesterol monitoring",
    "Maintain healthy lifestyle: diet and exercise",
    "Annual health screenings",
    "Smoking cessation if applicable",
];

/// Derive the ordered recommendation list for a category and profile.
///
/// "Smoking cessation if applicable" is standing text in every block and is
/// not gated on `is_smoker`; the appended items react to out-of-range BP,
/// total cholesterol, and BMI independently of the category.
pub fn clinical_recommendations(
    category: RiskCategory,
    profile: &PatientClinicalProfile,
) -> Vec<String> {
    let block = match category {
        RiskCategory::High => HIGH_RISK_BLOCK,
        RiskCategory::Moderate => MODERATE_RISK_BLOCK,
        RiskCategory::Low => LOW_RISK_BLOCK,
    };
    let mut recommendations: Vec<String> = block.iter().map(|s| s.to_string()).collect();

    if profile.systolic_bp > 140 {
        recommendations
            .push("Hypertension management: medication review and lifestyle modifications".to_string());
    }

    if profile.total_cholesterol > 240 {
        recommendations
            .push("Lipid management: dietary changes and possible statin therapy".to_string());
    }

    if profile.body_mass_index > 30.0 {
        recommendations
            .push("Weight management: nutritional counseling and exercise program".to_string());
    }

    recommendations
}

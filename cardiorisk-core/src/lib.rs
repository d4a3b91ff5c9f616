//! Cardiorisk core library - Framingham-style 10-year cardiovascular risk scoring

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Assessment is a pure function of the input profile
// - No global mutable state; coefficient tables are const
// - No randomness, clocks, or I/O inside the scoring pipeline
// - Identical input yields bit-identical output

pub mod coefficients;
pub mod explain;
pub mod profile;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod scoring;

pub use explain::{explain_risk_factors, RiskExplanation};
pub use profile::{ActivityLevel, InvalidProfile, PatientClinicalProfile, Sex};
pub use recommend::clinical_recommendations;
pub use report::{render_json, render_text, RiskAssessmentResult, ScoreReport};
pub use risk::{categorize, RiskCategory};

use rayon::prelude::*;

/// Assess one patient profile.
///
/// Pipeline: validate, score against the sex-specific linear model, apply
/// multiplicative adjustments, convert to a bounded percentage, categorize,
/// then derive explanations and recommendations from the raw profile. The
/// only failure mode is an out-of-range required field.
pub fn assess_risk(
    profile: &PatientClinicalProfile,
) -> Result<RiskAssessmentResult, InvalidProfile> {
    profile.validate()?;

    let base = scoring::base_risk_score(profile);
    let adjusted = scoring::apply_risk_adjustments(base, profile);
    let risk_percentage = scoring::risk_percentage(adjusted);
    let risk_category = risk::categorize(risk_percentage);

    Ok(RiskAssessmentResult {
        risk_percentage,
        risk_category,
        score: ScoreReport { base, adjusted },
        explanations: explain::explain_risk_factors(profile),
        recommendations: recommend::clinical_recommendations(risk_category, profile),
    })
}

/// Assess many profiles in parallel, preserving input order.
///
/// Each assessment is independent and shares no mutable state, so the batch
/// needs no coordination beyond the parallel map itself.
pub fn assess_batch(
    profiles: &[PatientClinicalProfile],
) -> Vec<Result<RiskAssessmentResult, InvalidProfile>> {
    profiles.par_iter().map(assess_risk).collect()
}

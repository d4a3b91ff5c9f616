//! Log-risk scoring: linear base score, multiplicative adjustments, and the
//! survival transform to a bounded percentage
//!
//! Global invariants enforced:
//! - Deterministic: identical profile yields bit-identical scores
//! - The percentage transform is monotonic in the adjusted score and always
//!   lands in [0, 100]

use crate::coefficients::CoefficientSet;
use crate::profile::{ActivityLevel, PatientClinicalProfile};

/// Compute the unadjusted log-risk score from the sex-specific linear model.
///
/// Score = age*c_age + chol*c_chol + hdl*c_hdl
///       + sbp * (treated or untreated BP coefficient)
///       + smoking term + diabetes term
///
/// Boolean terms contribute their full coefficient when true, zero when
/// false. No range checks here: the scorer accepts any numeric input, and
/// validation belongs to `PatientClinicalProfile::validate`.
pub fn base_risk_score(profile: &PatientClinicalProfile) -> f64 {
    let c = CoefficientSet::for_sex(profile.sex);

    let bp_coefficient = if profile.on_hypertension_treatment {
        c.systolic_bp_treated
    } else {
        c.systolic_bp_untreated
    };

    let mut score = f64::from(profile.age) * c.age
        + f64::from(profile.total_cholesterol) * c.total_cholesterol
        + f64::from(profile.hdl_cholesterol) * c.hdl_cholesterol
        + f64::from(profile.systolic_bp) * bp_coefficient;

    if profile.is_smoker {
        score += c.smoking;
    }
    if profile.has_diabetes {
        score += c.diabetes;
    }

    score
}

/// Apply multiplicative adjustments for factors outside the linear model.
///
/// Factors compose multiplicatively and independently:
/// - family history of CVD: x1.20
/// - BMI > 30: x1.15, else BMI > 25: x1.05 (at most one BMI branch)
/// - low activity: x1.10, high activity: x0.90, moderate: none
///
/// The multipliers apply to the raw log-risk score, so a negative base score
/// moves further negative under a >1 factor. Known quirk of the model,
/// kept as-is.
pub fn apply_risk_adjustments(base_score: f64, profile: &PatientClinicalProfile) -> f64 {
    let mut adjusted = base_score;

    if profile.has_family_history_cvd {
        adjusted *= 1.20;
    }

    if profile.body_mass_index > 30.0 {
        adjusted *= 1.15;
    } else if profile.body_mass_index > 25.0 {
        adjusted *= 1.05;
    }

    match profile.physical_activity_level {
        ActivityLevel::Low => adjusted *= 1.10,
        ActivityLevel::High => adjusted *= 0.90,
        ActivityLevel::Moderate => {}
    }

    adjusted
}

/// Map an adjusted log-risk score to a percentage in [0, 100].
///
/// Gompertz-type survival transform: p = 1 - exp(-exp(score)). The result
/// is monotonic and bounded for any finite score; the clamp is a defensive
/// invariant, not a correction.
pub fn risk_percentage(adjusted_score: f64) -> f64 {
    let probability = 1.0 - (-adjusted_score.exp()).exp();
    (probability * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Sex;

    fn profile(sex: Sex) -> PatientClinicalProfile {
        PatientClinicalProfile {
            sex,
            age: 55,
            systolic_bp: 150,
            total_cholesterol: 250,
            hdl_cholesterol: 35,
            on_hypertension_treatment: false,
            is_smoker: true,
            has_diabetes: false,
            has_family_history_cvd: false,
            body_mass_index: 28.0,
            physical_activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn base_score_matches_hand_computed_value() {
        // 55*0.04826 + 250*0.00340 + 35*-0.00832 + 150*0.00889 + 0.5180
        let score = base_risk_score(&profile(Sex::Male));
        assert!((score - 5.0646).abs() < 1e-9);
    }

    #[test]
    fn treated_bp_uses_the_treated_coefficient() {
        let mut p = profile(Sex::Male);
        let untreated = base_risk_score(&p);
        p.on_hypertension_treatment = true;
        let treated = base_risk_score(&p);
        // treated coefficient is smaller, so the score drops by sbp * delta
        assert!((untreated - treated - 150.0 * (0.00889 - 0.00764)).abs() < 1e-12);
    }

    #[test]
    fn boolean_terms_are_all_or_nothing() {
        let mut p = profile(Sex::Female);
        p.is_smoker = false;
        p.has_diabetes = false;
        let neither = base_risk_score(&p);
        p.is_smoker = true;
        p.has_diabetes = true;
        let both = base_risk_score(&p);
        assert!((both - neither - (0.5865 + 0.3842)).abs() < 1e-12);
    }

    #[test]
    fn adjustments_compose_multiplicatively() {
        let mut p = profile(Sex::Male);
        p.has_family_history_cvd = true;
        p.body_mass_index = 32.0;
        p.physical_activity_level = ActivityLevel::Low;
        let adjusted = apply_risk_adjustments(2.0, &p);
        assert!((adjusted - 2.0 * 1.20 * 1.15 * 1.10).abs() < 1e-12);
    }

    #[test]
    fn at_most_one_bmi_branch_applies() {
        let mut p = profile(Sex::Male);
        p.body_mass_index = 25.0;
        assert_eq!(apply_risk_adjustments(1.0, &p), 1.0);
        p.body_mass_index = 27.0;
        assert!((apply_risk_adjustments(1.0, &p) - 1.05).abs() < 1e-12);
        p.body_mass_index = 30.5;
        assert!((apply_risk_adjustments(1.0, &p) - 1.15).abs() < 1e-12);
    }

    #[test]
    fn negative_base_score_moves_further_negative() {
        // Known quirk: the multipliers act on the raw log-risk score, so a
        // >1 factor on a negative score lowers apparent risk.
        let mut p = profile(Sex::Male);
        p.has_family_history_cvd = true;
        let adjusted = apply_risk_adjustments(-1.0, &p);
        assert!((adjusted + 1.20).abs() < 1e-12);
        assert!(risk_percentage(adjusted) < risk_percentage(-1.0));
    }

    #[test]
    fn percentage_is_bounded_and_monotonic() {
        let mut last = risk_percentage(-50.0);
        assert!(last >= 0.0);
        for i in -49..=50 {
            let pct = risk_percentage(f64::from(i));
            assert!((0.0..=100.0).contains(&pct));
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(risk_percentage(50.0), 100.0);
        assert!(risk_percentage(-50.0) < 1e-10);
    }
}

//! Framingham risk coefficient tables
//!
//! Sex-specific linear coefficients for the base log-risk score. These are
//! domain constants carried over from the validated Framingham model; they
//! are read-only and must never be tuned at runtime.

use crate::profile::Sex;

/// One sex's coefficient row for the linear log-risk score.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientSet {
    pub age: f64,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub systolic_bp_treated: f64,
    pub systolic_bp_untreated: f64,
    pub smoking: f64,
    pub diabetes: f64,
}

pub const MALE: CoefficientSet = CoefficientSet {
    age: 0.04826,
    total_cholesterol: 0.00340,
    hdl_cholesterol: -0.00832,
    systolic_bp_treated: 0.00764,
    systolic_bp_untreated: 0.00889,
    smoking: 0.5180,
    diabetes: 0.4555,
};

pub const FEMALE: CoefficientSet = CoefficientSet {
    age: 0.07689,
    total_cholesterol: 0.00268,
    hdl_cholesterol: -0.00818,
    systolic_bp_treated: 0.00481,
    systolic_bp_untreated: 0.00645,
    smoking: 0.5865,
    diabetes: 0.3842,
};

impl CoefficientSet {
    /// Select the coefficient table for a patient's sex.
    pub fn for_sex(sex: Sex) -> &'static CoefficientSet {
        match sex {
            Sex::Male => &MALE,
            Sex::Female => &FEMALE,
        }
    }
}

//! Risk category classification
//!
//! Global invariants enforced:
//! - Total and deterministic over all percentages, no gaps or overlaps
//! - Boundary values belong to the higher bucket

use serde::{Deserialize, Serialize};

/// Clinical risk category for a 10-year CVD risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,      // < 10%
    Moderate, // 10-20%
    High,     // >= 20%
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
        }
    }
}

/// Bucket a risk percentage into Low / Moderate / High.
///
/// Exactly 10.0 is Moderate and exactly 20.0 is High; downstream alerting
/// keys off this boundary rule, so it must not drift.
pub fn categorize(risk_percentage: f64) -> RiskCategory {
    if risk_percentage < 10.0 {
        RiskCategory::Low
    } else if risk_percentage < 20.0 {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

//! Assessment result type and output rendering
//!
//! Global invariants enforced:
//! - Deterministic output: identical result renders byte-for-byte identical
//!   text and JSON

use crate::explain::RiskExplanation;
use crate::risk::RiskCategory;
use serde::{Deserialize, Serialize};

/// Intermediate log-risk scores, reported for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Linear base score before adjustments (can be negative).
    pub base: f64,
    /// Score after family history / BMI / activity multipliers.
    pub adjusted: f64,
}

/// Complete result of one risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskAssessmentResult {
    /// 10-year CVD risk, clamped to [0, 100].
    pub risk_percentage: f64,
    pub risk_category: RiskCategory,
    pub score: ScoreReport,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub explanations: Vec<RiskExplanation>,
    pub recommendations: Vec<String>,
}

/// Render a result as human-readable text output.
pub fn render_text(result: &RiskAssessmentResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "10-year cardiovascular risk: {:.1}% ({})\n",
        result.risk_percentage,
        result.risk_category.as_str()
    ));

    output.push_str("\nContributing factors:\n");
    if result.explanations.is_empty() {
        output.push_str("  (none flagged)\n");
    } else {
        for explanation in &result.explanations {
            output.push_str(&format!(
                "  {:<16} {}\n",
                explanation.factor, explanation.impact
            ));
        }
    }

    output.push_str("\nRecommendations:\n");
    for recommendation in &result.recommendations {
        output.push_str(&format!("  - {}\n", recommendation));
    }

    output
}

/// Render a result as JSON output.
pub fn render_json(result: &RiskAssessmentResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

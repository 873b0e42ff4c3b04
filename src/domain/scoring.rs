//! Rule-based assessment entry point and strategy selection.

use serde::{Deserialize, Serialize};

use crate::domain::{
    factors, recommend, weighted, HealthMetrics, RiskAssessment, RiskBand,
};

/// Run the full rule-based risk assessment.
///
/// Produces the six-factor breakdown in fixed order, the aggregate score
/// (sum of sub-scores, rounded, clamped to [0, 100]), the ordered
/// recommendation list, and the risk-level classification. Total over all
/// `f64` inputs; nothing is validated or rejected.
#[must_use]
pub fn assess_risk(metrics: &HealthMetrics) -> RiskAssessment {
    let factor_list = vec![
        factors::age_risk(metrics.age),
        factors::heart_rate_risk(metrics.heart_rate),
        factors::blood_pressure_risk(metrics.systolic_bp, metrics.diastolic_bp),
        factors::bmi_risk(metrics.bmi),
        factors::gender_age_risk(metrics.gender, metrics.age),
        factors::combined_risk(metrics),
    ];

    let total: f64 = factor_list.iter().map(|f| f.score).sum();
    let risk_score = total.round().clamp(0.0, 100.0) as u8;

    let recommendations = recommend::generate(&factor_list, metrics);
    let risk_level = RiskBand::from_score(risk_score).to_level();

    RiskAssessment {
        risk_score,
        factors: factor_list,
        recommendations,
        risk_level,
    }
}

/// Selector for the two independent scoring models.
///
/// The rule-based and sigmoid-weighted models are not reconciled and may
/// disagree; callers choose one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// Additive rule-based model with factor breakdown
    RuleBased,
    /// Sigmoid-weighted model, single score only
    Weighted,
}

impl ScoringStrategy {
    /// Compute the 0-100 score for these metrics under this strategy.
    #[must_use]
    pub fn score(&self, metrics: &HealthMetrics) -> u8 {
        match self {
            Self::RuleBased => assess_risk(metrics).risk_score,
            Self::Weighted => weighted::weighted_score(metrics),
        }
    }
}

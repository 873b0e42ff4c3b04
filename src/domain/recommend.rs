//! Recommendation generator: derives a prioritized, size-bounded list of
//! guidance strings from the factor breakdown and the original metrics.
//!
//! Insertion order is the priority order; the list is truncated to eight
//! entries with no re-ranking.

use crate::domain::{factors, HealthMetrics, RiskFactor};

/// Maximum number of recommendations returned per assessment.
pub const MAX_RECOMMENDATIONS: usize = 8;

fn find<'a>(factor_list: &'a [RiskFactor], label: &str) -> Option<&'a RiskFactor> {
    factor_list.iter().find(|f| f.factor == label)
}

/// Generate the ordered recommendation list for one assessment.
#[must_use]
pub fn generate(factor_list: &[RiskFactor], metrics: &HealthMetrics) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    let mut push = |s: &str| recommendations.push(s.to_string());

    if let Some(heart_rate) = find(factor_list, factors::HEART_RATE) {
        if heart_rate.score > 10.0 {
            push("Monitor heart rate regularly and consult a cardiologist");
            push("Consider stress management techniques and regular exercise");
        }
    }

    if let Some(bp) = find(factor_list, factors::BLOOD_PRESSURE) {
        if bp.score > 10.0 {
            push("Monitor blood pressure daily and limit sodium intake");
            push("Maintain a healthy diet rich in fruits and vegetables");
            push("Consult a healthcare provider about blood pressure management");
        }
    }

    if let Some(bmi) = find(factor_list, factors::BMI) {
        if bmi.score > 10.0 {
            if metrics.bmi >= 30.0 {
                push("Consider a medically supervised weight loss program");
                push("Increase physical activity gradually with professional guidance");
            } else if metrics.bmi < 18.5 {
                push("Consult a nutritionist for healthy weight gain strategies");
            } else {
                // Unreachable with the current BMI bands: score > 10 only
                // occurs below 18.5 or at 30 and above.
                push("Maintain current weight through balanced diet and exercise");
            }
        }
    }

    if let Some(age) = find(factor_list, factors::AGE_RISK) {
        if age.score > 15.0 {
            push("Schedule regular comprehensive health checkups");
            push("Consider preventive screenings appropriate for your age");
        }
    }

    // General wellness guidance is always present.
    push("Maintain a regular sleep schedule of 7-9 hours per night");
    push("Stay hydrated and limit alcohol consumption");
    push("Practice stress reduction techniques like meditation or yoga");

    if let Some(combined) = find(factor_list, factors::COMBINED) {
        if combined.score > 10.0 {
            push("Consider comprehensive cardiovascular risk assessment");
            push("Discuss preventive medications with your healthcare provider");
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

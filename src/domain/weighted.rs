//! Alternative sigmoid-weighted scoring model.
//!
//! Independent of the rule-based model: normalizes each input to [0, 1],
//! takes a fixed-weight linear combination, and pushes the sum through a
//! logistic sigmoid centered at 0.5. Produces a single 0-100 score with no
//! factor breakdown, and is never reconciled with the rule-based result.

use crate::domain::{Gender, HealthMetrics};

const WEIGHT_AGE: f64 = 0.25;
const WEIGHT_SYSTOLIC: f64 = 0.20;
const WEIGHT_DIASTOLIC: f64 = 0.15;
const WEIGHT_HEART_RATE: f64 = 0.15;
const WEIGHT_BMI: f64 = 0.15;
const WEIGHT_GENDER: f64 = 0.10;

/// Sigmoid steepness around the 0.5 midpoint.
const SIGMOID_STEEPNESS: f64 = 10.0;

/// Compute the sigmoid-weighted risk score.
///
/// Inputs are normalized against fixed ceilings (age/100, systolic/200,
/// diastolic/120, heart rate/150, BMI/50), each capped at 1.0. Gender maps
/// to 0.6 for male and 0.4 otherwise.
#[must_use]
pub fn weighted_score(metrics: &HealthMetrics) -> u8 {
    let normalized_age = (metrics.age / 100.0).min(1.0);
    let normalized_systolic = (metrics.systolic_bp / 200.0).min(1.0);
    let normalized_diastolic = (metrics.diastolic_bp / 120.0).min(1.0);
    let normalized_heart_rate = (metrics.heart_rate / 150.0).min(1.0);
    let normalized_bmi = (metrics.bmi / 50.0).min(1.0);
    let normalized_gender = if metrics.gender == Gender::Male { 0.6 } else { 0.4 };

    let weighted_sum = normalized_age * WEIGHT_AGE
        + normalized_systolic * WEIGHT_SYSTOLIC
        + normalized_diastolic * WEIGHT_DIASTOLIC
        + normalized_heart_rate * WEIGHT_HEART_RATE
        + normalized_bmi * WEIGHT_BMI
        + normalized_gender * WEIGHT_GENDER;

    let sigmoid = 1.0 / (1.0 + (-SIGMOID_STEEPNESS * (weighted_sum - 0.5)).exp());
    (sigmoid * 100.0).round() as u8
}

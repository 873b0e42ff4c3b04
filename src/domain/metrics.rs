//! Physiological input types for risk assessment.
//!
//! A `HealthMetrics` value is the complete input to one assessment. It is
//! read-only for the duration of the call; the engine never mutates it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient gender as used by the gender/age risk evaluator.
///
/// Anything that is not `male` or `female` falls into `Unspecified`, which
/// routes through the population-average branch of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Unspecified,
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unspecified,
        })
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// One set of physiological measurements for a single assessment.
///
/// Out-of-physiological-range values are not rejected anywhere in the crate;
/// they simply land in the extreme scoring bands. See [`range_warnings`]
/// for an advisory check callers may surface in a UI.
///
/// [`range_warnings`]: HealthMetrics::range_warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Resting heart rate in beats per minute
    pub heart_rate: f64,

    /// Systolic blood pressure in mmHg
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,

    /// Body mass index in kg/m²
    pub bmi: f64,

    /// Age in years
    pub age: f64,

    /// Patient gender
    pub gender: Gender,
}

impl HealthMetrics {
    /// Advisory range check for UI display.
    ///
    /// Returns a note per measurement outside its typical physiological
    /// range. The scoring engine never calls this and never rejects input;
    /// extreme values are scored by the extreme bands as-is.
    #[must_use]
    pub fn range_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0.0..=120.0).contains(&self.age) {
            warnings.push(format!("Age {} outside typical range [0, 120]", self.age));
        }
        if !(20.0..=250.0).contains(&self.heart_rate) {
            warnings.push(format!(
                "Heart rate {} outside typical range [20, 250]",
                self.heart_rate
            ));
        }
        if !(50.0..=250.0).contains(&self.systolic_bp) {
            warnings.push(format!(
                "Systolic BP {} outside typical range [50, 250]",
                self.systolic_bp
            ));
        }
        if !(30.0..=150.0).contains(&self.diastolic_bp) {
            warnings.push(format!(
                "Diastolic BP {} outside typical range [30, 150]",
                self.diastolic_bp
            ));
        }
        if !(10.0..=70.0).contains(&self.bmi) {
            warnings.push(format!("BMI {} outside typical range [10, 70]", self.bmi));
        }

        warnings
    }
}

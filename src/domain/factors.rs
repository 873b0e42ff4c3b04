//! Factor evaluators: one pure scoring function per physiological factor.
//!
//! Each evaluator partitions its input domain into contiguous bands, each
//! band carrying a fixed sub-score and description. Bands are checked in
//! ascending order and the first match wins, so a boundary value belongs to
//! the band whose upper-exclusive bound it equals. The heart rate evaluator
//! mixes `<` and `<=` across bands and the blood pressure evaluator mixes
//! OR and AND between adjacent categories; both are part of the observable
//! contract and must not be normalized.

use crate::domain::{Gender, HealthMetrics, RiskFactor};

/// Factor label for the age evaluator.
pub const AGE_RISK: &str = "Age Risk";
/// Factor label for the heart rate evaluator.
pub const HEART_RATE: &str = "Heart Rate";
/// Factor label for the blood pressure evaluator.
pub const BLOOD_PRESSURE: &str = "Blood Pressure";
/// Factor label for the BMI evaluator.
pub const BMI: &str = "BMI";
/// Factor label for the gender/age evaluator.
pub const GENDER_AGE: &str = "Gender & Age";
/// Factor label for the compounding risk evaluator.
pub const COMBINED: &str = "Combined Risk Factors";

/// Score the age factor (decade bands, 5 to 30 points).
#[must_use]
pub fn age_risk(age: f64) -> RiskFactor {
    let (score, description) = if age < 30.0 {
        (5.0, "Young age - lower cardiovascular risk")
    } else if age < 40.0 {
        (10.0, "Moderate age - some risk factors may emerge")
    } else if age < 50.0 {
        (15.0, "Middle age - increased risk awareness needed")
    } else if age < 60.0 {
        (20.0, "Higher age - regular monitoring recommended")
    } else if age < 70.0 {
        (25.0, "Senior age - increased cardiovascular risk")
    } else {
        (30.0, "Advanced age - comprehensive care needed")
    };

    RiskFactor::new(AGE_RISK, score, description)
}

/// Score the resting heart rate factor.
///
/// Note the lower bands use `<` and the upper bands use `<=`: a rate of
/// exactly 100 is normal, a rate of exactly 50 is the low-normal band.
#[must_use]
pub fn heart_rate_risk(heart_rate: f64) -> RiskFactor {
    let (score, description) = if heart_rate < 50.0 {
        (15.0, "Bradycardia - unusually low heart rate")
    } else if heart_rate < 60.0 {
        (8.0, "Lower resting heart rate - may indicate good fitness")
    } else if heart_rate <= 100.0 {
        (0.0, "Normal resting heart rate range")
    } else if heart_rate <= 120.0 {
        (12.0, "Elevated heart rate - may indicate stress or poor fitness")
    } else if heart_rate <= 150.0 {
        (20.0, "High heart rate - medical evaluation recommended")
    } else {
        (25.0, "Very high heart rate - immediate medical attention needed")
    };

    RiskFactor::new(HEART_RATE, score, description)
}

/// Score blood pressure against AHA-style categories.
///
/// Hypotension and the two hypertension stages combine systolic and
/// diastolic with OR; normal and elevated combine them with AND. The
/// asymmetry is part of the contract.
#[must_use]
pub fn blood_pressure_risk(systolic: f64, diastolic: f64) -> RiskFactor {
    let (score, description) = if systolic < 90.0 || diastolic < 60.0 {
        (10.0, "Low blood pressure - may cause dizziness")
    } else if systolic < 120.0 && diastolic < 80.0 {
        (0.0, "Normal blood pressure - excellent")
    } else if systolic < 130.0 && diastolic < 80.0 {
        (5.0, "Elevated blood pressure - lifestyle changes recommended")
    } else if systolic < 140.0 || diastolic < 90.0 {
        (15.0, "Stage 1 Hypertension - medical consultation advised")
    } else if systolic < 180.0 || diastolic < 120.0 {
        (25.0, "Stage 2 Hypertension - medical treatment likely needed")
    } else {
        (35.0, "Hypertensive Crisis - immediate medical attention required")
    };

    RiskFactor::new(BLOOD_PRESSURE, score, description)
}

/// Score the BMI factor (WHO weight classes).
#[must_use]
pub fn bmi_risk(bmi: f64) -> RiskFactor {
    let (score, description) = if bmi < 18.5 {
        (10.0, "Underweight - may indicate malnutrition")
    } else if bmi < 25.0 {
        (0.0, "Normal weight - healthy BMI range")
    } else if bmi < 30.0 {
        (10.0, "Overweight - increased health risks")
    } else if bmi < 35.0 {
        (20.0, "Obesity Class I - significant health risks")
    } else if bmi < 40.0 {
        (25.0, "Obesity Class II - severe health risks")
    } else {
        (30.0, "Obesity Class III - extreme health risks")
    };

    RiskFactor::new(BMI, score, description)
}

/// Score the gender/age interaction factor.
///
/// Unknown gender takes the flat population-average score.
#[must_use]
pub fn gender_age_risk(gender: Gender, age: f64) -> RiskFactor {
    let (score, description) = match gender {
        Gender::Male => {
            if age >= 45.0 {
                (8.0, "Male over 45 - increased cardiovascular risk")
            } else {
                (5.0, "Male - slightly higher cardiovascular risk than females")
            }
        }
        Gender::Female => {
            if age >= 55.0 {
                (8.0, "Post-menopausal female - increased cardiovascular risk")
            } else {
                (2.0, "Pre-menopausal female - lower cardiovascular risk")
            }
        }
        Gender::Unspecified => (5.0, "Gender risk assessment based on population averages"),
    };

    RiskFactor::new(GENDER_AGE, score, description)
}

/// Score the compounding bonus for co-occurring risk conditions.
///
/// Counts how many of four independent conditions hold and maps the count to
/// a bonus. This deliberately double-counts some signal already present in
/// the individual factors.
#[must_use]
pub fn combined_risk(metrics: &HealthMetrics) -> RiskFactor {
    let is_high_bp = metrics.systolic_bp >= 140.0 || metrics.diastolic_bp >= 90.0;
    let is_obese = metrics.bmi >= 30.0;
    let is_older = metrics.age >= 55.0;
    let is_tachycardic = metrics.heart_rate > 100.0;

    let count = [is_high_bp, is_obese, is_older, is_tachycardic]
        .iter()
        .filter(|&&c| c)
        .count();

    let (score, description) = if count >= 3 {
        (15.0, "Multiple risk factors present - comprehensive care needed")
    } else if count == 2 {
        (8.0, "Two risk factors present - increased monitoring recommended")
    } else if count == 1 {
        (3.0, "One risk factor present - lifestyle modifications beneficial")
    } else {
        (0.0, "No major risk factors - maintain healthy lifestyle")
    };

    RiskFactor::new(COMBINED, score, description)
}

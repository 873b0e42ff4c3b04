//! Risk assessment output types.
//!
//! Everything here is created fresh per assessment and owned exclusively by
//! the returned value; nothing is shared or mutated after construction.

use serde::{Deserialize, Serialize};

use crate::domain::HealthMetrics;

/// One scored, labeled contributor to the overall risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Fixed label identifying the evaluator that produced this factor
    pub factor: String,

    /// Non-negative sub-score contributed to the aggregate
    pub score: f64,

    /// Human-readable explanation for the matched band
    pub description: String,
}

impl RiskFactor {
    /// Create a new risk factor.
    #[must_use]
    pub fn new(factor: &str, score: f64, description: &str) -> Self {
        Self {
            factor: factor.to_string(),
            score,
            description: description.to_string(),
        }
    }
}

/// Ordinal risk classification over the clamped 0-100 aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// Score 0-20
    Low,
    /// Score 21-40
    Moderate,
    /// Score 41-60
    High,
    /// Score 61-80
    VeryHigh,
    /// Score 81-100
    Critical,
}

impl RiskBand {
    /// Classify a clamped aggregate score into its band.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score <= 20 {
            Self::Low
        } else if score <= 40 {
            Self::Moderate
        } else if score <= 60 {
            Self::High
        } else if score <= 80 {
            Self::VeryHigh
        } else {
            Self::Critical
        }
    }

    /// Get the user-facing band label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
            Self::Critical => "Critical Risk",
        }
    }

    /// Get the associated display color hint.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High => "orange",
            Self::VeryHigh | Self::Critical => "red",
        }
    }

    /// Get the fixed narrative description for this band.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => {
                "Your health metrics indicate low cardiovascular risk. Continue maintaining healthy habits."
            }
            Self::Moderate => {
                "Some risk factors are present. Consider lifestyle modifications and regular monitoring."
            }
            Self::High => {
                "Multiple risk factors detected. Medical consultation and intervention may be beneficial."
            }
            Self::VeryHigh => {
                "Significant health risks identified. Immediate medical attention and lifestyle changes recommended."
            }
            Self::Critical => {
                "Critical health risk levels detected. Urgent medical evaluation and intervention required."
            }
        }
    }

    /// Project the band into its serializable form.
    #[must_use]
    pub fn to_level(self) -> RiskLevel {
        RiskLevel {
            level: self.label().to_string(),
            color: self.color().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Serializable risk classification carried inside an assessment result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLevel {
    /// Band label, e.g. "Low Risk"
    pub level: String,

    /// Display color hint (green/yellow/orange/red), not semantically load-bearing
    pub color: String,

    /// Fixed narrative sentence for the band
    pub description: String,
}

/// Complete result of one rule-based risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Aggregate score, rounded and clamped to [0, 100]
    pub risk_score: u8,

    /// Exactly six factors in fixed order:
    /// age, heart rate, blood pressure, BMI, gender, combined
    pub factors: Vec<RiskFactor>,

    /// At most eight recommendations in insertion order
    pub recommendations: Vec<String>,

    /// Classification of the aggregate score
    pub risk_level: RiskLevel,
}

/// Persisted envelope around one assessment: the input that produced it,
/// an optional patient reference, and creation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Unique identifier
    pub id: String,

    /// Reference to patient (if available)
    pub patient_id: Option<String>,

    /// The metrics this assessment was computed from
    pub input: HealthMetrics,

    /// The assessment result
    pub assessment: RiskAssessment,

    /// Timestamp of assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AssessmentRecord {
    /// Create a new record without a patient reference.
    #[must_use]
    pub fn new(input: HealthMetrics, assessment: RiskAssessment) -> Self {
        Self {
            id: uuid_v4(),
            patient_id: None,
            input,
            assessment,
            created_at: chrono::Utc::now(),
        }
    }

    /// Create a new record tied to a patient.
    #[must_use]
    pub fn with_patient(
        patient_id: impl Into<String>,
        input: HealthMetrics,
        assessment: RiskAssessment,
    ) -> Self {
        Self {
            id: uuid_v4(),
            patient_id: Some(patient_id.into()),
            input,
            assessment,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy so record identifiers are not
/// predictable across platforms.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(20), RiskBand::Low);
        assert_eq!(RiskBand::from_score(21), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(40), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(60), RiskBand::High);
        assert_eq!(RiskBand::from_score(61), RiskBand::VeryHigh);
        assert_eq!(RiskBand::from_score(80), RiskBand::VeryHigh);
        assert_eq!(RiskBand::from_score(81), RiskBand::Critical);
        assert_eq!(RiskBand::from_score(100), RiskBand::Critical);
    }

    #[test]
    fn test_band_display_hints() {
        assert_eq!(RiskBand::Low.color(), "green");
        assert_eq!(RiskBand::Moderate.color(), "yellow");
        assert_eq!(RiskBand::High.color(), "orange");
        assert_eq!(RiskBand::VeryHigh.color(), "red");
        assert_eq!(RiskBand::Critical.color(), "red");
        assert_eq!(RiskBand::VeryHigh.label(), "Very High Risk");
    }

    #[test]
    fn test_uuid_generation() {
        let id1 = uuid_v4();
        let id2 = uuid_v4();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format with dashes
    }

    #[test]
    fn test_record_serde_field_names() {
        let metrics = HealthMetrics {
            heart_rate: 72.0,
            systolic_bp: 118.0,
            diastolic_bp: 76.0,
            bmi: 22.0,
            age: 35.0,
            gender: Gender::Female,
        };
        let assessment = crate::domain::assess_risk(&metrics);
        let record = AssessmentRecord::with_patient("p-1", metrics, assessment);

        let value = serde_json::to_value(&record).expect("Should serialize");
        let obj = value.as_object().expect("Should be object");
        for key in ["id", "patientId", "input", "assessment", "createdAt"] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert!(obj["assessment"]["riskScore"].is_u64());
        assert!(obj["assessment"]["riskLevel"]["level"].is_string());
    }
}

//! Assessment service: runs the scoring engine and manages history.
//!
//! Scoring itself is pure and infallible; the service adds record metadata,
//! logging, and persistence through the store port. A store failure is
//! logged but never fails the assessment, since the caller still holds a
//! complete result.

use std::sync::Arc;

use crate::adapters::StoreError;
use crate::domain::{assess_risk, AssessmentRecord, HealthMetrics, RiskBand};
use crate::ports::AssessmentStore;
use crate::RiskError;

/// Service for running assessments against a persistent history.
pub struct AssessmentService<S>
where
    S: AssessmentStore,
{
    store: Arc<S>,
}

/// Aggregate view over the stored assessment history.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSummary {
    /// Number of stored assessments
    pub total: usize,

    /// Mean risk score over all stored assessments (0 when empty)
    pub average_score: f64,

    /// Count of assessments per risk band, in band order
    /// (low, moderate, high, very high, critical)
    pub band_counts: [usize; 5],

    /// Assessments scoring above 60 (very high or critical)
    pub high_risk_count: usize,
}

impl<S> AssessmentService<S>
where
    S: AssessmentStore,
    S::Error: Into<StoreError>,
{
    /// Create a new assessment service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Assess the given metrics and persist the result.
    ///
    /// The record is returned even when persistence fails; the failure is
    /// logged at `warn`.
    ///
    /// # Errors
    /// Currently infallible in practice; the `Result` reserves room for
    /// stricter persistence policies behind the same signature.
    pub fn assess(
        &self,
        patient_id: Option<String>,
        metrics: HealthMetrics,
    ) -> Result<AssessmentRecord, RiskError> {
        let assessment = assess_risk(&metrics);

        tracing::info!(
            "Assessment complete: score={}, level={}, recommendations={}",
            assessment.risk_score,
            assessment.risk_level.level,
            assessment.recommendations.len()
        );

        let record = match patient_id {
            Some(id) => AssessmentRecord::with_patient(id, metrics, assessment),
            None => AssessmentRecord::new(metrics, assessment),
        };

        if let Err(e) = self.store.save(&record) {
            tracing::warn!("Failed to save assessment: {}", e);
        }

        Ok(record)
    }

    /// Get recent assessments from the store, newest first.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RiskError> {
        self.store
            .load_recent(limit)
            .map_err(|e| RiskError::Store(e.into()))
    }

    /// Get the total stored assessment count.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    pub fn count(&self) -> Result<usize, RiskError> {
        self.store.count().map_err(|e| RiskError::Store(e.into()))
    }

    /// Summarize the stored assessment history.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    pub fn summary(&self) -> Result<RiskSummary, RiskError> {
        let records = self
            .store
            .load_all()
            .map_err(|e| RiskError::Store(e.into()))?;

        let total = records.len();
        let mut band_counts = [0usize; 5];
        let mut high_risk_count = 0;
        let mut score_sum = 0u32;

        for record in &records {
            let score = record.assessment.risk_score;
            score_sum += u32::from(score);
            let band_index = match RiskBand::from_score(score) {
                RiskBand::Low => 0,
                RiskBand::Moderate => 1,
                RiskBand::High => 2,
                RiskBand::VeryHigh => 3,
                RiskBand::Critical => 4,
            };
            band_counts[band_index] += 1;
            if score > 60 {
                high_risk_count += 1;
            }
        }

        let average_score = if total == 0 {
            0.0
        } else {
            f64::from(score_sum) / total as f64
        };

        Ok(RiskSummary {
            total,
            average_score,
            band_counts,
            high_risk_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::Gender;

    fn metrics(age: f64, systolic_bp: f64) -> HealthMetrics {
        HealthMetrics {
            heart_rate: 72.0,
            systolic_bp,
            diastolic_bp: 76.0,
            bmi: 22.0,
            age,
            gender: Gender::Female,
        }
    }

    fn create_test_service() -> AssessmentService<MemoryStore> {
        AssessmentService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_assess_persists_record() {
        let service = create_test_service();

        let record = service
            .assess(Some("p-1".to_string()), metrics(35.0, 118.0))
            .expect("Should assess");

        assert_eq!(record.patient_id.as_deref(), Some("p-1"));
        assert_eq!(record.assessment.risk_score, 12);
        assert_eq!(service.count().expect("Should count"), 1);

        let recent = service.recent(10).expect("Should load");
        assert_eq!(recent[0].id, record.id);
    }

    #[test]
    fn test_summary_math() {
        let service = create_test_service();

        // score 12 (Low) and score 100 via an extreme profile (Critical)
        service
            .assess(None, metrics(35.0, 118.0))
            .expect("Should assess");
        let extreme = HealthMetrics {
            heart_rate: 130.0,
            systolic_bp: 150.0,
            diastolic_bp: 95.0,
            bmi: 33.0,
            age: 62.0,
            gender: Gender::Male,
        };
        service.assess(None, extreme).expect("Should assess");

        let summary = service.summary().expect("Should summarize");
        assert_eq!(summary.total, 2);
        assert!((summary.average_score - 56.0).abs() < f64::EPSILON);
        assert_eq!(summary.band_counts, [1, 0, 0, 0, 1]);
        assert_eq!(summary.high_risk_count, 1);
    }

    #[test]
    fn test_empty_summary() {
        let service = create_test_service();
        let summary = service.summary().expect("Should summarize");

        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.high_risk_count, 0);
    }

    #[test]
    fn test_store_failure_does_not_fail_assessment() {
        struct FailingStore;

        impl AssessmentStore for FailingStore {
            type Error = StoreError;

            fn save(&self, _record: &AssessmentRecord) -> Result<(), Self::Error> {
                Err(StoreError::LockPoisoned)
            }
            fn load_all(&self) -> Result<Vec<AssessmentRecord>, Self::Error> {
                Err(StoreError::LockPoisoned)
            }
            fn load_recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, Self::Error> {
                Err(StoreError::LockPoisoned)
            }
            fn count(&self) -> Result<usize, Self::Error> {
                Err(StoreError::LockPoisoned)
            }
            fn delete(&self, _id: &str) -> Result<(), Self::Error> {
                Err(StoreError::LockPoisoned)
            }
            fn clear(&self) -> Result<(), Self::Error> {
                Err(StoreError::LockPoisoned)
            }
        }

        let service = AssessmentService::new(Arc::new(FailingStore));
        let record = service
            .assess(None, metrics(35.0, 118.0))
            .expect("Scoring must succeed despite the store");
        assert_eq!(record.assessment.risk_score, 12);

        assert!(service.count().is_err());
    }
}

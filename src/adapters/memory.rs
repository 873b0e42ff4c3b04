//! In-memory assessment store.
//!
//! Reference implementation of the [`AssessmentStore`] port backed by a
//! mutex-guarded vector. Records are kept in insertion order; reads return
//! newest first.

use std::sync::Mutex;

use crate::domain::AssessmentRecord;
use crate::ports::AssessmentStore;

/// Errors from store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("assessment not found: {0}")]
    NotFound(String),
}

/// Mutex-guarded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentStore for MemoryStore {
    type Error = StoreError;

    fn save(&self, record: &AssessmentRecord) -> Result<(), Self::Error> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<AssessmentRecord>, Self::Error> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<AssessmentRecord> = records.clone();
        all.reverse();
        Ok(all)
    }

    fn load_recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, Self::Error> {
        let mut all = self.load_all()?;
        all.truncate(limit);
        Ok(all)
    }

    fn count(&self) -> Result<usize, Self::Error> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    fn delete(&self, id: &str) -> Result<(), Self::Error> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{assess_risk, Gender, HealthMetrics};

    fn record(age: f64) -> AssessmentRecord {
        let metrics = HealthMetrics {
            heart_rate: 72.0,
            systolic_bp: 118.0,
            diastolic_bp: 76.0,
            bmi: 22.0,
            age,
            gender: Gender::Female,
        };
        let assessment = assess_risk(&metrics);
        AssessmentRecord::new(metrics, assessment)
    }

    #[test]
    fn test_save_and_count() {
        let store = MemoryStore::new();
        assert_eq!(store.count().expect("Should count"), 0);

        store.save(&record(35.0)).expect("Should save");
        store.save(&record(50.0)).expect("Should save");
        assert_eq!(store.count().expect("Should count"), 2);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let store = MemoryStore::new();
        let first = record(35.0);
        let second = record(50.0);
        store.save(&first).expect("Should save");
        store.save(&second).expect("Should save");

        let recent = store.load_recent(1).expect("Should load");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, second.id);
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let r = record(35.0);
        store.save(&r).expect("Should save");

        store.delete(&r.id).expect("Should delete");
        assert_eq!(store.count().expect("Should count"), 0);

        assert!(matches!(
            store.delete(&r.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.save(&record(35.0)).expect("Should save");
        store.save(&record(50.0)).expect("Should save");

        store.clear().expect("Should clear");
        assert_eq!(store.count().expect("Should count"), 0);
    }
}

//! Assessment store port: trait for persisting assessment records.
//!
//! The engine never performs I/O; callers that want history implement this
//! trait over whatever backend they own.

use crate::domain::AssessmentRecord;

/// Trait for assessment persistence.
pub trait AssessmentStore: Send + Sync {
    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save an assessment record.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn save(&self, record: &AssessmentRecord) -> Result<(), Self::Error>;

    /// Load all assessment records, newest first.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn load_all(&self) -> Result<Vec<AssessmentRecord>, Self::Error>;

    /// Load recent assessment records (up to `limit`), newest first.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn load_recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, Self::Error>;

    /// Get the total count of stored records.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Delete a record by ID.
    ///
    /// # Errors
    /// Returns error if the record does not exist or the operation fails.
    fn delete(&self, id: &str) -> Result<(), Self::Error>;

    /// Clear all stored records.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn clear(&self) -> Result<(), Self::Error>;
}

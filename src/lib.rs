//! # healthsource-risk
//!
//! Deterministic, rule-based cardiovascular health risk scoring.
//!
//! This crate provides:
//! - A six-factor additive scoring engine with a risk-level classification
//!   and a prioritized recommendation list
//! - An alternative sigmoid-weighted scoring model
//! - An assessment service with pluggable persistence
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Pure scoring engine and assessment types
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (in-memory store)
//! - `application`: Use cases orchestrating domain and ports
//!
//! Both scoring entry points ([`assess_risk`] and [`weighted_score`]) are
//! total over their numeric inputs: out-of-physiological-range values fall
//! into the extreme scoring bands rather than producing errors.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use domain::{
    assess_risk, weighted_score, Gender, HealthMetrics, RiskAssessment, RiskBand, RiskFactor,
    RiskLevel, ScoringStrategy,
};

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, RiskError>;

/// Main error type for healthsource-risk
///
/// The scoring engine itself never fails; these variants cover the service
/// layer and the serialization boundary.
#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("Storage operation failed: {0}")]
    Store(#[from] adapters::StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

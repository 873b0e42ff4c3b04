//! Application layer: use cases and services.
//!
//! This module orchestrates the pure scoring engine with the store port.

mod assessment;

pub use assessment::{AssessmentService, RiskSummary};

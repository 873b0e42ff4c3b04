//! Domain layer: metrics, the scoring engine, and assessment types.
//!
//! Everything here is pure computation with no I/O and no shared state.
//! Both entry points are total over their inputs; out-of-range values land
//! in the extreme scoring bands instead of being rejected.

mod assessment;
pub mod factors;
mod metrics;
pub mod recommend;
mod scoring;
mod weighted;

pub use assessment::{AssessmentRecord, RiskAssessment, RiskBand, RiskFactor, RiskLevel};
pub use metrics::{Gender, HealthMetrics};
pub use scoring::{assess_risk, ScoringStrategy};
pub use weighted::weighted_score;

//! Ports layer: trait definitions for external collaborators.
//!
//! The scoring engine itself is pure; persistence is the one boundary its
//! callers need, expressed here as a trait so the application layer stays
//! independent of any concrete backend.

mod store;

pub use store::AssessmentStore;

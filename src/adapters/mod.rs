//! Adapters layer: concrete implementations of ports.
//!
//! - `memory`: in-memory assessment store, the reference backend used by the
//!   service layer, tests, and the CLI.

pub mod memory;

pub use memory::{MemoryStore, StoreError};

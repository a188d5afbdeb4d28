//! # viewplan-core
//!
//! Foundation crate for the viewplan pairwise planner.
//! Defines view tokens, the overlap collaborator trait, errors, config,
//! tracing setup, and constants. `viewplan-pairwise` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PlanConfig;
pub use errors::{ConfigError, ErrorCode, PairwiseError};
pub use traits::{HasTimepoint, OverlapDetection, ViewToken};
pub use types::{Timepoint, ViewId};

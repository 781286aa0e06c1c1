//! Constraint engine and candidate filtering

mod constraint_engine;
mod filter;

pub use constraint_engine::{ConstraintEngine, FetchStatus};
pub use filter::{CandidateFilter, matching_indices};

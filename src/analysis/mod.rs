//! Site video analysis.
//!
//! Backends produce [`AnalysisSnapshot`](crate::models::AnalysisSnapshot)s
//! from uploaded videos. Only the simulated backend exists.

mod backend;
mod simulator;

pub use backend::{AnalysisBackend, AnalysisError, InputPolicy};
pub use simulator::{analyze_snapshot, SimulatedBackend, DEFAULT_ANALYSIS_DELAY};

//! Construct.AI - construction site video analysis, simulated.
//!
//! Uploads are timed, analyses resolve with fixed sample data after an
//! artificial delay, and reports derive a handful of percentages from the
//! resulting snapshot. Nothing touches real video or persists anything.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod notify;
pub mod report;
pub mod sample_data;
pub mod services;

pub use analysis::{analyze_snapshot, AnalysisBackend, AnalysisError, SimulatedBackend};
pub use models::{AnalysisSnapshot, ProjectSummary, VideoHandle};
pub use sample_data::generate_sample_data;
pub use services::list_projects;

//! Data models for site analysis.

mod project;
mod snapshot;
mod video;

pub use project::ProjectSummary;
pub use snapshot::{
    saturating_total, AnalysisSnapshot, FleetStats, HazardStats, ProgressSummary, Severity,
    SeverityCount, SnapshotIssue, TimeOfDayCount, TypeCount, WorkerStats,
};
pub use video::{mimetype_matches, VideoHandle};

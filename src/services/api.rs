//! Dashboard service entry points.
//!
//! These mirror what a real backend API would expose: run an analysis on an
//! uploaded video, and list the user's projects.

use thiserror::Error;

use crate::analysis::AnalysisBackend;
use crate::models::{AnalysisSnapshot, ProjectSummary, VideoHandle};
use crate::sample_data::sample_projects;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to analyze video: {0}")]
    AnalysisFailed(String),

    #[error("Could not load projects: {0}")]
    ProjectsUnavailable(String),
}

/// Analyze a video with the given backend.
///
/// Backend errors are logged and reported as [`ServiceError::AnalysisFailed`].
pub async fn analyze_video<B>(
    backend: &B,
    video: &VideoHandle,
) -> Result<AnalysisSnapshot, ServiceError>
where
    B: AnalysisBackend + ?Sized,
{
    match backend.analyze(video).await {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            tracing::error!(
                "Error analyzing video {} with {}: {}",
                video.name,
                backend.backend_id(),
                e
            );
            Err(ServiceError::AnalysisFailed(e.to_string()))
        }
    }
}

/// Fetch the user's projects.
pub async fn list_projects() -> Result<Vec<ProjectSummary>, ServiceError> {
    Ok(sample_projects())
}

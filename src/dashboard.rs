//! Dashboard session: upload, analyze, and report in one flow.
//!
//! The session owns its state outright. Progress and analysis results come
//! back through futures and channels; user-facing messages go out through a
//! [`Notifier`].

use thiserror::Error;

use crate::analysis::{AnalysisBackend, SimulatedBackend};
use crate::config::Settings;
use crate::models::{AnalysisSnapshot, ProjectSummary, VideoHandle};
use crate::notify::{Notice, Notifier};
use crate::services::{analyze_video, list_projects, ServiceError, UploadHandle, UploadSimulator};

/// Errors from dashboard actions.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("No video uploaded")]
    NoVideo,

    #[error("Upload of {0} did not complete")]
    UploadInterrupted(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Where the session is in the upload/analyze flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing uploaded yet.
    Empty,
    /// A video is ready for analysis.
    Uploaded,
    /// A report is available.
    Ready,
}

/// One user's dashboard session.
pub struct DashboardSession<B: AnalysisBackend> {
    backend: B,
    uploader: UploadSimulator,
    notifier: Notifier,
    video: Option<VideoHandle>,
    snapshot: Option<AnalysisSnapshot>,
    projects: Vec<ProjectSummary>,
}

impl DashboardSession<SimulatedBackend> {
    /// Create a session with the simulated backend configured from settings.
    pub fn from_settings(settings: &Settings, notifier: Notifier) -> Self {
        Self::new(
            SimulatedBackend::from_settings(settings),
            UploadSimulator::from_settings(settings),
            notifier,
        )
    }
}

impl<B: AnalysisBackend> DashboardSession<B> {
    pub fn new(backend: B, uploader: UploadSimulator, notifier: Notifier) -> Self {
        Self {
            backend,
            uploader,
            notifier,
            video: None,
            snapshot: None,
            projects: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.video, &self.snapshot) {
            (_, Some(_)) => SessionState::Ready,
            (Some(_), None) => SessionState::Uploaded,
            (None, None) => SessionState::Empty,
        }
    }

    pub fn video(&self) -> Option<&VideoHandle> {
        self.video.as_ref()
    }

    pub fn snapshot(&self) -> Option<&AnalysisSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Start the upload timer for a video.
    ///
    /// Non-video files are rejected with a destructive notice. Call
    /// [`finish_upload`](Self::finish_upload) once the returned handle completes.
    pub fn upload(&self, video: &VideoHandle) -> Result<UploadHandle, DashboardError> {
        if !video.is_video() {
            tracing::warn!(
                "Rejected upload of {} ({})",
                video.name,
                video.mime_type.as_deref().unwrap_or("unknown type")
            );
            self.notifier.send(Notice::error(
                "Invalid file type",
                "Please upload a video file.",
            ));
            return Err(DashboardError::InvalidFileType(video.name.clone()));
        }

        tracing::debug!("Uploading {} ({})", video.name, video.display_size());
        Ok(self.uploader.start())
    }

    /// Record a completed upload.
    pub fn finish_upload(&mut self, video: VideoHandle) {
        tracing::info!("Video {} uploaded", video.name);
        self.video = Some(video);
        self.notifier.send(Notice::info(
            "Video uploaded",
            "Your video is ready for analysis.",
        ));
    }

    /// Upload a video and wait for the progress timer to finish.
    pub async fn upload_and_wait(&mut self, video: VideoHandle) -> Result<(), DashboardError> {
        let handle = self.upload(&video)?;
        if !handle.wait().await {
            return Err(DashboardError::UploadInterrupted(video.name));
        }
        self.finish_upload(video);
        Ok(())
    }

    /// Forget the uploaded video. The last report stays available.
    pub fn remove_video(&mut self) {
        self.video = None;
    }

    /// Analyze the uploaded video and keep the resulting snapshot.
    pub async fn analyze(&mut self) -> Result<&AnalysisSnapshot, DashboardError> {
        let Some(video) = self.video.as_ref() else {
            return Err(DashboardError::NoVideo);
        };

        self.notifier.send(Notice::info(
            "Analysis started",
            "Your video is being processed. This may take a few moments.",
        ));

        match analyze_video(&self.backend, video).await {
            Ok(snapshot) => {
                self.notifier.send(Notice::info(
                    "Analysis complete",
                    "Your video analysis has been completed successfully.",
                ));
                Ok(&*self.snapshot.insert(snapshot))
            }
            Err(e) => {
                self.notifier.send(Notice::error(
                    "Analysis failed",
                    "There was an error analyzing your video. Please try again.",
                ));
                Err(e.into())
            }
        }
    }

    /// Load the user's projects into the session.
    pub async fn load_projects(&mut self) -> Result<&[ProjectSummary], DashboardError> {
        match list_projects().await {
            Ok(projects) => {
                self.projects = projects;
                Ok(self.projects.as_slice())
            }
            Err(e) => {
                tracing::error!("Error fetching projects: {}", e);
                self.notifier.send(Notice::error(
                    "Error loading projects",
                    "Could not load your projects. Please try again later.",
                ));
                Err(e.into())
            }
        }
    }
}

//! Analysis backend abstraction.
//!
//! A backend turns an uploaded site video into an [`AnalysisSnapshot`]. The
//! only backend shipped is the simulator; the trait is the seam where a real
//! inference client would plug in.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AnalysisSnapshot, VideoHandle};

/// Errors from analysis backends.
///
/// The legacy simulated analysis never fails. `InvalidInput` and
/// `ProcessingTimeout` are only produced when the strict input policy or a
/// processing timeout is configured.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported mimetype: {0}")]
    UnsupportedMimetype(String),

    #[error("Processing timed out after {0} ms")]
    ProcessingTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a backend treats the video handle it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Accept any handle without looking at it.
    #[default]
    Unchecked,
    /// Require a non-empty file with a `video/*` media type.
    RequireVideo,
}

impl InputPolicy {
    /// Validate a handle against this policy.
    pub fn check(&self, video: &VideoHandle) -> Result<(), AnalysisError> {
        match self {
            Self::Unchecked => Ok(()),
            Self::RequireVideo => {
                if video.is_empty() {
                    return Err(AnalysisError::InvalidInput(format!(
                        "{} is empty",
                        video.name
                    )));
                }
                match video.mime_type.as_deref() {
                    Some(_) if video.is_video() => Ok(()),
                    Some(mime) => Err(AnalysisError::UnsupportedMimetype(mime.to_string())),
                    None => Err(AnalysisError::InvalidInput(format!(
                        "{} has no recognizable media type",
                        video.name
                    ))),
                }
            }
        }
    }
}

/// Trait for site analysis backends.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Get the backend identifier (e.g., "simulated").
    fn backend_id(&self) -> &str;

    /// Analyze a site video and produce a snapshot.
    async fn analyze(&self, video: &VideoHandle) -> Result<AnalysisSnapshot, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_accepts_anything() {
        let empty = VideoHandle::new("", 0, None);
        assert!(InputPolicy::Unchecked.check(&empty).is_ok());
    }

    #[test]
    fn test_require_video() {
        let policy = InputPolicy::RequireVideo;

        let ok = VideoHandle::new("site.mov", 2048, Some("video/quicktime"));
        assert!(policy.check(&ok).is_ok());

        let empty = VideoHandle::new("site.mov", 0, Some("video/quicktime"));
        assert!(matches!(
            policy.check(&empty),
            Err(AnalysisError::InvalidInput(_))
        ));

        let pdf = VideoHandle::new("plan.pdf", 2048, Some("application/pdf"));
        match policy.check(&pdf) {
            Err(AnalysisError::UnsupportedMimetype(m)) => assert_eq!(m, "application/pdf"),
            other => panic!("unexpected result: {:?}", other),
        }

        let unknown = VideoHandle::new("blob", 2048, None);
        assert!(matches!(
            policy.check(&unknown),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}

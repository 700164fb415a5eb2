//! Simulated analysis backend.
//!
//! Waits a fixed artificial delay and then resolves with the sample snapshot.
//! The video contents are never read.

use std::time::Duration;

use async_trait::async_trait;

use super::backend::{AnalysisBackend, AnalysisError, InputPolicy};
use crate::config::Settings;
use crate::models::{AnalysisSnapshot, VideoHandle};
use crate::sample_data::generate_sample_data;

/// Default artificial processing delay (3 seconds).
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_secs(3);

/// Backend that fakes a remote inference request.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    policy: InputPolicy,
    timeout: Option<Duration>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay: DEFAULT_ANALYSIS_DELAY,
            policy: InputPolicy::Unchecked,
            timeout: None,
        }
    }
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from application settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            delay: Duration::from_millis(settings.analysis_delay_ms),
            policy: if settings.strict_input {
                InputPolicy::RequireVideo
            } else {
                InputPolicy::Unchecked
            },
            timeout: settings.analysis_timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fail with [`AnalysisError::ProcessingTimeout`] if processing takes longer than `limit`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }
}

#[async_trait]
impl AnalysisBackend for SimulatedBackend {
    fn backend_id(&self) -> &str {
        "simulated"
    }

    async fn analyze(&self, video: &VideoHandle) -> Result<AnalysisSnapshot, AnalysisError> {
        if let Err(e) = self.policy.check(video) {
            tracing::warn!("Rejected video {}: {}", video.name, e);
            return Err(e);
        }

        tracing::info!(
            "Analyzing {} ({}) with simulated backend, delay {:?}",
            video.name,
            video.display_size(),
            self.delay
        );

        let delay = self.delay;
        let work = async move {
            tokio::time::sleep(delay).await;
            generate_sample_data()
        };

        let snapshot = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, work)
                .await
                .map_err(|_| AnalysisError::ProcessingTimeout(limit.as_millis() as u64))?,
            None => work.await,
        };

        tracing::debug!("Simulated analysis of {} finished", video.name);
        Ok(snapshot)
    }
}

/// Run the default simulated analysis on a video.
///
/// Resolves with the sample snapshot after [`DEFAULT_ANALYSIS_DELAY`] and
/// never fails.
pub async fn analyze_snapshot(video: &VideoHandle) -> Result<AnalysisSnapshot, AnalysisError> {
    SimulatedBackend::default().analyze(video).await
}

//! Simulated upload progress.
//!
//! A purely cosmetic timer that counts a displayed percentage from 0 to 100.
//! It measures nothing and is not linked to the analysis call.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Settings;

/// Events emitted by a running upload timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    /// Displayed percentage, 0..=100.
    Progress(u8),
    /// The counter reached 100 and stopped.
    Complete,
}

/// Configuration for the upload progress timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSimulator {
    step: u8,
    interval: Duration,
}

impl Default for UploadSimulator {
    fn default() -> Self {
        Self::new(10, Duration::from_millis(300))
    }
}

impl UploadSimulator {
    /// Create a simulator advancing by `step` percent every `interval`.
    ///
    /// A zero step or interval is raised to the smallest usable value so the
    /// timer always terminates.
    pub fn new(step: u8, interval: Duration) -> Self {
        Self {
            step: step.clamp(1, 100),
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.upload_step,
            Duration::from_millis(settings.upload_interval_ms),
        )
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks from 0 to 100.
    pub fn tick_count(&self) -> u32 {
        100u32.div_ceil(self.step as u32)
    }

    /// Total time from start to completion.
    pub fn total_duration(&self) -> Duration {
        self.interval * self.tick_count()
    }

    /// Start the timer on the current runtime.
    ///
    /// Emits `Progress(0)` immediately, then one `Progress` per tick, then
    /// `Complete`. Dropping the returned handle's receiver stops the timer at
    /// its next tick.
    pub fn start(&self) -> UploadHandle {
        let (tx, rx) = mpsc::channel(16);
        let step = self.step;
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut progress: u8 = 0;
            if tx.send(UploadEvent::Progress(progress)).await.is_err() {
                return;
            }

            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;

            while progress < 100 {
                ticker.tick().await;
                progress = progress.saturating_add(step).min(100);
                tracing::debug!("Upload progress {}%", progress);
                if tx.send(UploadEvent::Progress(progress)).await.is_err() {
                    tracing::debug!("Upload progress receiver dropped at {}%", progress);
                    return;
                }
            }

            let _ = tx.send(UploadEvent::Complete).await;
        });

        UploadHandle { events: rx, task }
    }
}

/// Handle to a running upload timer.
#[derive(Debug)]
pub struct UploadHandle {
    events: mpsc::Receiver<UploadEvent>,
    task: JoinHandle<()>,
}

impl UploadHandle {
    /// Next event, or None once the timer has stopped.
    pub async fn next(&mut self) -> Option<UploadEvent> {
        self.events.recv().await
    }

    /// Drain events until the timer stops, calling `on_progress` for each percentage.
    /// Returns true if the upload reached completion.
    pub async fn wait_with<F>(mut self, mut on_progress: F) -> bool
    where
        F: FnMut(u8),
    {
        while let Some(event) = self.events.recv().await {
            match event {
                UploadEvent::Progress(p) => on_progress(p),
                UploadEvent::Complete => return true,
            }
        }
        false
    }

    /// Drain events until the timer stops. Returns true if the upload completed.
    pub async fn wait(self) -> bool {
        self.wait_with(|_| {}).await
    }

    /// Stop the timer and wait for its task to exit.
    ///
    /// Returns true if the timer was still running when cancelled.
    pub async fn cancel(self) -> bool {
        self.task.abort();
        match self.task.await {
            Err(e) => e.is_cancelled(),
            Ok(()) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_counts_to_one_hundred_in_steps() {
        let mut seen = Vec::new();
        let completed = UploadSimulator::default()
            .start()
            .wait_with(|p| seen.push(p))
            .await;

        assert!(completed);
        assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_time() {
        let simulator = UploadSimulator::default();
        assert_eq!(simulator.total_duration(), Duration::from_secs(3));

        let start = Instant::now();
        assert!(simulator.start().wait().await);
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert!(start.elapsed() < Duration::from_millis(3300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_uneven_step_clamps_at_one_hundred() {
        let mut seen = Vec::new();
        UploadSimulator::new(30, Duration::from_millis(10))
            .start()
            .wait_with(|p| seen.push(p))
            .await;
        assert_eq!(seen, vec![0, 30, 60, 90, 100]);
    }

    #[test]
    fn test_zero_step_is_normalized() {
        let simulator = UploadSimulator::new(0, Duration::ZERO);
        assert_eq!(simulator.step(), 1);
        assert_eq!(simulator.interval(), Duration::from_millis(1));
        assert_eq!(simulator.tick_count(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_sequence_ends_with_complete() {
        let mut handle = UploadSimulator::new(50, Duration::from_millis(5)).start();
        assert_eq!(handle.next().await, Some(UploadEvent::Progress(0)));
        assert_eq!(handle.next().await, Some(UploadEvent::Progress(50)));
        assert_eq!(handle.next().await, Some(UploadEvent::Progress(100)));
        assert_eq!(handle.next().await, Some(UploadEvent::Complete));
        assert_eq!(handle.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_timer() {
        let mut handle = UploadSimulator::default().start();
        assert_eq!(handle.next().await, Some(UploadEvent::Progress(0)));
        assert!(handle.cancel().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion() {
        let mut handle = UploadSimulator::new(100, Duration::from_millis(5)).start();
        while handle.next().await.is_some() {}
        assert!(!handle.cancel().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_stops_at_next_tick() {
        let simulator = UploadSimulator::default();
        let mut handle = simulator.start();
        assert_eq!(handle.next().await, Some(UploadEvent::Progress(0)));

        let UploadHandle { events, task } = handle;
        drop(events);

        let start = Instant::now();
        task.await.unwrap();
        assert!(start.elapsed() <= simulator.interval());
        assert!(start.elapsed() < simulator.total_duration());
    }
}

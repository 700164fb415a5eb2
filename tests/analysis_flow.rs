//! End-to-end Analysis Flow Tests
//!
//! Drives the public API the way the dashboard does: upload a video, run the
//! simulated analysis, derive report figures, and list projects.

use std::time::Duration;

use constructai::analysis::{analyze_snapshot, AnalysisBackend, InputPolicy, SimulatedBackend};
use constructai::dashboard::{DashboardSession, SessionState};
use constructai::models::{AnalysisSnapshot, FleetStats, VideoHandle};
use constructai::notify;
use constructai::report::{DerivedMetrics, ReportCharts};
use constructai::sample_data::generate_sample_data;
use constructai::services::{list_projects, UploadSimulator};
use tokio::time::Instant;

fn assert_split_identities(s: &AnalysisSnapshot) {
    assert_eq!(s.workers.with_safety_gear + s.workers.without_safety_gear, s.workers.count);
    assert_eq!(s.workers.active + s.workers.idle, s.workers.count);
    for fleet in [&s.vehicles, &s.equipment] {
        assert_eq!(fleet.active + fleet.idle, fleet.count);
    }
    assert!(s.progress.completion_percentage <= 100);
}

#[tokio::test(start_paused = true)]
async fn analysis_resolves_with_generator_snapshot() {
    let inputs = [
        VideoHandle::new("site.mp4", 50 * 1024 * 1024, Some("video/mp4")),
        VideoHandle::new("", 0, None),
        VideoHandle::new("notes.txt", 12, Some("text/plain")),
    ];

    for video in &inputs {
        let snapshot = analyze_snapshot(video).await.expect("default analysis never fails");
        assert_eq!(snapshot, generate_sample_data());
        assert_split_identities(&snapshot);
    }
}

#[tokio::test(start_paused = true)]
async fn concurrent_analyses_do_not_serialize() {
    let backend = SimulatedBackend::new().with_delay(Duration::from_secs(3));
    let video = VideoHandle::new("site.mp4", 1, Some("video/mp4"));

    let start = Instant::now();
    let results = futures::future::join_all((0..4).map(|_| backend.analyze(&video))).await;
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 4);
    for result in results {
        assert_eq!(result.unwrap(), generate_sample_data());
    }
    assert!(elapsed >= Duration::from_secs(3));
    assert!(elapsed < Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn spawned_analyses_are_independent() {
    let fast = tokio::spawn(async {
        let backend = SimulatedBackend::new().with_delay(Duration::from_millis(500));
        let video = VideoHandle::new("a.mp4", 1, Some("video/mp4"));
        let start = Instant::now();
        backend.analyze(&video).await.unwrap();
        start.elapsed()
    });
    let slow = tokio::spawn(async {
        let backend = SimulatedBackend::new().with_delay(Duration::from_secs(5));
        let video = VideoHandle::new("b.mp4", 1, Some("video/mp4"));
        let start = Instant::now();
        backend.analyze(&video).await.unwrap();
        start.elapsed()
    });

    let fast_elapsed = fast.await.unwrap();
    let slow_elapsed = slow.await.unwrap();
    assert!(fast_elapsed < Duration::from_secs(1));
    assert!(slow_elapsed >= Duration::from_secs(5));
}

#[test]
fn fixture_worker_rates() {
    let metrics = DerivedMetrics::from_snapshot(&generate_sample_data());
    assert_eq!(metrics.safety_compliance, 88);
    assert_eq!(metrics.worker_productivity, 75);
}

#[test]
fn zero_count_category_has_defined_rate() {
    let mut snapshot = generate_sample_data();
    snapshot.equipment = FleetStats {
        count: 0,
        types: Vec::new(),
        active: 0,
        idle: 0,
    };

    let metrics = DerivedMetrics::from_snapshot(&snapshot);
    assert_eq!(metrics.equipment_utilization, 0);

    let charts = ReportCharts::from_snapshot(&snapshot);
    assert!(charts.equipment_activity.is_empty());
}

#[tokio::test]
async fn list_projects_returns_fixture() {
    let projects = list_projects().await.unwrap();
    let summary: Vec<_> = projects
        .iter()
        .map(|p| (p.id.as_str(), p.progress_percent))
        .collect();
    assert_eq!(
        summary,
        [("proj-001", 68), ("proj-002", 42), ("proj-003", 24)]
    );
}

#[tokio::test(start_paused = true)]
async fn upload_timer_and_analysis_run_independently() {
    let uploader = UploadSimulator::new(10, Duration::from_millis(300));
    let backend = SimulatedBackend::new().with_delay(Duration::from_secs(1));
    let video = VideoHandle::new("site.mp4", 1, Some("video/mp4"));

    let start = Instant::now();
    let upload = uploader.start();
    let analysis = async {
        let snapshot = backend.analyze(&video).await.unwrap();
        (snapshot, start.elapsed())
    };

    let (upload_done, (snapshot, analysis_elapsed)) = tokio::join!(upload.wait(), analysis);
    assert!(upload_done);
    assert_eq!(snapshot.workers.count, 24);
    assert!(analysis_elapsed < uploader.total_duration());
    assert!(start.elapsed() >= uploader.total_duration());
}

#[tokio::test(start_paused = true)]
async fn dashboard_flow_with_strict_policy() {
    let (notifier, mut notices) = notify::channel();
    let mut session = DashboardSession::new(
        SimulatedBackend::new().with_policy(InputPolicy::RequireVideo),
        UploadSimulator::new(50, Duration::from_millis(10)),
        notifier,
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walkthrough.mov");
    std::fs::write(&path, vec![0u8; 4096]).unwrap();
    let video = VideoHandle::from_path(&path).await.unwrap();
    assert!(video.is_video());

    session.upload_and_wait(video).await.unwrap();
    session.analyze().await.unwrap();
    assert_eq!(session.state(), SessionState::Ready);

    let titles: Vec<_> = notices.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Video uploaded", "Analysis started", "Analysis complete"]);
}

//! Video analysis commands.

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::dashboard::DashboardSession;
use crate::models::{AnalysisSnapshot, VideoHandle};
use crate::notify::{self, NoticeReceiver};
use crate::report::render_report;
use crate::sample_data::generate_sample_data;

/// Print queued notices to stderr.
fn print_notices(receiver: &mut NoticeReceiver) {
    for notice in receiver.drain() {
        if notice.is_error() {
            eprintln!(
                "{} {}: {}",
                style("✗").red(),
                style(&notice.title).red().bold(),
                notice.description
            );
        } else {
            eprintln!(
                "{} {}: {}",
                style("✓").green(),
                style(&notice.title).bold(),
                style(&notice.description).dim()
            );
        }
    }
}

fn print_snapshot(snapshot: &AnalysisSnapshot, json: bool) -> anyhow::Result<()> {
    for issue in snapshot.check_invariants() {
        tracing::warn!("Inconsistent snapshot: {}", issue);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        print!("{}", render_report(snapshot, &chrono::Local::now()));
    }
    Ok(())
}

/// Simulate uploading and analyzing a video file.
pub async fn cmd_analyze(settings: &Settings, file: &Path, json: bool) -> anyhow::Result<()> {
    let video = VideoHandle::from_path(file)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot open {}: {}", file.display(), e))?;

    let (notifier, mut notices) = notify::channel();
    let mut session = DashboardSession::from_settings(settings, notifier);

    eprintln!(
        "{} Uploading {} ({})",
        style("→").cyan(),
        video.name,
        video.display_size()
    );

    let upload = match session.upload(&video) {
        Ok(handle) => handle,
        Err(e) => {
            print_notices(&mut notices);
            return Err(e.into());
        }
    };

    let progress = ProgressBar::new(100);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}% {wide_msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    progress.set_message("Uploading...");

    let completed = upload.wait_with(|p| progress.set_position(p as u64)).await;
    if !completed {
        progress.abandon_with_message("Upload interrupted");
        anyhow::bail!("Upload of {} did not complete", video.name);
    }
    progress.finish_with_message("Upload complete");

    session.finish_upload(video);
    print_notices(&mut notices);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap(),
    );
    spinner.set_message("Analyzing video...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.analyze().await.cloned();
    spinner.finish_and_clear();
    print_notices(&mut notices);

    print_snapshot(&result?, json)
}

/// Print the sample report immediately.
pub fn cmd_sample(json: bool) -> anyhow::Result<()> {
    print_snapshot(&generate_sample_data(), json)
}

//! Terminal rendering of analysis reports and project lists.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use console::style;

use super::charts::{BarSeries, PieChart, ReportCharts};
use super::metrics::{percentage, ComplianceLevel, DerivedMetrics};
use crate::models::{saturating_total, AnalysisSnapshot, ProjectSummary};

const BAR_WIDTH: usize = 24;
const RULE_WIDTH: usize = 50;

/// Horizontal bar of `width` cells filled in proportion to `value / max`.
pub fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value.min(max) as f64 / max as f64) * width as f64).round() as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn heading(out: &mut String, title: &str, description: &str) {
    let _ = writeln!(out, "\n{}", style(title).bold());
    let _ = writeln!(out, "{}", style(description).dim());
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

fn rate_line(out: &mut String, label: &str, percent: u8) {
    let _ = writeln!(
        out,
        "  {:<24} {:>4}  {}",
        label,
        format!("{}%", percent),
        style(bar(percent as u32, 100, BAR_WIDTH)).cyan()
    );
}

fn pie_lines(out: &mut String, chart: &PieChart) {
    let _ = writeln!(out, "  {}", style(&chart.title).cyan());
    if chart.is_empty() {
        let _ = writeln!(out, "    {}", style("No data").dim());
        return;
    }
    for label in chart.labels() {
        let _ = writeln!(out, "    {}", label);
    }
}

fn bar_lines(out: &mut String, series: &BarSeries) {
    let _ = writeln!(out, "  {}", style(&series.title).cyan());
    if series.points.is_empty() {
        let _ = writeln!(out, "    {}", style("No data").dim());
        return;
    }
    let max = series.max();
    let label_width = series
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    for point in &series.points {
        let _ = writeln!(
            out,
            "    {:<width$}  {} {}",
            point.label,
            bar(point.value, max, BAR_WIDTH),
            point.value,
            width = label_width
        );
    }
}

/// Render a full analysis report for the terminal.
pub fn render_report<Tz>(snapshot: &AnalysisSnapshot, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let metrics = DerivedMetrics::from_snapshot(snapshot);
    let charts = ReportCharts::from_snapshot(snapshot);
    let mut out = String::new();

    heading(
        &mut out,
        "Site Activity Summary",
        &format!(
            "Analysis generated {} at {}",
            generated_at.format("%Y-%m-%d"),
            generated_at.format("%H:%M:%S")
        ),
    );
    for (label, count, caption) in [
        ("Workers", snapshot.workers.count, "People on site"),
        ("Vehicles", snapshot.vehicles.count, "Vehicles identified"),
        ("Equipment", snapshot.equipment.count, "Machinery in use"),
    ] {
        let _ = writeln!(
            out,
            "  {:<10} {:>4}  {}",
            label,
            style(count).bold(),
            style(caption).dim()
        );
    }

    heading(
        &mut out,
        "Worker Analysis",
        "Detailed breakdown of worker activity and safety compliance",
    );
    let compliance = match metrics.compliance_level {
        ComplianceLevel::Good => style("✓ compliant").green(),
        ComplianceLevel::Warning => style("! below 90%").yellow(),
    };
    let _ = writeln!(
        out,
        "  {:<24} {:>4}  {}  {}",
        "Safety Compliance Rate",
        format!("{}%", metrics.safety_compliance),
        style(bar(metrics.safety_compliance as u32, 100, BAR_WIDTH)).cyan(),
        compliance
    );
    rate_line(&mut out, "Productivity Rate", metrics.worker_productivity);
    pie_lines(&mut out, &charts.worker_safety);
    pie_lines(&mut out, &charts.worker_activity);
    bar_lines(&mut out, &charts.workers_by_time);

    heading(
        &mut out,
        "Vehicle Analysis",
        "Types and activity of vehicles on site",
    );
    rate_line(&mut out, "Utilization Rate", metrics.vehicle_utilization);
    pie_lines(&mut out, &charts.vehicle_types);
    pie_lines(&mut out, &charts.vehicle_activity);

    heading(
        &mut out,
        "Equipment Analysis",
        "Types and activity of machinery on site",
    );
    rate_line(&mut out, "Utilization Rate", metrics.equipment_utilization);
    pie_lines(&mut out, &charts.equipment_types);
    pie_lines(&mut out, &charts.equipment_activity);

    heading(
        &mut out,
        "Hazard Analysis",
        "Safety hazards identified on the construction site",
    );
    let _ = writeln!(
        out,
        "  {:<24} {:>4}",
        "Hazards Identified", snapshot.hazards.identified
    );
    bar_lines(&mut out, &charts.hazard_types);
    pie_lines(&mut out, &charts.hazard_severity);

    let progress = &snapshot.progress;
    heading(
        &mut out,
        "Project Progress",
        "Estimated progress from site activity",
    );
    rate_line(
        &mut out,
        "Completion",
        progress.completion_percentage.min(100),
    );
    let _ = writeln!(
        out,
        "  {:<24} {}",
        "Estimated Time Remaining", progress.estimated_time_remaining
    );
    let _ = writeln!(out, "  {:<24} {}", "Current Milestone", progress.milestone);

    out
}

/// Render the project list with progress bars.
pub fn render_projects(projects: &[ProjectSummary]) -> String {
    let mut out = String::new();
    heading(
        &mut out,
        "Your Projects",
        "Manage your construction projects and their analysis reports",
    );

    if projects.is_empty() {
        let _ = writeln!(out, "  {}", style("No projects yet").yellow());
        let _ = writeln!(
            out,
            "  {}",
            style("Create your first project to start tracking construction progress").dim()
        );
        return out;
    }

    let name_width = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    for project in projects {
        let _ = writeln!(
            out,
            "  {}  {:<width$}  {}  {} {:>3}%",
            style(&project.id).dim(),
            project.name,
            style(format!("Last updated: {}", project.date)).dim(),
            bar(project.progress_percent as u32, 100, 16),
            project.progress_percent,
            width = name_width
        );
    }

    let total = saturating_total(projects.iter().map(|p| p.progress_percent as u32));
    let average = percentage(total, (projects.len() as u32).saturating_mul(100));
    let _ = writeln!(
        out,
        "\n  {} projects, average progress {}%",
        projects.len(),
        average
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FleetStats;
    use crate::sample_data::{generate_sample_data, sample_projects};
    use chrono::Utc;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 10, 4), "░░░░");
        assert_eq!(bar(5, 10, 4), "██░░");
        assert_eq!(bar(10, 10, 4), "████");
        assert_eq!(bar(20, 10, 4), "████");
        assert_eq!(bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn test_report_contains_derived_rates() {
        let report = render_report(&generate_sample_data(), &generated_at());
        assert!(report.contains("Analysis generated 2023-05-15 at 14:30:00"));
        assert!(report.contains("Safety Compliance Rate"));
        assert!(report.contains("88%"));
        assert!(report.contains("Productivity Rate"));
        assert!(report.contains("75%"));
        assert!(report.contains("Structural framework completion"));
        assert!(report.contains("12 days"));
        assert!(report.contains("With Safety Gear: 88%"));
        assert!(report.contains("High: 20%"));
    }

    #[test]
    fn test_report_with_empty_equipment() {
        let mut snapshot = generate_sample_data();
        snapshot.equipment = FleetStats {
            count: 0,
            types: Vec::new(),
            active: 0,
            idle: 0,
        };

        let report = render_report(&snapshot, &generated_at());
        assert!(report.contains("No data"));
        assert!(!report.contains("NaN"));
    }

    #[test]
    fn test_report_with_huge_counts() {
        let mut snapshot = generate_sample_data();
        snapshot.workers.with_safety_gear = u32::MAX;
        snapshot.workers.without_safety_gear = 1;
        snapshot.hazards.severity[2].count = u32::MAX;

        let report = render_report(&snapshot, &generated_at());
        assert!(report.contains("With Safety Gear: 100%"));
        assert!(report.contains("High: 100%"));
    }

    #[test]
    fn test_render_projects() {
        let out = render_projects(&sample_projects());
        assert!(out.contains("Downtown Highrise"));
        assert!(out.contains("Last updated: 2023-04-22"));
        assert!(out.contains(" 24%"));
        assert!(out.contains("3 projects, average progress 45%"));
    }

    #[test]
    fn test_render_no_projects() {
        let out = render_projects(&[]);
        assert!(out.contains("No projects yet"));
    }
}

//! Chart data projected directly from snapshot fields.
//!
//! Nothing here computes beyond slice shares; any front end can draw these.

use serde::Serialize;

use super::metrics::percentage;
use crate::models::{
    saturating_total, AnalysisSnapshot, FleetStats, Severity, TimeOfDayCount, TypeCount,
};

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: u32,
    /// Share of the chart total, 0 when the total is 0.
    pub percent: u8,
}

/// A pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<ChartSlice>,
}

impl PieChart {
    /// Build a chart from (label, value) pairs.
    pub fn new<L: Into<String>>(
        title: impl Into<String>,
        values: impl IntoIterator<Item = (L, u32)>,
    ) -> Self {
        let values: Vec<(String, u32)> = values.into_iter().map(|(l, v)| (l.into(), v)).collect();
        let total = saturating_total(values.iter().map(|(_, v)| *v));

        Self {
            title: title.into(),
            slices: values
                .into_iter()
                .map(|(label, value)| ChartSlice {
                    percent: percentage(value, total),
                    label,
                    value,
                })
                .collect(),
        }
    }

    pub fn total(&self) -> u32 {
        saturating_total(self.slices.iter().map(|s| s.value))
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Slice labels in the "Name: 42%" form the report shows.
    pub fn labels(&self) -> Vec<String> {
        self.slices
            .iter()
            .map(|s| format!("{}: {}%", s.label, s.percent))
            .collect()
    }
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub value: u32,
}

/// A single-series bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub title: String,
    pub points: Vec<BarPoint>,
}

impl BarSeries {
    pub fn max(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }
}

fn types_to_bars(title: &str, types: &[TypeCount]) -> BarSeries {
    BarSeries {
        title: title.to_string(),
        points: types
            .iter()
            .map(|t| BarPoint {
                label: t.name.clone(),
                value: t.count,
            })
            .collect(),
    }
}

fn time_series_to_bars(title: &str, series: &[TimeOfDayCount]) -> BarSeries {
    BarSeries {
        title: title.to_string(),
        points: series
            .iter()
            .map(|p| BarPoint {
                label: p.time.clone(),
                value: p.count,
            })
            .collect(),
    }
}

fn activity_pie(title: &str, fleet: &FleetStats) -> PieChart {
    PieChart::new(title, [("Active", fleet.active), ("Idle", fleet.idle)])
}

fn types_pie(title: &str, types: &[TypeCount]) -> PieChart {
    PieChart::new(title, types.iter().map(|t| (t.name.as_str(), t.count)))
}

/// Every chart in the analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCharts {
    pub worker_safety: PieChart,
    pub worker_activity: PieChart,
    pub workers_by_time: BarSeries,
    pub vehicle_types: PieChart,
    pub vehicle_activity: PieChart,
    pub equipment_types: PieChart,
    pub equipment_activity: PieChart,
    pub hazard_types: BarSeries,
    pub hazard_severity: PieChart,
}

impl ReportCharts {
    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        let workers = &snapshot.workers;
        let hazards = &snapshot.hazards;

        Self {
            worker_safety: PieChart::new(
                "Safety Compliance",
                [
                    ("With Safety Gear", workers.with_safety_gear),
                    ("Without Safety Gear", workers.without_safety_gear),
                ],
            ),
            worker_activity: PieChart::new(
                "Worker Activity",
                [("Active", workers.active), ("Idle", workers.idle)],
            ),
            workers_by_time: time_series_to_bars(
                "Worker Count By Time of Day",
                &workers.by_time_of_day,
            ),
            vehicle_types: types_pie("Vehicle Types", &snapshot.vehicles.types),
            vehicle_activity: activity_pie("Vehicle Activity", &snapshot.vehicles),
            equipment_types: types_pie("Equipment Types", &snapshot.equipment.types),
            equipment_activity: activity_pie("Equipment Activity", &snapshot.equipment),
            hazard_types: types_to_bars("Hazard Types", &hazards.types),
            hazard_severity: PieChart::new(
                "Hazard Severity",
                Severity::all()
                    .into_iter()
                    .map(|level| (level.as_str(), hazards.count_at(level))),
            ),
        }
    }
}

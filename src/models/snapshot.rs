//! Site analysis snapshot models.
//!
//! A snapshot is the complete result of one (simulated) analysis run. It is
//! serialized with camelCase keys so it matches the JSON shape the dashboard
//! front end consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hazard severity level, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// All levels in ascending order.
    pub fn all() -> [Severity; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum counts without overflowing; saturates at `u32::MAX`.
pub fn saturating_total(counts: impl IntoIterator<Item = u32>) -> u32 {
    counts.into_iter().fold(0, u32::saturating_add)
}

/// Worker count observed at a point in the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayCount {
    /// Clock label, e.g. "8:00 AM".
    pub time: String,
    pub count: u32,
}

impl TimeOfDayCount {
    pub fn new(time: impl Into<String>, count: u32) -> Self {
        Self {
            time: time.into(),
            count,
        }
    }

    /// Minutes past midnight for the clock label, if it parses.
    pub fn minutes_of_day(&self) -> Option<u32> {
        parse_clock_label(&self.time)
    }
}

/// A named category with a count (vehicle type, hazard type, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub name: String,
    pub count: u32,
}

impl TypeCount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Count of hazards at one severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub level: Severity,
    pub count: u32,
}

/// Worker section of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerStats {
    pub count: u32,
    pub with_safety_gear: u32,
    pub without_safety_gear: u32,
    pub active: u32,
    pub idle: u32,
    /// Ordered by time of day. Not tied to `count`.
    pub by_time_of_day: Vec<TimeOfDayCount>,
}

/// Vehicle or equipment section of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub count: u32,
    pub types: Vec<TypeCount>,
    pub active: u32,
    pub idle: u32,
}

impl FleetStats {
    /// Sum of the per-type counts.
    pub fn types_total(&self) -> u32 {
        saturating_total(self.types.iter().map(|t| t.count))
    }
}

/// Hazard section of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardStats {
    pub identified: u32,
    pub types: Vec<TypeCount>,
    pub severity: Vec<SeverityCount>,
}

impl HazardStats {
    /// Count at the given severity, 0 if the level is absent.
    pub fn count_at(&self, level: Severity) -> u32 {
        saturating_total(
            self.severity
                .iter()
                .filter(|s| s.level == level)
                .map(|s| s.count),
        )
    }

    /// Most severe level with a non-zero count.
    pub fn worst(&self) -> Option<Severity> {
        self.severity
            .iter()
            .filter(|s| s.count > 0)
            .map(|s| s.level)
            .max()
    }
}

/// Project progress section of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Percent complete, 0..=100.
    pub completion_percentage: u8,
    pub estimated_time_remaining: String,
    pub milestone: String,
}

/// Result of one simulated site analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub workers: WorkerStats,
    pub vehicles: FleetStats,
    pub equipment: FleetStats,
    pub hazards: HazardStats,
    pub progress: ProgressSummary,
}

/// A broken consistency convention in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    /// Two sub-counts do not add up to their parent count.
    SplitMismatch {
        section: &'static str,
        split: &'static str,
        expected: u64,
        actual: u64,
    },
    /// Completion percentage above 100.
    CompletionOutOfRange(u8),
    /// Time-of-day series is not in chronological order (or has an unparsable label).
    TimeSeriesUnordered,
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitMismatch {
                section,
                split,
                expected,
                actual,
            } => write!(
                f,
                "{} {} sums to {}, expected {}",
                section, split, actual, expected
            ),
            Self::CompletionOutOfRange(p) => write!(f, "completion percentage {} exceeds 100", p),
            Self::TimeSeriesUnordered => f.write_str("worker time series is not in time order"),
        }
    }
}

impl AnalysisSnapshot {
    /// Check the counting conventions every generated snapshot should uphold.
    ///
    /// Returns an empty list for a consistent snapshot. Report rendering does
    /// not depend on this; derived ratios guard their own denominators.
    pub fn check_invariants(&self) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();
        let mut split = |section, split, expected: u32, parts: &mut dyn Iterator<Item = u32>| {
            let expected = u64::from(expected);
            let actual: u64 = parts.map(u64::from).sum();
            if expected != actual {
                issues.push(SnapshotIssue::SplitMismatch {
                    section,
                    split,
                    expected,
                    actual,
                });
            }
        };

        let w = &self.workers;
        split(
            "workers",
            "safety gear",
            w.count,
            &mut [w.with_safety_gear, w.without_safety_gear].into_iter(),
        );
        split("workers", "activity", w.count, &mut [w.active, w.idle].into_iter());

        for (section, fleet) in [("vehicles", &self.vehicles), ("equipment", &self.equipment)] {
            split(
                section,
                "activity",
                fleet.count,
                &mut [fleet.active, fleet.idle].into_iter(),
            );
            split(
                section,
                "types",
                fleet.count,
                &mut fleet.types.iter().map(|t| t.count),
            );
        }

        let h = &self.hazards;
        split(
            "hazards",
            "types",
            h.identified,
            &mut h.types.iter().map(|t| t.count),
        );
        split(
            "hazards",
            "severity",
            h.identified,
            &mut h.severity.iter().map(|s| s.count),
        );

        if self.progress.completion_percentage > 100 {
            issues.push(SnapshotIssue::CompletionOutOfRange(
                self.progress.completion_percentage,
            ));
        }

        if !is_chronological(&w.by_time_of_day) {
            issues.push(SnapshotIssue::TimeSeriesUnordered);
        }

        issues
    }

    pub fn is_consistent(&self) -> bool {
        self.check_invariants().is_empty()
    }
}

fn is_chronological(series: &[TimeOfDayCount]) -> bool {
    let mut last = None;
    for point in series {
        let Some(minutes) = point.minutes_of_day() else {
            return false;
        };
        if last.is_some_and(|prev| minutes < prev) {
            return false;
        }
        last = Some(minutes);
    }
    true
}

/// Parse a 12-hour clock label like "2:00 PM" into minutes past midnight.
fn parse_clock_label(label: &str) -> Option<u32> {
    let (clock, meridiem) = label.trim().rsplit_once(' ')?;
    let (hours, minutes) = clock.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if !(1..=12).contains(&hours) || minutes >= 60 {
        return None;
    }

    let hours = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => hours % 12,
        "PM" => hours % 12 + 12,
        _ => return None,
    };
    Some(hours * 60 + minutes)
}

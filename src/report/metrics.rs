//! Derived ratios computed from snapshot counts at render time.

use serde::Serialize;

use crate::models::{AnalysisSnapshot, FleetStats};

/// Compliance ratio at or above which the site counts as compliant.
pub const COMPLIANCE_THRESHOLD: f64 = 0.9;

/// `part / whole`, or 0.0 when `whole` is zero.
pub fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// `part / whole` as a rounded whole percentage, clamped to 0..=100.
///
/// A zero denominator yields 0 rather than an undefined value.
pub fn percentage(part: u32, whole: u32) -> u8 {
    (ratio(part, whole) * 100.0).round().min(100.0) as u8
}

/// Visual band for the safety compliance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    Good,
    Warning,
}

/// Percentages shown alongside the report charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    /// Workers wearing safety gear.
    pub safety_compliance: u8,
    /// Active workers.
    pub worker_productivity: u8,
    /// Active vehicles.
    pub vehicle_utilization: u8,
    /// Active equipment.
    pub equipment_utilization: u8,
    pub compliance_level: ComplianceLevel,
}

impl DerivedMetrics {
    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        let workers = &snapshot.workers;
        let compliance_ratio = ratio(workers.with_safety_gear, workers.count);

        Self {
            safety_compliance: percentage(workers.with_safety_gear, workers.count),
            worker_productivity: percentage(workers.active, workers.count),
            vehicle_utilization: utilization(&snapshot.vehicles),
            equipment_utilization: utilization(&snapshot.equipment),
            compliance_level: if compliance_ratio >= COMPLIANCE_THRESHOLD {
                ComplianceLevel::Good
            } else {
                ComplianceLevel::Warning
            },
        }
    }
}

/// Share of a fleet that is active.
pub fn utilization(fleet: &FleetStats) -> u8 {
    percentage(fleet.active, fleet.count)
}

//! Analysis report presentation.
//!
//! - `metrics`: derived percentages with zero-denominator guards
//! - `charts`: chart data projected from snapshot fields
//! - `render`: terminal rendering for the CLI

pub mod charts;
pub mod metrics;
pub mod render;

pub use charts::{BarPoint, BarSeries, ChartSlice, PieChart, ReportCharts};
pub use metrics::{percentage, ratio, ComplianceLevel, DerivedMetrics};
pub use render::{render_projects, render_report};

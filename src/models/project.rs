//! Project summary model.

use serde::{Deserialize, Serialize};

/// A construction project shown in the dashboard project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Stable identifier, e.g. "proj-001".
    pub id: String,
    pub name: String,
    /// Last update date (ISO `YYYY-MM-DD`).
    pub date: String,
    /// Percent complete, 0..=100.
    #[serde(rename = "progress")]
    pub progress_percent: u8,
}

impl ProjectSummary {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        progress_percent: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            progress_percent: progress_percent.min(100),
        }
    }

    /// Parse the date field, if it is a valid calendar date.
    pub fn parsed_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

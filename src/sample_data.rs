//! Fixed sample data standing in for real inference output.

use crate::models::{
    AnalysisSnapshot, FleetStats, HazardStats, ProgressSummary, ProjectSummary, Severity,
    SeverityCount, TimeOfDayCount, TypeCount, WorkerStats,
};

/// Build the sample site analysis. Always returns the same snapshot.
pub fn generate_sample_data() -> AnalysisSnapshot {
    AnalysisSnapshot {
        workers: WorkerStats {
            count: 24,
            with_safety_gear: 21,
            without_safety_gear: 3,
            active: 18,
            idle: 6,
            by_time_of_day: vec![
                TimeOfDayCount::new("8:00 AM", 22),
                TimeOfDayCount::new("10:00 AM", 24),
                TimeOfDayCount::new("12:00 PM", 18),
                TimeOfDayCount::new("2:00 PM", 23),
                TimeOfDayCount::new("4:00 PM", 24),
            ],
        },
        vehicles: FleetStats {
            count: 8,
            types: vec![
                TypeCount::new("Dump Truck", 3),
                TypeCount::new("Excavator", 2),
                TypeCount::new("Bulldozer", 1),
                TypeCount::new("Concrete Mixer", 2),
            ],
            active: 6,
            idle: 2,
        },
        equipment: FleetStats {
            count: 12,
            types: vec![
                TypeCount::new("Crane", 1),
                TypeCount::new("Generator", 3),
                TypeCount::new("Compressor", 2),
                TypeCount::new("Welder", 4),
                TypeCount::new("Jackhammer", 2),
            ],
            active: 9,
            idle: 3,
        },
        hazards: HazardStats {
            identified: 5,
            types: vec![
                TypeCount::new("Tripping Hazard", 2),
                TypeCount::new("Falling Objects", 1),
                TypeCount::new("Electrical", 1),
                TypeCount::new("Chemical Spill", 1),
            ],
            severity: vec![
                SeverityCount {
                    level: Severity::Low,
                    count: 2,
                },
                SeverityCount {
                    level: Severity::Medium,
                    count: 2,
                },
                SeverityCount {
                    level: Severity::High,
                    count: 1,
                },
            ],
        },
        progress: ProgressSummary {
            completion_percentage: 68,
            estimated_time_remaining: "12 days".to_string(),
            milestone: "Structural framework completion".to_string(),
        },
    }
}

/// The user's projects shown on the dashboard.
pub fn sample_projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary::new("proj-001", "Downtown Highrise", "2023-05-15", 68),
        ProjectSummary::new("proj-002", "Riverside Bridge", "2023-04-22", 42),
        ProjectSummary::new("proj-003", "Metro Station Expansion", "2023-06-01", 24),
    ]
}

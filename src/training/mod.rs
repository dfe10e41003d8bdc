//! Training log module
//!
//! Distance log entries, their persistence, and the read-only views the
//! calendar, chart and summary are built from.

pub mod aggregate;
pub mod log;
pub mod milestones;
pub mod types;

// Re-export commonly used types
pub use aggregate::{
    records_on_date, recent_window_aggregate, total_distance, training_days, DailyTotals,
    WindowAggregate, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use log::TrainingLog;
pub use milestones::{distance_milestone, Milestone};
pub use types::{Category, NewTrainingRecord, TrainingError, TrainingRecord};

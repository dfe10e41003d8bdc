//! Read-only views over the training log.
//!
//! A record's calendar day is the date portion of its `sortDate` in the
//! offset it was entered with.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

use super::types::{Category, TrainingRecord};

/// Default length of the trailing chart window.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest trailing window, one leap year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Sum of all distances in metres. Unknown amounts count as zero.
pub fn total_distance(records: &[TrainingRecord]) -> f64 {
    records.iter().map(TrainingRecord::distance_m).sum()
}

/// Records whose session falls on `date`.
pub fn records_on_date(records: &[TrainingRecord], date: NaiveDate) -> Vec<&TrainingRecord> {
    let prefix = date.format("%Y-%m-%d").to_string();
    records
        .iter()
        .filter(|r| r.sort_date.to_rfc3339().starts_with(&prefix))
        .collect()
}

/// Days that carry at least one record, for calendar marks.
pub fn training_days(records: &[TrainingRecord]) -> BTreeSet<NaiveDate> {
    records.iter().map(|r| r.sort_date.date_naive()).collect()
}

/// Distance totals for one day of the chart window.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    /// Calendar day
    pub date: NaiveDate,
    /// Axis label, `M/D`
    pub label: String,
    /// Metres per category, in the window's column order
    pub amounts: Vec<f64>,
}

impl DailyTotals {
    /// Sum across all columns.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// Per-day, per-category distance table for a trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAggregate {
    /// Column order
    pub categories: Vec<Category>,
    /// One row per day, oldest first
    pub days: Vec<DailyTotals>,
}

impl WindowAggregate {
    /// Largest single-day total, 0 for an empty window.
    pub fn max_day_total(&self) -> f64 {
        self.days.iter().map(DailyTotals::total).fold(0.0, f64::max)
    }

    /// Whether no distance was logged anywhere in the window.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.total() == 0.0)
    }

    /// Window total for one category, 0 if it is not a column.
    pub fn category_total(&self, category: Category) -> f64 {
        self.categories
            .iter()
            .position(|c| *c == category)
            .map_or(0.0, |col| self.days.iter().map(|d| d.amounts[col]).sum())
    }
}

/// Bucket distances for the `days` calendar days ending on `today`.
///
/// Days without records are zero-filled. Records outside the window or in
/// categories that are not requested are ignored. `days` is capped at
/// [`MAX_WINDOW_DAYS`], and days before the earliest representable date are
/// left out.
pub fn recent_window_aggregate(
    records: &[TrainingRecord],
    days: u32,
    categories: &[Category],
    today: NaiveDate,
) -> WindowAggregate {
    let days = days.min(MAX_WINDOW_DAYS);
    let mut rows: Vec<DailyTotals> = (0..i64::from(days))
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|date| DailyTotals {
            date,
            label: format!("{}/{}", date.month(), date.day()),
            amounts: vec![0.0; categories.len()],
        })
        .collect();

    if let Some(first) = rows.first().map(|r| r.date) {
        for record in records {
            let day = record.sort_date.date_naive();
            if day < first || day > today {
                continue;
            }
            let Some(col) = categories.iter().position(|c| *c == record.category) else {
                continue;
            };
            let row = (day - first).num_days() as usize;
            rows[row].amounts[col] += record.distance_m();
        }
    }

    WindowAggregate {
        categories: categories.to_vec(),
        days: rows,
    }
}

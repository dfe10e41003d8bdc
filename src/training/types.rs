//! Training log type definitions.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::storage::lenient;

/// Kind of rowing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Rowing in a boat
    #[serde(alias = "乗艇")]
    OnWater,
    /// Rowing machine
    #[serde(alias = "エルゴ")]
    Ergometer,
}

impl Category {
    /// All categories, in chart column order.
    pub const ALL: [Category; 2] = [Category::OnWater, Category::Ergometer];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::OnWater => "On-water",
            Category::Ergometer => "Ergometer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on-water" | "onwater" | "water" | "boat" | "乗艇" => Ok(Category::OnWater),
            "ergometer" | "ergo" | "erg" | "エルゴ" => Ok(Category::Ergometer),
            other => Err(TrainingError::InvalidCategory(other.to_string())),
        }
    }
}

/// One logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    /// Unique id derived from the creation time in milliseconds
    pub id: String,
    /// Distance in metres; `None` if the stored value was not numeric
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub amount: Option<f64>,
    /// Session kind
    pub category: Category,
    /// Free-text note
    #[serde(default)]
    pub memo: String,
    /// Session day as shown in lists
    #[serde(alias = "date")]
    pub display_date: String,
    /// Session timestamp with the offset it was entered in
    #[serde(alias = "dateForSort")]
    pub sort_date: DateTime<FixedOffset>,
}

impl TrainingRecord {
    /// Distance in metres, 0 when unknown.
    pub fn distance_m(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Input for a new training record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainingRecord {
    /// Distance in metres
    pub amount: f64,
    /// Session kind
    pub category: Category,
    /// Free-text note
    pub memo: String,
    /// When the session took place
    pub date: DateTime<FixedOffset>,
}

impl NewTrainingRecord {
    /// Create a record input without a memo.
    pub fn new(amount: f64, category: Category, date: DateTime<FixedOffset>) -> Self {
        Self {
            amount,
            category,
            memo: String::new(),
            date,
        }
    }

    /// Attach a memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}

/// List-style date, `Y/M/D` without padding.
pub fn display_date(date: &DateTime<FixedOffset>) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// Training log errors.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("Invalid distance: {0} (must be greater than zero)")]
    InvalidAmount(f64),

    #[error("Invalid category: '{0}' (expected on-water or ergometer)")]
    InvalidCategory(String),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

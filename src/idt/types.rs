//! IDT type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::IdtError;
use crate::storage::lenient;

/// Placeholder shown when there is no best time yet.
pub const NO_TIME_DISPLAY: &str = "--";

/// A 2000 m ergometer time entered as minutes, seconds and tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErgoTime {
    minutes: u32,
    seconds: u32,
    tenths: u32,
}

impl ErgoTime {
    /// Build a time from its entry fields.
    ///
    /// Seconds must be below 60, tenths below 10, and the total above zero.
    pub fn new(minutes: u32, seconds: u32, tenths: u32) -> Result<Self, IdtError> {
        let time = Self {
            minutes,
            seconds,
            tenths,
        };

        if seconds >= 60 || tenths >= 10 {
            return Err(IdtError::InvalidTimeInput(format!(
                "{} (seconds must be 0-59 and tenths 0-9)",
                time
            )));
        }
        if minutes == 0 && seconds == 0 && tenths == 0 {
            return Err(IdtError::InvalidTimeInput(format!(
                "{} (time must be greater than zero)",
                time
            )));
        }

        Ok(time)
    }

    /// Whole minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds past the minute.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Tenths of a second.
    pub fn tenths(&self) -> u32 {
        self.tenths
    }

    /// Total time in seconds: `minutes*60 + seconds + tenths*0.1`.
    pub fn total_seconds(&self) -> f64 {
        self.minutes as f64 * 60.0 + self.seconds as f64 + self.tenths as f64 * 0.1
    }
}

impl fmt::Display for ErgoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}.{}", self.minutes, self.seconds, self.tenths)
    }
}

impl FromStr for ErgoTime {
    type Err = IdtError;

    /// Parse `M:SS.D` or `M:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IdtError::InvalidTimeInput(format!("'{}' (expected M:SS.D)", s));
        let number = |part: &str| -> Result<u32, IdtError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let (minutes, rest) = s.trim().split_once(':').ok_or_else(invalid)?;
        let (seconds, tenths) = match rest.split_once('.') {
            Some((sec, tenth)) if tenth.len() == 1 => (sec, tenth),
            Some(_) => return Err(invalid()),
            None => (rest, "0"),
        };

        Self::new(number(minutes)?, number(seconds)?, number(tenths)?)
    }
}

/// One IDT calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdtRecord {
    /// Unique id derived from the creation time in milliseconds
    pub id: String,
    /// Raw, unrounded score
    pub idt_score: f64,
    /// Ergometer time in seconds
    pub ergo_time_seconds: f64,
    /// Time as entered, `M:SS.D`
    #[serde(alias = "ergoTimeString")]
    pub ergo_time_display: String,
    /// Profile weight at the time of calculation
    #[serde(default, deserialize_with = "lenient::decimal_text")]
    pub weight: String,
    /// Creation timestamp
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
}

impl IdtRecord {
    /// Score rounded for display.
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.idt_score)
    }

    /// Reject records that could never have been created.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("record without id".to_string());
        }
        if !self.ergo_time_seconds.is_finite() || self.ergo_time_seconds <= 0.0 {
            return Err(format!(
                "record {} has non-positive ergometer time {}",
                self.id, self.ergo_time_seconds
            ));
        }
        if !self.idt_score.is_finite() {
            return Err(format!("record {} has non-finite score", self.id));
        }
        Ok(())
    }
}

/// The best score ever recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScore {
    /// Score value
    pub score: f64,
    /// Ergometer time that produced it
    #[serde(default, alias = "time")]
    pub ergo_time_display: String,
    /// Weight at the time
    #[serde(default, deserialize_with = "lenient::decimal_text")]
    pub weight: String,
}

impl From<&IdtRecord> for HighScore {
    fn from(record: &IdtRecord) -> Self {
        Self {
            score: record.idt_score,
            ergo_time_display: record.ergo_time_display.clone(),
            weight: record.weight.clone(),
        }
    }
}

/// Fastest recorded time, or nothing yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestRecord<'a> {
    /// Record with the lowest ergometer time
    Record(&'a IdtRecord),
    /// History is empty
    Empty,
}

impl<'a> BestRecord<'a> {
    /// Time display, `--` when empty.
    pub fn display(&self) -> &str {
        match self {
            BestRecord::Record(r) => &r.ergo_time_display,
            BestRecord::Empty => NO_TIME_DISPLAY,
        }
    }

    /// Score of the best record, `0` when empty.
    pub fn score(&self) -> f64 {
        match self {
            BestRecord::Record(r) => r.idt_score,
            BestRecord::Empty => 0.0,
        }
    }

    /// The underlying record, if any.
    pub fn record(&self) -> Option<&'a IdtRecord> {
        match *self {
            BestRecord::Record(r) => Some(r),
            BestRecord::Empty => None,
        }
    }
}

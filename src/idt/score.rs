//! IDT score formula and best-time lookup.
//!
//! IDT relates a 2000 m ergometer time to body weight with a fixed empirical
//! formula per gender. Higher is better.

use super::error::{IdtError, IdtResult};
use super::types::{BestRecord, IdtRecord};
use crate::profile::Gender;

/// Compute the IDT score.
///
/// ```text
/// male   = ((101 - weight) * (20.9 / 23) + 333.07) / seconds * 100
/// female = ((100 - weight) * 1.4        + 357.8 ) / seconds * 100
/// ```
pub fn compute_score(ergo_time_seconds: f64, weight_kg: f64, gender: Gender) -> IdtResult<f64> {
    if !ergo_time_seconds.is_finite() || ergo_time_seconds <= 0.0 {
        return Err(IdtError::InvalidTimeInput(format!(
            "{} seconds (must be a positive number)",
            ergo_time_seconds
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(IdtError::InvalidWeight(format!(
            "{} kg (must be a positive number)",
            weight_kg
        )));
    }

    let score = match gender {
        Gender::Male => ((101.0 - weight_kg) * (20.9 / 23.0) + 333.07) / ergo_time_seconds * 100.0,
        Gender::Female => ((100.0 - weight_kg) * 1.4 + 357.8) / ergo_time_seconds * 100.0,
    };

    Ok(score)
}

/// Record with the fastest ergometer time.
///
/// The first of equally fast records wins.
pub fn best_record(history: &[IdtRecord]) -> BestRecord<'_> {
    history
        .iter()
        .fold(None, |best: Option<&IdtRecord>, current| match best {
            Some(b) if current.ergo_time_seconds >= b.ergo_time_seconds => Some(b),
            _ => Some(current),
        })
        .map_or(BestRecord::Empty, BestRecord::Record)
}

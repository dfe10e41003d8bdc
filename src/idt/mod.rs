//! IDT scoring module
//!
//! Scores 2000 m ergometer times, keeps the calculation history and the
//! all-time high score.

pub mod engine;
pub mod error;
pub mod score;
pub mod types;

// Re-export commonly used types
pub use engine::{IdtEngine, ScoreOutcome};
pub use error::{IdtError, IdtResult};
pub use score::{best_record, compute_score};
pub use types::{BestRecord, ErgoTime, HighScore, IdtRecord, NO_TIME_DISPLAY};

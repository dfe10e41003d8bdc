//! RowLog - Rowing Training Log
//!
//! A local-first training log for rowers. Scores 2000 m ergometer times with
//! the IDT index, keeps the calculation history and an all-time high score,
//! and records on-water and ergometer distances with calendar and chart
//! views. All state lives in an injected key-value store.

pub mod idt;
pub mod profile;
pub mod storage;
pub mod training;

// Re-export commonly used types
pub use idt::engine::IdtEngine;
pub use profile::store::ProfileStore;
pub use storage::config::AppConfig;
pub use storage::kv::KeyValueStore;
pub use training::log::TrainingLog;

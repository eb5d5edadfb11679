//! Batch simulation and statistics.
//!
//! - [`engine`]: run N independent deal-and-play trials in parallel
//! - [`statistics`]: aggregate per-trial totals into a serializable report

pub mod engine;
pub mod statistics;

pub use engine::{
    simulate_batch, simulate_batch_with_recording, simulate_hand, simulate_hand_with_recording,
    HandRecord, SimulationResult,
};
pub use statistics::{aggregate_statistics, save_statistics, Distribution, PlayStatistics};

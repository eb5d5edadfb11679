//! # Cribbage — Pegging Throughput Simulator
//!
//! Simulates the **pegging** (play-to-31) phase of cribbage at scale: each
//! trial deals a random 8-card split into two 4-card hands, then plays the
//! hands out alternately under the running-count rules until both are empty.
//! The point is throughput measurement of many independent deal-and-play
//! trials, not scoring or multiplayer play.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Deal | [`dealing`] | Draw 8 distinct cards uniformly, split 4+4 |
//! | Play | [`pegging`] | Alternate turns, ≤31 legality, Go / double-Go reset |
//! | Batch | [`simulation`] | N independent trials in parallel, timing + stats |
//!
//! Trials are embarrassingly parallel: each owns its deal, its play state,
//! and its own seeded RNG stream. The only shared data is the immutable
//! 52-card universe.

pub mod cards;
pub mod constants;
pub mod dealing;
pub mod env_config;
pub mod pegging;
pub mod simulation;

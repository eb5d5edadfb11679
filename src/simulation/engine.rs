//! Trial runner — deals and plays N hands, in parallel, under the clock.
//!
//! Each trial is independent: it gets its own `SmallRng` seeded from the
//! batch seed plus its trial index, deals one 4+4 split, and plays it to
//! exhaustion. Trials run as a rayon parallel-for with no shared mutable
//! state, so the aggregate is identical in distribution regardless of
//! execution order.
//!
//! ## Recording mode
//!
//! `simulate_hand_with_recording` additionally captures the deal and the
//! full play/Go event sequence into a [`HandRecord`] for diagnostic
//! printing. The normal path keeps only compact [`HandTotals`].

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::dealing::{deal, Deal};
use crate::pegging::{HandTotals, Pegging, PlayEvent};

/// Results of a batch simulation: per-trial totals plus wall-clock time.
pub struct SimulationResult {
    pub totals: Vec<HandTotals>,
    pub elapsed: Duration,
}

impl SimulationResult {
    pub fn num_hands(&self) -> usize {
        self.totals.len()
    }

    /// Average wall-clock nanoseconds per simulated hand.
    pub fn ns_per_hand(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.totals.len().max(1) as f64
    }
}

/// One trial's full diagnostic record: the deal plus every play/Go event.
pub struct HandRecord {
    pub deal: Deal,
    pub events: Vec<PlayEvent>,
}

impl HandRecord {
    /// Totals derived from the recorded events.
    pub fn totals(&self) -> HandTotals {
        let mut totals = HandTotals::default();
        for event in &self.events {
            totals.steps += 1;
            match event {
                PlayEvent::Play { .. } => totals.plays += 1,
                PlayEvent::Go { reset, .. } => {
                    totals.gos += 1;
                    if *reset {
                        totals.resets += 1;
                    }
                }
            }
        }
        totals
    }
}

/// Simulate one hand: deal, play to exhaustion, return totals.
#[inline(always)]
pub fn simulate_hand(rng: &mut SmallRng) -> HandTotals {
    Pegging::new(deal(rng)).play_to_end()
}

/// Simulate one hand, recording the deal and every event.
pub fn simulate_hand_with_recording(rng: &mut SmallRng) -> HandRecord {
    let dealt = deal(rng);
    let mut peg = Pegging::new(dealt);
    let mut events = Vec::with_capacity(16);
    while !peg.is_done() {
        events.push(peg.step());
    }
    HandRecord { deal: dealt, events }
}

/// Simulate `num_hands` independent hands in parallel.
///
/// Trial `i` uses `SmallRng::seed_from_u64(seed.wrapping_add(i))`, so a
/// given seed reproduces the exact same set of trials regardless of thread
/// count or scheduling.
pub fn simulate_batch(num_hands: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let totals: Vec<HandTotals> = (0..num_hands)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_hand(&mut rng)
        })
        .collect();

    let elapsed = start.elapsed();
    SimulationResult { totals, elapsed }
}

/// Simulate `num_hands` hands in parallel with full recording.
pub fn simulate_batch_with_recording(num_hands: usize, seed: u64) -> Vec<HandRecord> {
    (0..num_hands)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_hand_with_recording(&mut rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trial_plays_all_eight_cards() {
        let result = simulate_batch(2000, 42);
        assert_eq!(result.num_hands(), 2000);
        for totals in &result.totals {
            assert_eq!(totals.plays, 8);
            assert!(totals.steps >= 8);
            assert_eq!(totals.steps, totals.plays + totals.gos);
            assert!(totals.resets <= totals.gos);
        }
    }

    #[test]
    fn test_batch_deterministic_per_seed() {
        let a = simulate_batch(500, 7);
        let b = simulate_batch(500, 7);
        assert_eq!(a.totals, b.totals);
    }

    #[test]
    fn test_recording_totals_agree_with_fast_path() {
        for i in 0..200 {
            let seed = 1000 + i;
            let mut rng = SmallRng::seed_from_u64(seed);
            let fast = simulate_hand(&mut rng);
            let mut rng = SmallRng::seed_from_u64(seed);
            let record = simulate_hand_with_recording(&mut rng);
            assert_eq!(record.totals(), fast);
        }
    }

    #[test]
    fn test_recorded_counts_stay_legal() {
        for seed in 0..500 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let record = simulate_hand_with_recording(&mut rng);
            for event in &record.events {
                if let PlayEvent::Play { count, .. } = event {
                    assert!(*count <= 31);
                }
            }
        }
    }
}

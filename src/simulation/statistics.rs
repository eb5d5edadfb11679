//! Aggregate statistics over a batch of simulated hands.
//!
//! Summarizes the per-trial totals (steps, Goes, count resets) and the
//! timing into a serializable report, optionally written as pretty JSON.

use serde::Serialize;

use super::engine::SimulationResult;

// ── Report structure ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PlayStatistics {
    pub num_hands: u64,
    pub seed: u64,
    pub threads: usize,
    pub elapsed_secs: f64,
    pub ns_per_hand: f64,
    /// Turns taken per hand (plays + Goes).
    pub steps: Distribution,
    /// "Go" declarations per hand.
    pub gos: Distribution,
    /// Double-Go count resets per hand.
    pub resets: Distribution,
    /// Hand count by total steps taken.
    pub step_histogram: Vec<HistogramBin>,
}

#[derive(Serialize)]
pub struct Distribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
}

#[derive(Serialize)]
pub struct HistogramBin {
    pub steps: u32,
    pub count: u64,
}

// ── Aggregation ────────────────────────────────────────────────────────────

fn distribution(values: &mut [u32]) -> Distribution {
    let n = values.len().max(1) as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    values.sort_unstable();
    Distribution {
        mean,
        std_dev: variance.sqrt(),
        min: values.first().copied().unwrap_or(0),
        max: values.last().copied().unwrap_or(0),
        median: values.get(values.len() / 2).copied().unwrap_or(0),
    }
}

pub fn aggregate_statistics(result: &SimulationResult, seed: u64, threads: usize) -> PlayStatistics {
    let mut steps: Vec<u32> = result.totals.iter().map(|t| t.steps).collect();
    let mut gos: Vec<u32> = result.totals.iter().map(|t| t.gos).collect();
    let mut resets: Vec<u32> = result.totals.iter().map(|t| t.resets).collect();

    let max_steps = steps.iter().copied().max().unwrap_or(0);
    let mut histogram: Vec<u64> = vec![0; max_steps as usize + 1];
    for &s in &steps {
        histogram[s as usize] += 1;
    }
    let step_histogram = histogram
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .map(|(steps, count)| HistogramBin {
            steps: steps as u32,
            count,
        })
        .collect();

    PlayStatistics {
        num_hands: result.totals.len() as u64,
        seed,
        threads,
        elapsed_secs: result.elapsed.as_secs_f64(),
        ns_per_hand: result.ns_per_hand(),
        steps: distribution(&mut steps),
        gos: distribution(&mut gos),
        resets: distribution(&mut resets),
        step_histogram,
    }
}

/// Write the report as pretty JSON, creating parent directories as needed.
pub fn save_statistics(stats: &PlayStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}

//! Cribbage pegging throughput benchmark.
//!
//! Usage:
//!   cribbage-simulate [N] [--seed S] [--output FILE] [--verbose]
//!
//! Runs N deal-and-play trials (default 1,000,000) across the rayon pool
//! and reports total elapsed time and per-hand latency. `--verbose` prints
//! each trial's deal and full play/Go sequence; `--output` writes aggregate
//! play statistics as pretty JSON.

use std::fmt::Write as _;
use std::time::Instant;

use rand::Rng;

use cribbage::constants::DEFAULT_NUM_HANDS;
use cribbage::pegging::PlayEvent;
use cribbage::simulation::{
    aggregate_statistics, save_statistics, simulate_batch, simulate_batch_with_recording,
    HandRecord, SimulationResult,
};

// ── Argument parsing ───────────────────────────────────────────────────────

struct Args {
    num_hands: usize,
    seed: Option<u64>,
    output: Option<String>,
    verbose: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_hands = DEFAULT_NUM_HANDS;
    let mut seed: Option<u64> = None;
    let mut output: Option<String> = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--verbose" => {
                verbose = true;
            }
            "--help" | "-h" => {
                println!("Usage: cribbage-simulate [N] [--seed S] [--output FILE] [--verbose]");
                println!();
                println!("Arguments:");
                println!("  N              Number of hands to simulate (default: {})", DEFAULT_NUM_HANDS);
                println!();
                println!("Options:");
                println!("  --seed S       RNG seed (default: entropy)");
                println!("  --output FILE  Write aggregate play statistics to FILE as JSON");
                println!("  --verbose      Print each hand's deal and play-by-play");
                println!();
                println!("Environment:");
                println!("  RAYON_NUM_THREADS  Worker threads (default: all cores)");
                std::process::exit(0);
            }
            other => {
                num_hands = other.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid hand count: {}", other);
                    eprintln!("Usage: cribbage-simulate [N] [--seed S] [--output FILE] [--verbose]");
                    std::process::exit(1);
                });
            }
        }
        i += 1;
    }

    Args {
        num_hands,
        seed,
        output,
        verbose,
    }
}

// ── Diagnostic formatting ──────────────────────────────────────────────────

/// Format one trial's deal and play-by-play as a single block, so each
/// trial's lines land in the output together.
fn format_record(record: &HandRecord) -> String {
    let mut out = String::new();
    let [hand0, hand1] = record.deal.hands;
    let show = |cards: &[cribbage::cards::Card]| {
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let _ = writeln!(out, "Hands are {}; {}.", show(hand0.cards()), show(hand1.cards()));
    for event in &record.events {
        match event {
            PlayEvent::Play { player, card, count } => {
                let _ = writeln!(out, "{} plays {} for {}.", player, card, count);
            }
            PlayEvent::Go { player, reset } => {
                let _ = writeln!(out, "{} says \"Go!\"", player);
                if *reset {
                    let _ = writeln!(out, "Play count resets to 0.");
                }
            }
        }
    }
    out
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args = parse_args();
    let threads = cribbage::env_config::init_rayon_threads();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let result = if args.verbose {
        let start = Instant::now();
        let records = simulate_batch_with_recording(args.num_hands, seed);
        let elapsed = start.elapsed();
        for record in &records {
            print!("{}", format_record(record));
        }
        SimulationResult {
            totals: records.iter().map(HandRecord::totals).collect(),
            elapsed,
        }
    } else {
        simulate_batch(args.num_hands, seed)
    };

    println!(
        "Simulated {} hands in {:.3} s for {:.1} ns per hand",
        result.num_hands(),
        result.elapsed.as_secs_f64(),
        result.ns_per_hand()
    );

    if let Some(path) = args.output {
        let stats = aggregate_statistics(&result, seed, threads);
        save_statistics(&stats, &path);
        println!("Statistics written to {}", path);
    }
}

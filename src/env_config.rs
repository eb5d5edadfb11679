//! Environment configuration shared by the simulation binaries.

/// Build the rayon global pool from `RAYON_NUM_THREADS` (fallback
/// `OMP_NUM_THREADS`) when set; otherwise leave rayon's default sizing.
/// Tolerates an already-initialized pool. Returns the effective thread count.
pub fn init_rayon_threads() -> usize {
    if let Some(num_threads) = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
    {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // May fail if already initialized
    }
    rayon::current_num_threads()
}

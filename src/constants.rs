//! Game constants shared across the crate.

/// Cards in a standard deck.
pub const DECK_SIZE: u8 = 52;

/// Ranks per suit (Ace through King).
pub const RANKS_PER_SUIT: u8 = 13;

/// Cards dealt to each player for the play phase.
pub const HAND_SIZE: usize = 4;

/// Cards drawn per deal (two hands' worth).
pub const DEAL_SIZE: usize = 2 * HAND_SIZE;

/// The running count may never exceed this when a card is played.
pub const COUNT_LIMIT: u8 = 31;

/// Trials to run when the caller does not supply a count.
pub const DEFAULT_NUM_HANDS: usize = 1_000_000;

/// Hard ceiling on steps per hand used by tests to prove termination.
/// 16 plays plus a handful of Go/reset cycles stays far below this.
pub const STEP_SAFETY_LIMIT: usize = 10_000;

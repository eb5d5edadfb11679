//! Dealing: draw 8 distinct cards uniformly at random, split into two hands.
//!
//! Draws use rejection sampling against a 52-bit seen-mask: draw a uniform
//! card index, retry on duplicates, stop at 8 distinct cards. With at most
//! 7 of 52 cards excluded the expected retry count is tiny, and the result
//! is exactly uniform without replacement.

use rand::Rng;

use crate::cards::{Card, Hand};
use crate::constants::{DEAL_SIZE, DECK_SIZE, HAND_SIZE};

/// A dealt pair of hands. The two card sets are disjoint and together hold
/// exactly 8 distinct cards; draw order is preserved within each hand.
#[derive(Clone, Copy, Debug)]
pub struct Deal {
    pub hands: [Hand; 2],
}

/// Deal two 4-card hands: first 4 cards drawn go to hand 0, the rest to
/// hand 1. Infallible.
#[inline(always)]
pub fn deal(rng: &mut impl Rng) -> Deal {
    let mut drawn = [Card::default(); DEAL_SIZE];
    let mut seen: u64 = 0;
    let mut n = 0;
    while n < DEAL_SIZE {
        let id = rng.random_range(0..DECK_SIZE);
        let bit = 1u64 << id;
        if seen & bit == 0 {
            seen |= bit;
            drawn[n] = Card::new(id);
            n += 1;
        }
    }
    Deal {
        hands: [
            Hand::from_cards(&drawn[..HAND_SIZE]),
            Hand::from_cards(&drawn[HAND_SIZE..]),
        ],
    }
}

//! The pegging engine: cribbage's play-to-31 state machine.
//!
//! Rules implemented, per the card-play phase of cribbage:
//!
//! - Turns strictly alternate every step, pone (non-dealer) first.
//! - A player must play their first card in hand order whose count value
//!   keeps the running count at or below 31 (legality-aware first fit —
//!   a fixed deterministic policy, not a search for a good play).
//! - A player with no legal card (hand empty, or every card would bust 31)
//!   declares "Go"; their turn passes without a card leaving the hand.
//! - Two consecutive Goes reset the running count to 0, reopening play for
//!   whatever cards remain.
//! - The hand is over exactly when both hands are empty.
//!
//! The machine is total and infallible: any valid deal terminates in a
//! bounded number of steps (8 plays plus a few Go/reset cycles), and the
//! running count never leaves `[0, 31]`.

use std::fmt;

use crate::cards::{Card, Hand};
use crate::dealing::Deal;

/// Which seat is playing. Pone (the non-dealer) leads the play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Pone,
    Dealer,
}

impl Player {
    /// Seat index: pone = 0, dealer = 1.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Player::Pone => 0,
            Player::Dealer => 1,
        }
    }

    #[inline(always)]
    pub fn other(self) -> Player {
        match self {
            Player::Pone => Player::Dealer,
            Player::Dealer => Player::Pone,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Pone => write!(f, "pone"),
            Player::Dealer => write!(f, "dealer"),
        }
    }
}

/// One step's outcome: a card played, or a Go (with `reset` set when it is
/// the second consecutive Go and the count has just been reset to 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayEvent {
    Play {
        player: Player,
        card: Card,
        /// Running count after this card.
        count: u8,
    },
    Go {
        player: Player,
        reset: bool,
    },
}

/// Per-hand totals, accumulated over one full play-out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandTotals {
    pub steps: u32,
    pub plays: u32,
    pub gos: u32,
    pub resets: u32,
}

/// The play state for one hand: two hands, whose turn, the running count,
/// and the consecutive-Go counter.
#[derive(Clone, Debug)]
pub struct Pegging {
    hands: [Hand; 2],
    to_play: Player,
    running_count: u8,
    consecutive_gos: u8,
}

impl Pegging {
    pub fn new(deal: Deal) -> Self {
        Pegging {
            hands: deal.hands,
            to_play: Player::Pone,
            running_count: 0,
            consecutive_gos: 0,
        }
    }

    /// Both hands exhausted.
    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.hands[0].is_empty() && self.hands[1].is_empty()
    }

    /// Running count since the last reset, in `[0, 31]`.
    #[inline(always)]
    pub fn running_count(&self) -> u8 {
        self.running_count
    }

    /// The player who acts on the next `step`.
    #[inline(always)]
    pub fn to_play(&self) -> Player {
        self.to_play
    }

    pub fn hands(&self) -> &[Hand; 2] {
        &self.hands
    }

    /// Advance one turn. Must not be called after `is_done()`.
    ///
    /// The turn passes to the other player on every step, play or Go.
    #[inline(always)]
    pub fn step(&mut self) -> PlayEvent {
        debug_assert!(!self.is_done());
        let player = self.to_play;
        let hand = &mut self.hands[player.index()];
        let event = match hand.first_playable(self.running_count) {
            Some(index) => {
                let card = hand.remove(index);
                self.running_count += card.count_value();
                self.consecutive_gos = 0;
                PlayEvent::Play {
                    player,
                    card,
                    count: self.running_count,
                }
            }
            None => {
                self.consecutive_gos += 1;
                let reset = self.consecutive_gos == 2;
                if reset {
                    self.running_count = 0;
                    self.consecutive_gos = 0;
                }
                PlayEvent::Go { player, reset }
            }
        };
        self.to_play = player.other();
        event
    }

    /// Run to completion, accumulating totals.
    pub fn play_to_end(&mut self) -> HandTotals {
        let mut totals = HandTotals::default();
        while !self.is_done() {
            totals.steps += 1;
            match self.step() {
                PlayEvent::Play { .. } => totals.plays += 1,
                PlayEvent::Go { reset, .. } => {
                    totals.gos += 1;
                    if reset {
                        totals.resets += 1;
                    }
                }
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal_of(hand0: &[u8], hand1: &[u8]) -> Deal {
        let h0: Vec<Card> = hand0.iter().map(|&i| Card::new(i)).collect();
        let h1: Vec<Card> = hand1.iter().map(|&i| Card::new(i)).collect();
        Deal {
            hands: [Hand::from_cards(&h0), Hand::from_cards(&h1)],
        }
    }

    fn run(deal: Deal) -> Vec<PlayEvent> {
        let mut peg = Pegging::new(deal);
        let mut events = Vec::new();
        while !peg.is_done() {
            events.push(peg.step());
            assert!(peg.running_count() <= 31);
            assert!(events.len() < 1000, "engine failed to terminate");
        }
        events
    }

    #[test]
    fn test_all_tens_trace() {
        // Both hands all 10-count cards: count runs 10/20/30, both sides
        // Go, the count resets, and play reopens — twice.
        use PlayEvent::*;
        let t = Card::new(9); // T♣
        let j = Card::new(10); // J♣
        let q = Card::new(11); // Q♣
        let k = Card::new(12); // K♣
        let td = Card::new(22); // T♦
        let jd = Card::new(23); // J♦
        let qd = Card::new(24); // Q♦
        let kd = Card::new(25); // K♦
        let events = run(deal_of(&[9, 10, 11, 12], &[22, 23, 24, 25]));
        assert_eq!(
            events,
            vec![
                Play { player: Player::Pone, card: t, count: 10 },
                Play { player: Player::Dealer, card: td, count: 20 },
                Play { player: Player::Pone, card: j, count: 30 },
                Go { player: Player::Dealer, reset: false },
                Go { player: Player::Pone, reset: true },
                Play { player: Player::Dealer, card: jd, count: 10 },
                Play { player: Player::Pone, card: q, count: 20 },
                Play { player: Player::Dealer, card: qd, count: 30 },
                Go { player: Player::Pone, reset: false },
                Go { player: Player::Dealer, reset: true },
                Play { player: Player::Pone, card: k, count: 10 },
                Play { player: Player::Dealer, card: kd, count: 20 },
            ]
        );
    }

    #[test]
    fn test_degenerate_single_card_vs_empty() {
        let events = run(deal_of(&[0], &[]));
        assert_eq!(
            events,
            vec![PlayEvent::Play {
                player: Player::Pone,
                card: Card::new(0),
                count: 1,
            }]
        );
    }

    #[test]
    fn test_exact_31_then_done() {
        // T + J + A + K = 31 exactly; all cards out, no Go needed.
        let events = run(deal_of(&[9, 0], &[23, 25]));
        let counts: Vec<u8> = events
            .iter()
            .map(|e| match e {
                PlayEvent::Play { count, .. } => *count,
                PlayEvent::Go { .. } => panic!("unexpected Go"),
            })
            .collect();
        assert_eq!(counts, vec![10, 20, 21, 31]);
    }

    #[test]
    fn test_double_go_reset_reopens_play() {
        // Counts run 10/20/30; dealer's Q busts, pone is empty, so the
        // double Go resets the count and the Q comes out at 10.
        use PlayEvent::*;
        let events = run(deal_of(&[9, 12], &[23, 24]));
        assert_eq!(
            events,
            vec![
                Play { player: Player::Pone, card: Card::new(9), count: 10 },
                Play { player: Player::Dealer, card: Card::new(23), count: 20 },
                Play { player: Player::Pone, card: Card::new(12), count: 30 },
                Go { player: Player::Dealer, reset: false },
                Go { player: Player::Pone, reset: true },
                Play { player: Player::Dealer, card: Card::new(24), count: 10 },
            ]
        );
    }

    #[test]
    fn test_first_fit_skips_busting_cards() {
        // At count 30, dealer's Q and 8 bust but the ace does not; the
        // first legal card in hand order is the one played.
        let events = run(deal_of(&[12, 25, 2, 8], &[22, 50, 33, 39]));
        // Step 4: dealer plays A♠ (id 39) for exactly 31, skipping Q♠ and 8♥.
        assert_eq!(
            events[3],
            PlayEvent::Play {
                player: Player::Dealer,
                card: Card::new(39),
                count: 31,
            }
        );
        // All 8 cards get played eventually.
        let plays = events
            .iter()
            .filter(|e| matches!(e, PlayEvent::Play { .. }))
            .count();
        assert_eq!(plays, 8);
    }

    #[test]
    fn test_turns_strictly_alternate() {
        let events = run(deal_of(&[9, 10, 11, 12], &[22, 23, 24, 25]));
        let mut expected = Player::Pone;
        for event in events {
            let player = match event {
                PlayEvent::Play { player, .. } => player,
                PlayEvent::Go { player, .. } => player,
            };
            assert_eq!(player, expected);
            expected = expected.other();
        }
    }

    #[test]
    fn test_play_to_end_totals_match_events() {
        let deal = deal_of(&[9, 10, 11, 12], &[22, 23, 24, 25]);
        let totals = Pegging::new(deal).play_to_end();
        assert_eq!(
            totals,
            HandTotals {
                steps: 12,
                plays: 8,
                gos: 4,
                resets: 2,
            }
        );
    }
}

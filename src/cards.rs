//! Card and hand value types.
//!
//! A card is a bare identifier in `[0, 52)`: `rank = card % 13` (0 = Ace,
//! 12 = King), `suit = card / 13`. Suit never affects play logic; it exists
//! for display. The pegging-relevant attribute is [`Card::count_value`]:
//! Ace counts 1, pip cards count face value, tens and court cards count 10.

use std::fmt;

use crate::constants::{COUNT_LIMIT, DECK_SIZE, HAND_SIZE, RANKS_PER_SUIT};

/// Rank symbols indexed by `rank()`.
const RANK_SYMBOLS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

/// Suit glyphs indexed by `suit()`: clubs, diamonds, hearts, spades.
const SUIT_SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// A single card, identified by its index in the 52-card deck.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// Wrap a deck index. Callers guarantee `id < 52`.
    #[inline(always)]
    pub fn new(id: u8) -> Self {
        debug_assert!(id < DECK_SIZE);
        Card(id)
    }

    /// The raw deck index in `[0, 52)`.
    #[inline(always)]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Rank in `[0, 13)`: 0 = Ace, 9 = Ten, 12 = King.
    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.0 % RANKS_PER_SUIT
    }

    /// Suit in `[0, 4)`. Irrelevant to play; used only for display.
    #[inline(always)]
    pub fn suit(self) -> u8 {
        self.0 / RANKS_PER_SUIT
    }

    /// Pegging count value: Ace = 1, 2–9 = face value, T/J/Q/K = 10.
    #[inline(always)]
    pub fn count_value(self) -> u8 {
        (self.rank() + 1).min(10)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_SYMBOLS[self.rank() as usize],
            SUIT_SYMBOLS[self.suit() as usize]
        )
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self, self.0)
    }
}

/// One player's hand: up to 4 cards, order-preserving removal.
///
/// Fixed capacity keeps a trial allocation-free; a hand starts at 4 cards
/// and only ever shrinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    len: u8,
}

impl Hand {
    /// Build a hand from up to 4 cards, preserving slice order.
    pub fn from_cards(cards: &[Card]) -> Self {
        assert!(cards.len() <= HAND_SIZE);
        let mut hand = Hand::default();
        hand.cards[..cards.len()].copy_from_slice(cards);
        hand.len = cards.len() as u8;
        hand
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remaining cards in hand order.
    #[inline(always)]
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len as usize]
    }

    /// Index of the first card in hand order whose count value keeps the
    /// running count within the 31 limit, if any.
    #[inline(always)]
    pub fn first_playable(&self, running_count: u8) -> Option<usize> {
        self.cards()
            .iter()
            .position(|c| running_count + c.count_value() <= COUNT_LIMIT)
    }

    /// Remove and return the card at `index`, shifting later cards down so
    /// the remaining hand order is preserved.
    #[inline(always)]
    pub fn remove(&mut self, index: usize) -> Card {
        debug_assert!(index < self.len as usize);
        let card = self.cards[index];
        for i in index..self.len as usize - 1 {
            self.cards[i] = self.cards[i + 1];
        }
        self.len -= 1;
        card
    }
}

//! The deck cards are dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeck;

/// An ordered pile of cards built from one or more packs.
///
/// Cards are dealt from the end. The deck is never refilled, so a game that
/// plays long enough will eventually hit [`EmptyDeck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `num_decks` packs and shuffles them with `rng`.
    ///
    /// A short pack holds only the ranks from "6" through "A".
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::{Deck, SHORT_DECK_SIZE};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(2, true, &mut rng);
    /// assert_eq!(deck.len(), 2 * SHORT_DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(num_decks: u8, short: bool, rng: &mut R) -> Self {
        let ranks = Rank::pack(short);
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for &rank in ranks {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Wraps the given cards without shuffling.
    ///
    /// The last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards into a random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards are left.
    pub fn deal(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

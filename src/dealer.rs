//! The dealer and its drawing policy.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeck;
use crate::hand::Hand;

/// The house side of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    /// The dealer's hand.
    pub hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns whether the dealer must take another card.
    ///
    /// The dealer draws below `stands_at`. A soft hand sitting exactly on
    /// `stands_at` is only hit when `stand_on_soft_17` is off.
    #[must_use]
    pub fn must_hit(&self, stands_at: u8, stand_on_soft_17: bool) -> bool {
        let value = self.hand.value();
        let stands_at = u32::from(stands_at);
        value < stands_at || (value == stands_at && !stand_on_soft_17 && self.hand.is_soft())
    }

    /// Draws cards until the policy says stop.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if the deck runs out while the dealer must draw.
    /// Cards drawn before that stay in the hand.
    pub fn play(
        &mut self,
        deck: &mut Deck,
        stands_at: u8,
        stand_on_soft_17: bool,
    ) -> Result<Vec<Card>, EmptyDeck> {
        let mut drawn = Vec::new();

        while self.must_hit(stands_at, stand_on_soft_17) {
            let card = deck.deal()?;
            self.hand.add_card(card);
            drawn.push(card);
            debug!(%card, value = self.hand.value(), "dealer draws");
        }

        Ok(drawn)
    }

    /// Returns the first card if any.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Renders the hand with every card after the first hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        match self.hand.cards().split_first() {
            Some((first, rest)) => format!("{first}{}", " ??".repeat(rest.len())),
            None => String::new(),
        }
    }
}

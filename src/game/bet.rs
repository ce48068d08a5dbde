use tracing::debug;

use crate::error::{BetError, DealError, EmptyDeck};
use crate::player::HandSlot;

use super::{Game, GameState};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

impl Game {
    /// Places the bet for the next round.
    ///
    /// The balance is not touched until the round resolves. Placing another
    /// bet before dealing replaces the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bet is zero,
    /// or the bet exceeds the balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.player.balance() {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        Ok(())
    }

    /// Deals two cards to the player and two to the dealer.
    ///
    /// Split is offered when the player's two cards share a rank. A natural
    /// blackjack skips the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or the deck holds fewer than four cards. Nothing is dealt on
    /// error.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if self.bet == 0 {
            return Err(DealError::NoBet);
        }

        if self.deck.len() < OPENING_CARDS {
            return Err(EmptyDeck.into());
        }

        self.player.clear_hands();
        self.dealer.hand.clear();

        for _ in 0..2 {
            let card = self.deck.deal()?;
            self.player.hand_mut(HandSlot::Primary).add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.deal()?;
            self.dealer.hand.add_card(card);
        }

        self.split_possible = self.player.primary().can_split();
        self.split_used = false;

        debug!(
            bet = self.bet,
            player = %self.player.primary(),
            dealer_up = ?self.dealer.up_card(),
            split_possible = self.split_possible,
            "dealt opening hands"
        );

        self.state = if self.player.primary().is_blackjack() {
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        };

        Ok(())
    }
}

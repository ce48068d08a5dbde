use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, EmptyDeck};
use crate::player::HandSlot;

use super::{Action, Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Applies a player decision.
    ///
    /// Returns the cards dealt by the action (none for stand, one for hit,
    /// two for split).
    ///
    /// # Errors
    ///
    /// See [`stand`](Self::stand), [`hit`](Self::hit) and [`split`](Self::split).
    pub fn act(&mut self, action: Action) -> Result<Vec<Card>, ActionError> {
        match action {
            Action::Stand => self.stand().map(|()| Vec::new()),
            Action::Hit => self.hit().map(|card| alloc::vec![card]),
            Action::Split => self.split().map(|(first, second)| alloc::vec![first, second]),
        }
    }

    /// Player action: Stand (end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(value = self.player.primary().value(), "player stands");
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card to the primary hand).
    ///
    /// A bust forfeits the bet immediately and ends the round without dealer
    /// play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal()?;
        let hand = self.player.hand_mut(HandSlot::Primary);
        hand.add_card(card);
        debug!(%card, value = hand.value(), "player hits");

        if hand.is_bust() {
            self.player.debit(self.bet);
            info!(
                bet = self.bet,
                balance = self.player.balance(),
                "player busts, bet forfeited"
            );
            self.finish_round();
        }

        Ok(card)
    }

    /// Player action: Split (move the first card into the split hand).
    ///
    /// Each hand then receives one new card. Only the primary hand is played
    /// on afterwards; the split hand keeps its two cards until settlement.
    /// Returns the cards dealt to the primary and split hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, split is not
    /// on offer, or the deck holds fewer than two cards. Nothing changes on
    /// error.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn split(&mut self) -> Result<(Card, Card), ActionError> {
        self.ensure_player_turn()?;

        if !self.split_available() {
            return Err(ActionError::SplitUnavailable);
        }

        if self.deck.len() < 2 {
            return Err(EmptyDeck.into());
        }

        let moved = self
            .player
            .hand_mut(HandSlot::Primary)
            .remove_card(0)
            .expect("split is only offered on a dealt pair");
        self.player.hand_mut(HandSlot::Split).add_card(moved);

        let first = self.deck.deal()?;
        self.player.hand_mut(HandSlot::Primary).add_card(first);
        let second = self.deck.deal()?;
        self.player.hand_mut(HandSlot::Split).add_card(second);

        self.split_used = true;
        self.split_possible = false;

        debug!(
            primary = %self.player.primary(),
            split = %self.player.split_hand(),
            "player splits"
        );

        if self.player.primary().is_blackjack() {
            self.state = GameState::DealerTurn;
        }

        Ok((first, second))
    }
}

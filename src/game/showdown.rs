use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameState};

/// Compares one hand against the dealer.
const fn compare(player_value: u32, dealer_value: u32, dealer_bust: bool) -> HandOutcome {
    if dealer_bust || player_value > dealer_value {
        HandOutcome::Win
    } else if player_value < dealer_value {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

/// Amounts `(payout, loss)` for a round with `wins` winning and `losses`
/// losing hands. At most one of them is non-zero.
///
/// Each win not cancelled by a loss pays the stake 1:1. With no win at all,
/// any loss costs a single stake: the split hand is not staked separately.
/// Pushes count as neither.
const fn settle(bet: usize, wins: usize, losses: usize) -> (usize, usize) {
    if wins > losses {
        (bet.saturating_mul(wins - losses), 0)
    } else if wins > 0 {
        (0, bet.saturating_mul(losses - wins))
    } else if losses > 0 {
        (0, bet)
    } else {
        (0, 0)
    }
}

impl Game {
    /// Dealer plays their hand according to the house policy.
    ///
    /// The dealer draws while below `dealer_stands_at`, and on a soft
    /// `dealer_stands_at` when `stand_on_soft_17` is off.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = self.dealer.play(
            &mut self.deck,
            self.options.dealer_stands_at,
            self.options.stand_on_soft_17,
        )?;
        debug!(
            drawn = drawn.len(),
            value = self.dealer.hand.value(),
            "dealer stands"
        );

        self.state = GameState::Settlement;
        Ok(drawn)
    }

    /// Settles the round and updates the balance.
    ///
    /// Every played hand is compared with the dealer. A natural blackjack is
    /// paid like any other win, and a tie leaves the balance alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer.hand.value();
        let dealer_bust = self.dealer.hand.is_bust();

        let hands: Vec<HandResult> = self
            .active_slots()
            .iter()
            .map(|&slot| {
                let hand = self.player.hand(slot);
                let player_value = hand.value();
                HandResult {
                    slot,
                    outcome: compare(player_value, dealer_value, dealer_bust),
                    player_value,
                    dealer_value,
                    blackjack: hand.is_blackjack(),
                }
            })
            .collect();

        let mut result = RoundResult {
            hands,
            bet: self.bet,
            payout: 0,
            loss: 0,
            balance: self.player.balance(),
            dealer_value,
            dealer_bust,
        };

        let (payout, loss) = settle(self.bet, result.wins(), result.losses());
        self.player.credit(payout);
        self.player.debit(loss);
        result.payout = payout;
        result.loss = loss;
        result.balance = self.player.balance();

        info!(
            bet = self.bet,
            wins = result.wins(),
            losses = result.losses(),
            payout,
            loss,
            balance = result.balance,
            "round settled"
        );

        self.finish_round();
        Ok(result)
    }
}

//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::HandSlot;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Dealer busts or the hand is higher.
    Win,
    /// The dealer is higher.
    Lose,
    /// Equal values. Neither credited nor debited.
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Which hand this is.
    pub slot: HandSlot,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's hand value.
    pub player_value: u32,
    /// The dealer's hand value.
    pub dealer_value: u32,
    /// Whether the hand was a natural blackjack (paid like any other win).
    pub blackjack: bool,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each played hand, primary first.
    pub hands: Vec<HandResult>,
    /// The stake for the round.
    pub bet: usize,
    /// Amount credited to the balance.
    pub payout: usize,
    /// Amount debited from the balance.
    pub loss: usize,
    /// Balance after settlement.
    pub balance: usize,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the number of winning hands.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.count(HandOutcome::Win)
    }

    /// Returns the number of losing hands.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.count(HandOutcome::Lose)
    }

    /// Returns the number of pushed hands.
    #[must_use]
    pub fn pushes(&self) -> usize {
        self.count(HandOutcome::Push)
    }

    fn count(&self, outcome: HandOutcome) -> usize {
        self.hands.iter().filter(|h| h.outcome == outcome).count()
    }
}

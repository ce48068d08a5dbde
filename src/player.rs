//! The player seat: hand slots and balance.

use crate::hand::Hand;

/// Names one of the player's hand slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSlot {
    /// The hand dealt at the start of the round.
    Primary,
    /// The hand created by a split.
    Split,
}

impl HandSlot {
    /// All slots in play order.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Split];

    const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Split => 1,
        }
    }
}

/// The player: two hand slots and a balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    hands: [Hand; 2],
    balance: usize,
}

impl Player {
    /// Creates a player with empty hands and the given balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            hands: [Hand::new(), Hand::new()],
            balance,
        }
    }

    /// Returns the hand in `slot`.
    #[must_use]
    pub const fn hand(&self, slot: HandSlot) -> &Hand {
        &self.hands[slot.index()]
    }

    /// Returns the hand in `slot` mutably.
    pub const fn hand_mut(&mut self, slot: HandSlot) -> &mut Hand {
        &mut self.hands[slot.index()]
    }

    /// Returns the primary hand.
    #[must_use]
    pub const fn primary(&self) -> &Hand {
        self.hand(HandSlot::Primary)
    }

    /// Returns the split hand (empty unless a split happened this round).
    #[must_use]
    pub const fn split_hand(&self) -> &Hand {
        self.hand(HandSlot::Split)
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub(crate) const fn debit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub(crate) fn clear_hands(&mut self) {
        for hand in &mut self.hands {
            hand.clear();
        }
    }
}

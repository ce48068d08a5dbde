//! Error types for game operations.

use thiserror::Error;

/// The deck ran out of cards.
///
/// There is no reshuffle policy, so this ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck is empty")]
pub struct EmptyDeck;

/// Errors from hand manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Card index past the end of the hand.
    #[error("card index {index} out of range for hand of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Split is not offered or was already used this round.
    #[error("split is not available")]
    SplitUnavailable,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur when closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has not finished yet.
    #[error("round is still in progress")]
    InProgress,
}

/// Fatal errors that end an interactive session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Betting failed for a reason other than an invalid amount.
    #[error("bet failed: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// Closing the round failed.
    #[error("round transition failed: {0}")]
    Round(#[from] RoundError),
}

#[cfg(feature = "std")]
impl SessionError {
    /// Returns whether the session ended because the deck ran out.
    #[must_use]
    pub const fn is_empty_deck(&self) -> bool {
        matches!(
            self,
            Self::Deal(DealError::EmptyDeck(_))
                | Self::Action(ActionError::EmptyDeck(_))
                | Self::Showdown(ShowdownError::EmptyDeck(_))
        )
    }
}

//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for player decisions on the primary hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are compared against the dealer.
    Settlement,
    /// Round has ended; the player may continue or stop.
    RoundOver,
    /// No more rounds will be played.
    GameOver,
}

/// A player decision during [`GameState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep the current hand.
    Stand,
    /// Take one more card.
    Hit,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Maps a menu number (1 = Stand, 2 = Hit, 3 = Split) to an action.
    ///
    /// Returns `None` for numbers outside the menu, including 3 when split
    /// is not on offer.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::Action;
    ///
    /// assert_eq!(Action::from_menu(2, false), Some(Action::Hit));
    /// assert_eq!(Action::from_menu(3, false), None);
    /// assert_eq!(Action::from_menu(3, true), Some(Action::Split));
    /// ```
    #[must_use]
    pub const fn from_menu(choice: u32, split_available: bool) -> Option<Self> {
        match choice {
            1 => Some(Self::Stand),
            2 => Some(Self::Hit),
            3 if split_available => Some(Self::Split),
            _ => None,
        }
    }
}

//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_split::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_short_deck(true)
///     .with_starting_balance(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of packs in the deck.
    pub decks: u8,
    /// Whether packs leave out ranks below "6".
    pub short_deck: bool,
    /// Balance the player starts with.
    pub starting_balance: usize,
    /// Value at which the dealer stops drawing.
    pub dealer_stands_at: u8,
    /// Whether the dealer stands on a soft hand worth exactly `dealer_stands_at`.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            short_deck: false,
            starting_balance: 10_000,
            dealer_stands_at: 17,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether packs are short (ranks "6" through "A").
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::GameOptions;
    ///
    /// let options = GameOptions::default().with_short_deck(true);
    /// assert!(options.short_deck);
    /// ```
    #[must_use]
    pub const fn with_short_deck(mut self, short: bool) -> Self {
        self.short_deck = short;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(100);
    /// assert_eq!(options.starting_balance, 100);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the value at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}

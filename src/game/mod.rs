//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::player::{HandSlot, Player};

mod actions;
mod bet;
mod showdown;
pub mod state;

pub use state::{Action, GameState};

/// A single-seat blackjack game that plays rounds against the dealer.
///
/// The game owns the deck, the player and the dealer. Rounds advance through
/// [`GameState`]: bet with [`place_bet`](Self::place_bet), then
/// [`deal`](Self::deal), then player actions, then
/// [`dealer_play`](Self::dealer_play) and [`showdown`](Self::showdown), and
/// finally [`next_round`](Self::next_round).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal. Built once per game and never refilled.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player: Player,
    dealer: Dealer,
    /// Stake for the current round.
    bet: usize,
    /// Whether the split option is still on offer this round.
    split_possible: bool,
    /// Whether a split happened this round.
    split_used: bool,
    /// Rounds that reached `RoundOver`.
    rounds_played: u32,
}

impl Game {
    /// Creates a new game whose deck is shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_split::{DECK_SIZE, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(2), 42);
    /// assert_eq!(game.cards_remaining(), 2 * DECK_SIZE);
    /// assert_eq!(game.balance(), 10_000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(options.decks, options.short_deck, &mut rng);
        Self::with_deck(options, deck)
    }

    /// Creates a new game that deals from `deck` as given.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let player = Player::new(options.starting_balance);
        Self {
            deck,
            options,
            state: GameState::Betting,
            player,
            dealer: Dealer::new(),
            bet: 0,
            split_possible: false,
            split_used: false,
            rounds_played: 0,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.player.balance()
    }

    /// Returns the stake for the current round (0 before a bet is placed).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether split is currently on offer.
    #[must_use]
    pub const fn split_available(&self) -> bool {
        self.split_possible && !self.split_used
    }

    /// Returns whether a split happened this round.
    #[must_use]
    pub const fn split_used(&self) -> bool {
        self.split_used
    }

    /// Returns the hand slots in play this round.
    #[must_use]
    pub fn active_slots(&self) -> &'static [HandSlot] {
        let all: &'static [HandSlot] = &HandSlot::ALL;
        if self.split_used { all } else { &all[..1] }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of finished rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns whether the player has nothing left to bet.
    #[must_use]
    pub const fn is_out_of_money(&self) -> bool {
        self.player.balance() == 0
    }

    /// Closes a finished round.
    ///
    /// The game ends if the balance is exhausted or `play_again` is false;
    /// otherwise it returns to betting.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached `RoundOver`.
    pub fn next_round(&mut self, play_again: bool) -> Result<GameState, RoundError> {
        if self.state != GameState::RoundOver {
            return Err(RoundError::InProgress);
        }

        self.bet = 0;
        self.split_possible = false;
        self.split_used = false;
        self.state = if self.is_out_of_money() || !play_again {
            GameState::GameOver
        } else {
            GameState::Betting
        };

        Ok(self.state)
    }

    /// Marks the round finished.
    fn finish_round(&mut self) {
        self.rounds_played += 1;
        self.state = GameState::RoundOver;
    }
}

//! A single-seat blackjack round engine with a one-split rule and optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a [`Deck`], a [`Player`] and a
//! [`Dealer`] and drives one round at a time through betting, dealing, player
//! decisions, an optional split, dealer play and settlement. With the `std`
//! feature, [`Console`] runs the same state machine as an interactive session
//! over any reader and writer.
//!
//! # Example
//!
//! ```
//! use blackjack_split::{Action, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//!
//! if game.state() == GameState::PlayerTurn {
//!     game.act(Action::Stand).unwrap();
//! }
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(result.balance, game.balance());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, SHORT_DECK_FIRST_RANK, SHORT_DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::{Console, EndReason, SessionSummary};
pub use dealer::Dealer;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SessionError;
pub use error::{ActionError, BetError, DealError, EmptyDeck, HandError, RoundError, ShowdownError};
pub use game::{Action, Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::{HandSlot, Player};
pub use result::{HandOutcome, HandResult, RoundResult};

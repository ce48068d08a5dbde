//! Interactive console session over any reader and writer.
//!
//! The session blocks on exactly three kinds of input: the bet, the action
//! choice and the play-again answer. Invalid bets and choices are reported and
//! re-prompted; everything else that fails ends the session with a
//! [`SessionError`].

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::{BetError, SessionError};
use crate::game::{Action, Game, GameState};
use crate::result::{HandOutcome, RoundResult};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The balance reached zero.
    OutOfMoney,
    /// The player did not answer "yes" to play again.
    Declined,
    /// Input ended while waiting for an answer.
    InputClosed,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Final balance.
    pub balance: usize,
    /// Why the session ended.
    pub reason: EndReason,
}

/// Drives a [`Game`] from line-based input.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the balance runs out, the player stops, or input
    /// ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, the deck runs out, or the
    /// game is not in betting state when called.
    pub fn run(&mut self, game: &mut Game) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "Welcome to BlackJack with Split Rule!")?;

        let reason = loop {
            if !self.take_bet(game)? {
                break EndReason::InputClosed;
            }

            game.deal()?;
            writeln!(self.output, "Dealer: {}", game.dealer().masked())?;
            writeln!(self.output, "You: {}", game.player().primary())?;

            if !self.player_turn(game)? {
                break EndReason::InputClosed;
            }

            if game.state() == GameState::DealerTurn {
                game.dealer_play()?;
                writeln!(self.output, "Dealer: {}", game.dealer().hand)?;
                let result = game.showdown()?;
                self.report(&result)?;
            }

            writeln!(self.output, "Your balance: {}", game.balance())?;

            if game.is_out_of_money() {
                writeln!(self.output, "You are out of money. Game over.")?;
                game.next_round(false)?;
                break EndReason::OutOfMoney;
            }

            self.prompt("Play again? (yes/no): ")?;
            let Some(answer) = self.read_line()? else {
                game.next_round(false)?;
                break EndReason::InputClosed;
            };

            if game.next_round(answer == "yes")? == GameState::GameOver {
                break EndReason::Declined;
            }
        };

        debug!(?reason, rounds = game.rounds_played(), "session ended");

        Ok(SessionSummary {
            rounds: game.rounds_played(),
            balance: game.balance(),
            reason,
        })
    }

    /// Prompts until a valid bet is placed. Returns `false` if input ended.
    fn take_bet(&mut self, game: &mut Game) -> Result<bool, SessionError> {
        loop {
            self.prompt(&format!("Your balance: {}. Your bet? ", game.balance()))?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let Ok(amount) = line.parse::<usize>() else {
                warn!(input = %line, "bet is not a number");
                writeln!(self.output, "Invalid bet.")?;
                continue;
            };

            match game.place_bet(amount) {
                Ok(()) => return Ok(true),
                Err(err @ (BetError::ZeroBet | BetError::InsufficientFunds)) => {
                    warn!(input = %line, %err, "rejected bet");
                    writeln!(self.output, "Invalid bet.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Runs the decision loop for the primary hand. Returns `false` if input
    /// ended.
    fn player_turn(&mut self, game: &mut Game) -> Result<bool, SessionError> {
        loop {
            if game.player().primary().is_blackjack() {
                writeln!(self.output, "Congratulations, you have Blackjack!")?;
                return Ok(true);
            }

            if game.state() != GameState::PlayerTurn {
                return Ok(true);
            }

            let split_available = game.split_available();
            writeln!(self.output, "1. Stand\n2. Hit")?;
            if split_available {
                writeln!(self.output, "3. Split")?;
            }
            self.prompt("Your choice: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let Some(action) = line
                .parse::<u32>()
                .ok()
                .and_then(|choice| Action::from_menu(choice, split_available))
            else {
                warn!(input = %line, "rejected choice");
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            game.act(action)?;

            match action {
                Action::Stand => return Ok(true),
                Action::Hit => {
                    writeln!(self.output, "You: {}", game.player().primary())?;
                    if game.player().primary().is_bust() {
                        writeln!(self.output, "Bust! You lose.")?;
                        return Ok(true);
                    }
                }
                Action::Split => {
                    writeln!(self.output, "Split hands:")?;
                    writeln!(self.output, "Hand 1: {}", game.player().primary())?;
                    writeln!(self.output, "Hand 2: {}", game.player().split_hand())?;
                }
            }
        }
    }

    fn report(&mut self, result: &RoundResult) -> Result<(), SessionError> {
        let message = if let [hand] = result.hands.as_slice() {
            match hand.outcome {
                HandOutcome::Win => "You win!",
                HandOutcome::Lose => "Dealer wins.",
                HandOutcome::Push => "Push.",
            }
        } else {
            match (result.wins(), result.losses()) {
                (2, _) => "Both hands win!",
                (1, 1) => "One hand wins, one hand loses.",
                (1, _) => "One hand wins, one hand pushes.",
                (_, 2) => "Both hands lose.",
                (_, 1) => "One hand loses, one hand pushes.",
                _ => "Both hands push.",
            }
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

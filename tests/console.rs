//! Console session tests with scripted input.

use blackjack_split::{
    Card, Console, Deck, EndReason, Game, GameOptions, Rank, SessionSummary, Suit,
};

fn deck_from_draws(ranks: &[Rank]) -> Deck {
    let mut cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect();
    cards.reverse();
    Deck::from_cards(cards)
}

fn play(options: GameOptions, draws: &[Rank], input: &str) -> (SessionSummary, String) {
    let mut game = Game::with_deck(options, deck_from_draws(draws));
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let summary = console.run(&mut game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (summary, output)
}

#[test]
fn invalid_bet_is_reprompted_before_dealing() {
    let (summary, output) = play(
        GameOptions::default().with_starting_balance(100),
        &[Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine],
        "150\nabc\n50\n1\nno\n",
    );

    assert_eq!(output.matches("Invalid bet.").count(), 2);
    assert_eq!(output.matches("Your balance: 100. Your bet? ").count(), 3);
    let rejected = output.find("Invalid bet.").unwrap();
    let dealt = output.find("Dealer: ").unwrap();
    assert!(rejected < dealt);

    assert!(output.contains("Dealer wins."));
    assert!(output.contains("Your balance: 50\n"));
    assert_eq!(
        summary,
        SessionSummary {
            rounds: 1,
            balance: 50,
            reason: EndReason::Declined,
        }
    );
}

#[test]
fn invalid_choice_is_reprompted() {
    let (summary, output) = play(
        GameOptions::default(),
        &[Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine],
        "10\n7\n3\nhit\n1\nno\n",
    );

    assert_eq!(output.matches("Invalid choice.").count(), 3);
    assert!(!output.contains("3. Split"));
    assert_eq!(summary.balance, 9_990);
}

#[test]
fn opening_deal_hides_dealer_hole_card() {
    let (_, output) = play(
        GameOptions::default(),
        &[Rank::Ten, Rank::Seven, Rank::Ace, Rank::Nine],
        "10\n1\nno\n",
    );

    assert!(output.contains("Dealer: A\u{2660} ??\n"));
    assert!(output.contains("You: 10\u{2660} 7\u{2660}\n"));
    assert!(output.contains("Dealer: A\u{2660} 9\u{2660}\n"));
}

#[test]
fn bust_skips_dealer_turn() {
    let (summary, output) = play(
        GameOptions::default(),
        &[Rank::Ten, Rank::Nine, Rank::Eight, Rank::Eight, Rank::Five],
        "10\n2\nno\n",
    );

    assert!(output.contains("Bust! You lose."));
    assert_eq!(output.matches("Dealer:").count(), 1);
    assert_eq!(summary.balance, 9_990);
}

#[test]
fn blackjack_ends_decisions_and_pays_even_money() {
    let (summary, output) = play(
        GameOptions::default(),
        &[Rank::Ace, Rank::King, Rank::Ten, Rank::Seven],
        "10\nno\n",
    );

    assert!(output.contains("Congratulations, you have Blackjack!"));
    assert!(!output.contains("Your choice: "));
    assert!(output.contains("You win!"));
    assert_eq!(summary.balance, 10_010);
}

#[test]
fn split_is_offered_and_reported() {
    let (summary, output) = play(
        GameOptions::default(),
        &[
            Rank::Eight,
            Rank::Eight,
            Rank::Ten,
            Rank::Seven,
            Rank::Three,
            Rank::Ten,
        ],
        "10\n3\n1\nno\n",
    );

    assert_eq!(output.matches("3. Split").count(), 1);
    assert!(output.contains("Split hands:\nHand 1: 8\u{2660} 3\u{2660}\nHand 2: 8\u{2660} 10\u{2660}\n"));
    assert!(output.contains("One hand wins, one hand loses."));
    assert_eq!(summary.balance, 10_000);
}

#[test]
fn running_out_of_money_ends_without_prompt() {
    let (summary, output) = play(
        GameOptions::default().with_starting_balance(100),
        &[Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine],
        "100\n1\n",
    );

    assert!(output.contains("You are out of money. Game over."));
    assert!(!output.contains("Play again?"));
    assert_eq!(summary.reason, EndReason::OutOfMoney);
    assert_eq!(summary.balance, 0);
}

#[test]
fn only_exact_yes_continues() {
    let draws = [
        Rank::Ten,
        Rank::Nine,
        Rank::Ten,
        Rank::Seven,
        Rank::Ten,
        Rank::Seven,
        Rank::Ten,
        Rank::Nine,
    ];

    let (summary, _) = play(GameOptions::default(), &draws, "10\n1\nyes\n10\n1\nno\n");
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.balance, 10_000);
    assert_eq!(summary.reason, EndReason::Declined);

    let (summary, _) = play(GameOptions::default(), &draws, "10\n1\nYes\n");
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.balance, 10_010);
    assert_eq!(summary.reason, EndReason::Declined);
}

#[test]
fn closed_input_ends_session() {
    let (summary, output) = play(GameOptions::default(), &[], "");
    assert_eq!(summary.reason, EndReason::InputClosed);
    assert_eq!(summary.rounds, 0);
    assert!(output.starts_with("Welcome to BlackJack with Split Rule!\n"));
}

#[test]
fn empty_deck_aborts_session() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        deck_from_draws(&[Rank::Ten, Rank::Nine, Rank::Eight]),
    );
    let mut console = Console::new("10\n".as_bytes(), Vec::new());

    let err = console.run(&mut game).unwrap_err();
    assert!(err.is_empty_deck());
}
